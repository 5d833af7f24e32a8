pub mod config;
pub mod constants;
pub mod error;
pub mod masses;
pub mod types;

pub use config::{ConfigOverrides, SimConfig};
pub use constants::*;
pub use error::ConfigError;
pub use types::*;
