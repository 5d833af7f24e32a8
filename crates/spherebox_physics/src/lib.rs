pub mod contacts;
pub mod engine;
pub mod spawn;
pub mod walls;

pub use engine::{step, TickReport};
