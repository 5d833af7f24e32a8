pub mod container;
pub mod pipeline;
pub mod state;

pub use container::Container;
pub use pipeline::{SimulationPlugin, SimulationSet};
pub use state::{RunStats, SimulationState};
