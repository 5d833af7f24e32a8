use bevy::prelude::*;

use super::container::Container;
use super::state::SimulationState;

/// Ordering labels for the simulation systems
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Startup: particles are built. Anything that reads them at startup runs after.
    Init,
    /// Update: one step per frame. Systems that change the container size run
    /// before it so the new size takes effect on the same frame.
    Tick,
}

/// Bevy plugin for the simulation pipeline.
/// The host inserts `SimulationState`; `Container` falls back to the default size.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Container>()
            .add_systems(Startup, initialize_simulation.in_set(SimulationSet::Init))
            .add_systems(Update, simulation_tick.in_set(SimulationSet::Tick));
    }
}

/// Make sure the state is built before the first tick. A no-op when the host
/// already initialized it; a configuration error stops the app.
fn initialize_simulation(
    mut sim: ResMut<SimulationState>,
    container: Res<Container>,
    mut exit: EventWriter<AppExit>,
) {
    if let Err(e) = sim.initialize(&container) {
        error!("Simulation not started: {}", e);
        exit.send(AppExit::error());
    }
}

/// Main simulation tick: one step per frame, using the container size as it is now
fn simulation_tick(mut sim: ResMut<SimulationState>, container: Res<Container>) {
    sim.tick(container.size);
}
