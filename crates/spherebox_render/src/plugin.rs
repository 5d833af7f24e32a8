use bevy::prelude::*;
use spherebox_sim::{Container, SimulationSet};

use super::boundary;
use super::camera;
use super::spheres;
use super::ui;

/// Scene, controls and HUD around the simulation
pub struct SphereboxRenderPlugin;

impl Plugin for SphereboxRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::HudThrottle>()
            .add_systems(Startup, (camera::spawn_camera, ui::spawn_hud))
            .add_systems(
                Startup,
                spheres::spawn_particle_spheres.after(SimulationSet::Init),
            )
            .add_systems(
                Update,
                (ui::container_control_system, ui::pause_control_system)
                    .before(SimulationSet::Tick),
            )
            .add_systems(
                Update,
                (
                    camera::orbit_camera_system,
                    boundary::rebuild_boundary.run_if(resource_changed::<Container>),
                    spheres::update_particle_spheres.after(SimulationSet::Tick),
                    ui::update_hud.after(SimulationSet::Tick),
                ),
            );
    }
}
