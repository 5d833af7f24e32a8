use bevy::prelude::*;
use clap::Parser;
use spherebox_core::{ConfigOverrides, SimConfig};
use spherebox_render::plugin::SphereboxRenderPlugin;
use spherebox_sim::{Container, SimulationPlugin, SimulationState};
use std::path::PathBuf;
use std::process::ExitCode;

/// Spheres bouncing around inside a box
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Sphere masses as a JSON array, e.g. "[1, 2.5, 3]"
    #[arg(short, long)]
    masses: Option<String>,
    /// Initial container edge length
    #[arg(short, long)]
    size: Option<f64>,
    /// Seed for reproducible starting positions
    #[arg(long)]
    seed: Option<u64>,
    /// JSON config file; command line values take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let overrides = ConfigOverrides {
        config_file: args.config,
        masses: args.masses,
        container_size: args.size,
        seed: args.seed,
    };

    // Build the particles before opening a window so bad input fails fast
    let config = match SimConfig::load(&overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("spherebox: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let container = Container::from_config(&config);
    let mut sim = SimulationState::empty(config);
    if let Err(e) = sim.initialize(&container) {
        eprintln!("spherebox: {}", e);
        return ExitCode::FAILURE;
    }

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "spherebox".into(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(container)
        .insert_resource(sim)
        .add_plugins(SimulationPlugin)
        .add_plugins(SphereboxRenderPlugin)
        .run();

    match exit {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(code) => ExitCode::from(code.get()),
    }
}
