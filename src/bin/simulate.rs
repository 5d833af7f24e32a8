//! Headless run: ticks the simulation a fixed number of times without a window
//! and prints what happened. Useful for checking a mass list or a resize schedule.

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use spherebox_core::{ConfigOverrides, SimConfig};
use spherebox_sim::{Container, SimulationPlugin, SimulationSet, SimulationState};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(about = "Run the sphere simulation without rendering")]
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
    /// Number of ticks to run
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u64,
    /// Tick after which the container is resized
    #[arg(long, requires = "resize_to")]
    resize_at: Option<u64>,
    /// Container size to switch to at `--resize-at`
    #[arg(long, requires = "resize_at")]
    resize_to: Option<f64>,
}

/// What the headless run should do and when to stop
#[derive(Resource)]
struct RunPlan {
    ticks: u64,
    resize: Option<(u64, f64)>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let overrides = ConfigOverrides {
        config_file: args.config,
        masses: args.masses,
        container_size: args.size,
        seed: args.seed,
    };

    let config = match SimConfig::load(&overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("simulate: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let container = Container::from_config(&config);
    let plan = RunPlan {
        ticks: args.ticks,
        resize: args.resize_at.zip(args.resize_to),
    };

    let exit = App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::ZERO)),
        )
        .add_plugins(LogPlugin::default())
        .insert_resource(container)
        .insert_resource(SimulationState::empty(config))
        .insert_resource(plan)
        .add_plugins(SimulationPlugin)
        .add_systems(Update, apply_resize.before(SimulationSet::Tick))
        .add_systems(Update, finish_run.after(SimulationSet::Tick))
        .run();

    match exit {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(code) => ExitCode::from(code.get()),
    }
}

/// Resize the container once the planned tick has passed
fn apply_resize(plan: Res<RunPlan>, sim: Res<SimulationState>, mut container: ResMut<Container>) {
    let Some((at, size)) = plan.resize else {
        return;
    };
    if sim.stats.ticks != at {
        return;
    }
    match container.set_size(size) {
        Ok(applied) => info!("Tick {}: container resized to {}", at, applied),
        Err(e) => warn!("Tick {}: resize rejected: {}", at, e),
    }
}

/// Print the summary and stop after the planned number of ticks
fn finish_run(
    plan: Res<RunPlan>,
    sim: Res<SimulationState>,
    container: Res<Container>,
    mut exit: EventWriter<AppExit>,
) {
    if !sim.is_initialized() || sim.stats.ticks < plan.ticks {
        return;
    }

    println!("Ticks:           {}", sim.stats.ticks);
    println!("Spheres:         {}", sim.particle_count());
    println!("Seed:            {}", sim.seed);
    println!("Container size:  {}", container.size);
    println!("Wall hits:       {}", sim.stats.wall_hits);
    println!("Pair collisions: {}", sim.stats.pair_collisions);
    for i in 0..sim.particle_count() {
        let p = sim.particles.positions[i];
        let v = sim.particles.velocities[i];
        println!(
            "  #{:<3} m={:<8.3} r={:<6.3} pos=({:>7.3}, {:>7.3}, {:>7.3}) vel=({:>8.5}, {:>8.5}, {:>8.5})",
            i,
            sim.particles.masses[i],
            sim.particles.radii[i],
            p[0],
            p[1],
            p[2],
            v[0],
            v[1],
            v[2]
        );
    }

    exit.send(AppExit::Success);
}
