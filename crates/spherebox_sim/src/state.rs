use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use spherebox_core::{ConfigError, Particles, SimConfig};
use spherebox_physics::spawn::spawn_particles;
use spherebox_physics::{step, TickReport};

use crate::container::Container;

/// Cumulative counters across the whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub ticks: u64,
    pub wall_hits: u64,
    pub pair_collisions: u64,
}

/// Simulation state, tracked as a Bevy Resource.
/// The tick system is its only writer; the renderer reads it.
#[derive(Resource)]
pub struct SimulationState {
    /// Per-particle mass, radius, position, velocity
    pub particles: Particles,
    /// Simulation config
    pub config: SimConfig,
    /// Seed the particles were generated from
    pub seed: u64,
    /// Whether the tick is suspended
    pub paused: bool,
    /// Events of the most recent tick
    pub last_report: TickReport,
    /// Totals since initialization
    pub stats: RunStats,
    initialized: bool,
}

impl SimulationState {
    /// Placeholder with no particles (used before initialization)
    pub fn empty(config: SimConfig) -> Self {
        Self {
            particles: Particles::default(),
            seed: config.seed.unwrap_or(0),
            config,
            paused: false,
            last_report: TickReport::default(),
            stats: RunStats::default(),
            initialized: false,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Build the particles from the configured masses inside `container`.
    ///
    /// Runs once: later calls return `Ok(false)` and change nothing. On error the
    /// state stays empty and uninitialized.
    pub fn initialize(&mut self, container: &Container) -> Result<bool, ConfigError> {
        if self.initialized {
            return Ok(false);
        }
        self.config.validate()?;

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let particles = spawn_particles(
            &self.config.masses,
            container.size,
            self.config.density,
            self.config.max_initial_speed,
            &mut rng,
        )?;

        info!(
            "Initialized {} particles in a container of size {} (seed {})",
            particles.len(),
            container.size,
            seed
        );

        self.particles = particles;
        self.seed = seed;
        self.initialized = true;
        Ok(true)
    }

    /// Advance one tick inside a container of edge `size`.
    /// Does nothing while paused or before initialization.
    pub fn tick(&mut self, size: f64) {
        if self.paused || !self.initialized {
            return;
        }

        let report = step(&mut self.particles, size);

        for &(i, wall) in &report.wall_hits {
            debug!("Particle {} hit the {} wall", i, wall.name());
        }
        for &(i, j) in &report.pair_collisions {
            debug!("Collision between particles {} and {}", i, j);
        }

        self.stats.ticks += 1;
        self.stats.wall_hits += report.wall_hits.len() as u64;
        self.stats.pair_collisions += report.pair_collisions.len() as u64;
        self.last_report = report;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        info!("Simulation {}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }
}
