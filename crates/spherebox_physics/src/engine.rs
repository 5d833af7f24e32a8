use spherebox_core::{Particles, Wall};

use crate::contacts::{detect_pair_collisions, resolve_pair_collisions};
use crate::walls::{detect_wall_collision, resolve_wall_collision};

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Particle index and the face it bounced off, in index order
    pub wall_hits: Vec<(usize, Wall)>,
    /// Overlapping pairs whose velocities were reversed, in ascending order
    pub pair_collisions: Vec<(usize, usize)>,
}

impl TickReport {
    pub fn is_quiet(&self) -> bool {
        self.wall_hits.is_empty() && self.pair_collisions.is_empty()
    }
}

/// Advance the simulation by one tick inside a cube of edge `size`.
///
/// 1. For each particle in index order: move by its velocity, then bounce off
///    at most one wall.
/// 2. Once every particle has moved, reverse the velocities of all overlapping pairs.
///
/// The pair pass therefore sees positions after this tick's wall clamping.
pub fn step(particles: &mut Particles, size: f64) -> TickReport {
    let mut report = TickReport::default();

    for i in 0..particles.len() {
        let velocity = particles.velocities[i];
        let position = &mut particles.positions[i];
        position[0] += velocity[0];
        position[1] += velocity[1];
        position[2] += velocity[2];

        let radius = particles.radii[i];
        if let Some(wall) = detect_wall_collision(*position, radius, size) {
            resolve_wall_collision(&mut particles.velocities[i], position, radius, wall, size);
            report.wall_hits.push((i, wall));
        }
    }

    report.pair_collisions = detect_pair_collisions(particles);
    resolve_pair_collisions(particles, &report.pair_collisions);

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawn::spawn_particles;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use spherebox_core::{DEFAULT_DENSITY, INITIAL_SPEED};

    #[test]
    fn test_empty_is_noop() {
        let mut particles = Particles::default();
        let report = step(&mut particles, 12.0);
        assert!(report.is_quiet());
        assert!(particles.is_empty());
    }

    #[test]
    fn test_free_flight_moves_by_velocity() {
        let mut particles = Particles {
            masses: vec![1.0],
            radii: vec![1.0],
            positions: vec![[0.0, 1.0, -1.0]],
            velocities: vec![[0.5, -0.25, 0.125]],
        };
        let report = step(&mut particles, 12.0);
        assert!(report.is_quiet());
        assert_eq!(particles.positions[0], [0.5, 0.75, -0.875]);
        assert_eq!(particles.velocities[0], [0.5, -0.25, 0.125]);
    }

    #[test]
    fn test_overlapping_pair_reverses_exactly() {
        // Two unit spheres 0.1 apart: they overlap after the move and bounce
        let v0 = [0.001, -0.0005, 0.0002];
        let v1 = [-0.0007, 0.0003, 0.0009];
        let mut particles = Particles {
            masses: vec![1.0, 1.0],
            radii: vec![1.0, 1.0],
            positions: vec![[0.0, 0.0, 0.0], [0.1, 0.0, 0.0]],
            velocities: vec![v0, v1],
        };

        let report = step(&mut particles, 12.0);
        assert_eq!(report.pair_collisions, vec![(0, 1)]);
        assert!(report.wall_hits.is_empty());
        assert_eq!(particles.velocities[0], [-v0[0], -v0[1], -v0[2]]);
        assert_eq!(particles.velocities[1], [-v1[0], -v1[1], -v1[2]]);
    }

    #[test]
    fn test_wall_bounce_then_pair_sees_clamped_position() {
        // Particle 0 moves through the right wall and is clamped to x = 5;
        // particle 1 sits at x = 3.5, 1.5 away from the clamped center.
        let mut particles = Particles {
            masses: vec![1.0, 1.0],
            radii: vec![1.0, 1.0],
            positions: vec![[5.5, 0.0, 0.0], [3.5, 0.0, 0.0]],
            velocities: vec![[1.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
        };

        let report = step(&mut particles, 12.0);
        assert_eq!(report.wall_hits, vec![(0, Wall::Right)]);
        assert_eq!(particles.positions[0], [5.0, 0.0, 0.0]);
        assert_eq!(report.pair_collisions, vec![(0, 1)]);
        // Bounced by the wall, then reversed again by the pair
        assert_eq!(particles.velocities[0], [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_size_is_taken_per_call() {
        let mut particles = Particles {
            masses: vec![1.0],
            radii: vec![1.0],
            positions: vec![[4.0, 0.0, 0.0]],
            velocities: vec![[0.001, 0.0, 0.0]],
        };

        let report = step(&mut particles, 12.0);
        assert!(report.wall_hits.is_empty());

        let report = step(&mut particles, 6.0);
        assert_eq!(report.wall_hits, vec![(0, Wall::Right)]);
        assert_eq!(particles.positions[0][0], 2.0);
        assert_eq!(particles.velocities[0][0], -0.001);
    }

    #[test]
    fn test_long_run_stays_inside() {
        let size = 12.0;
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let masses: Vec<f64> = (0..20).map(|i| 0.2 + i as f64 * 0.1).collect();
        let mut particles =
            spawn_particles(&masses, size, DEFAULT_DENSITY, INITIAL_SPEED * 200.0, &mut rng)
                .unwrap();

        for _ in 0..2_000 {
            step(&mut particles, size);
            for i in 0..particles.len() {
                let r = particles.radii[i];
                for axis in 0..3 {
                    let p = particles.positions[i][axis];
                    assert!(
                        p + r <= size / 2.0 + 1e-9 && p - r >= -size / 2.0 - 1e-9,
                        "particle {} escaped on axis {}: {}",
                        i,
                        axis,
                        p
                    );
                }
            }
        }
    }
}
