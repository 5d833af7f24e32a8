use spherebox_core::{distance, Particles, Vec3};

/// Two spheres collide when their centers are closer than the sum of their radii
pub fn spheres_overlap(a: Vec3, radius_a: f64, b: Vec3, radius_b: f64) -> bool {
    distance(a, b) < radius_a + radius_b
}

/// Every overlapping pair `(i, j)` with `i < j`, in ascending order.
/// Reads positions and radii only.
pub fn detect_pair_collisions(particles: &Particles) -> Vec<(usize, usize)> {
    let n = particles.len();
    let mut pairs = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if spheres_overlap(
                particles.positions[i],
                particles.radii[i],
                particles.positions[j],
                particles.radii[j],
            ) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Reverse both velocities of every pair, one pair at a time.
///
/// A particle that appears in two pairs is negated twice and ends up unchanged.
/// Positions are not touched, so overlapping spheres stay overlapped and collide
/// again on the next tick.
pub fn resolve_pair_collisions(particles: &mut Particles, pairs: &[(usize, usize)]) {
    for &(i, j) in pairs {
        negate(&mut particles.velocities[i]);
        negate(&mut particles.velocities[j]);
    }
}

fn negate(v: &mut Vec3) {
    for c in v.iter_mut() {
        *c = -*c;
    }
}
