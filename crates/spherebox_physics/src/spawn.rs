use spherebox_core::masses::validate_masses;
use spherebox_core::{ConfigError, Particles, Vec3};
use rand::Rng;
use std::f64::consts::PI;

/// Radius of a uniform sphere with the given mass and density
pub fn radius_from_mass(mass: f64, density: f64) -> f64 {
    ((3.0 * mass) / (4.0 * PI * density)).cbrt()
}

/// Uniform random center that keeps a sphere of `radius` inside a cube of edge `size`.
/// Caller guarantees `size > 2 * radius`.
pub fn random_position(radius: f64, size: f64, rng: &mut impl Rng) -> Vec3 {
    let half = (size - 2.0 * radius) / 2.0;
    [
        rng.gen_range(-half..=half),
        rng.gen_range(-half..=half),
        rng.gen_range(-half..=half),
    ]
}

/// Small random velocity, each component in `[-max_speed, max_speed]`
pub fn random_velocity(max_speed: f64, rng: &mut impl Rng) -> Vec3 {
    [
        rng.gen_range(-max_speed..=max_speed),
        rng.gen_range(-max_speed..=max_speed),
        rng.gen_range(-max_speed..=max_speed),
    ]
}

/// Build the initial particle set for a container of edge `size`.
///
/// Radii are derived from the masses; positions and then velocities are drawn from
/// `rng` in particle order, so a seeded RNG reproduces the same layout.
/// Nothing is built if any input is unusable.
pub fn spawn_particles(
    masses: &[f64],
    size: f64,
    density: f64,
    max_speed: f64,
    rng: &mut impl Rng,
) -> Result<Particles, ConfigError> {
    if !(size.is_finite() && size > 0.0) {
        return Err(ConfigError::InvalidContainerSize(size));
    }
    if !(density.is_finite() && density > 0.0) {
        return Err(ConfigError::InvalidDensity(density));
    }
    if !(max_speed.is_finite() && max_speed >= 0.0) {
        return Err(ConfigError::InvalidSpeed(max_speed));
    }
    validate_masses(masses)?;

    let radii: Vec<f64> = masses.iter().map(|&m| radius_from_mass(m, density)).collect();

    // A sphere must start strictly inside, so its diameter has to be smaller than the edge
    if let Some((index, &radius)) = radii.iter().enumerate().find(|(_, r)| 2.0 * **r >= size) {
        return Err(ConfigError::ContainerTooSmall {
            index,
            radius,
            size,
        });
    }

    let positions = radii.iter().map(|&r| random_position(r, size, rng)).collect();
    let velocities = (0..masses.len())
        .map(|_| random_velocity(max_speed, rng))
        .collect();

    Ok(Particles {
        masses: masses.to_vec(),
        radii,
        positions,
        velocities,
    })
}
