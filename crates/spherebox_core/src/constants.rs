// Scene units are arbitrary: one unit of length is one unit of the container edge,
// one unit of time is one rendered frame.

use std::f64::consts::PI;

/// Density used to derive radii from masses.
/// With this value `radius = cbrt(mass)`, so a unit mass is a unit sphere.
pub const DEFAULT_DENSITY: f64 = 3.0 / (4.0 * PI);

/// Container edge length when nothing else is configured
pub const DEFAULT_CONTAINER_SIZE: f64 = 12.0;

/// Smallest edge length the size control will accept
pub const MIN_CONTAINER_SIZE: f64 = 2.0;

/// Largest edge length the size control will accept
pub const MAX_CONTAINER_SIZE: f64 = 30.0;

/// Increment applied by one press of the size control
pub const CONTAINER_STEP: f64 = 0.5;

/// Bound on each initial velocity component (per frame)
pub const INITIAL_SPEED: f64 = 1.0 / 1000.0;

/// Sphere colors, cycled by particle index [r, g, b]
pub const PALETTE: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0], // red
    [0.0, 1.0, 0.0], // green
    [0.0, 0.0, 1.0], // blue
    [1.0, 1.0, 0.0], // yellow
    [1.0, 0.0, 1.0], // magenta
    [0.0, 1.0, 1.0], // cyan
];

/// Where the camera starts, looking at the origin
pub const CAMERA_START: [f32; 3] = [18.0, 12.0, 15.0];

/// Direction the key light shines from
pub const LIGHT_DIRECTION: [f32; 3] = [5.0, 5.0, 5.0];

/// Sector/stack count for sphere meshes
pub const SPHERE_RESOLUTION: u32 = 32;
