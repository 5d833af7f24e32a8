use spherebox_core::{Axis, Vec3, Wall};

/// Does the sphere protrude past `wall` of a cube with edge `size` centered at the origin?
pub fn crosses(wall: Wall, position: Vec3, radius: f64, size: f64) -> bool {
    let half = size / 2.0;
    let p = position[wall.axis().index()];
    if wall.is_max() {
        p + radius > half
    } else {
        p - radius < -half
    }
}

/// Report the first face the sphere crosses, testing right, left, top, bottom,
/// back, front in that order.
///
/// Only one face is reported even when a sphere pokes through a corner or an edge,
/// so a corner hit reverses a single velocity component.
pub fn detect_wall_collision(position: Vec3, radius: f64, size: f64) -> Option<Wall> {
    Wall::PRIORITY
        .into_iter()
        .find(|&wall| crosses(wall, position, radius, size))
}

/// Pull the sphere back inside on every axis where it protrudes
pub fn clamp_to_container(position: &mut Vec3, radius: f64, size: f64) {
    let half = size / 2.0;
    for axis in Axis::ALL {
        let p = &mut position[axis.index()];
        if *p + radius > half {
            *p = half - radius;
        } else if *p - radius < -half {
            *p = -half + radius;
        }
    }
}

/// Bounce off `wall`: flip the velocity component on its axis, then clamp the
/// position on all three axes, not only the reported one.
pub fn resolve_wall_collision(
    velocity: &mut Vec3,
    position: &mut Vec3,
    radius: f64,
    wall: Wall,
    size: f64,
) {
    let axis = wall.axis().index();
    velocity[axis] = -velocity[axis];
    clamp_to_container(position, radius, size);
}
