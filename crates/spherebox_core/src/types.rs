/// Position or velocity in container coordinates (origin at the cube center)
pub type Vec3 = [f64; 3];

/// Euclidean distance between two points
pub fn distance(a: Vec3, b: Vec3) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let dz = b[2] - a[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into a `Vec3`
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One of the six container faces.
///
/// ```text
///           *-------*
///          /| top  /|   back  (+z)
///         *-|-----* |
///  left   | *-----|-*   right (+x)
///         |/bottom|/
///         *-------*     front (-z)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    Right,
    Left,
    Top,
    Bottom,
    Back,
    Front,
}

impl Wall {
    /// Faces in the order the detector tests them
    pub const PRIORITY: [Wall; 6] = [
        Wall::Right,
        Wall::Left,
        Wall::Top,
        Wall::Bottom,
        Wall::Back,
        Wall::Front,
    ];

    /// Axis whose velocity component flips when this face is hit
    pub fn axis(self) -> Axis {
        match self {
            Self::Right | Self::Left => Axis::X,
            Self::Top | Self::Bottom => Axis::Y,
            Self::Back | Self::Front => Axis::Z,
        }
    }

    /// True for the face on the positive side of its axis
    pub fn is_max(self) -> bool {
        matches!(self, Self::Right | Self::Top | Self::Back)
    }

    /// Numeric face code: top 1, left 2, bottom 3, front 4, back 5, right 6
    pub fn code(self) -> u8 {
        match self {
            Self::Top => 1,
            Self::Left => 2,
            Self::Bottom => 3,
            Self::Front => 4,
            Self::Back => 5,
            Self::Right => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Back => "back",
            Self::Front => "front",
        }
    }
}

/// Face code of a detector result, 0 when nothing was hit
pub fn wall_code(wall: Option<Wall>) -> u8 {
    wall.map_or(0, Wall::code)
}

/// Per-particle simulation state, stored as parallel arrays indexed by particle.
/// Built once; the length never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Particles {
    pub masses: Vec<f64>,
    pub radii: Vec<f64>,
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
}

impl Particles {
    /// Assemble a store from parallel arrays. Returns None if the lengths disagree.
    pub fn from_parts(
        masses: Vec<f64>,
        radii: Vec<f64>,
        positions: Vec<Vec3>,
        velocities: Vec<Vec3>,
    ) -> Option<Self> {
        let n = masses.len();
        if radii.len() != n || positions.len() != n || velocities.len() != n {
            return None;
        }
        Some(Self {
            masses,
            radii,
            positions,
            velocities,
        })
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_axes() {
        assert_eq!(Wall::Top.axis(), Axis::Y);
        assert_eq!(Wall::Bottom.axis(), Axis::Y);
        assert_eq!(Wall::Left.axis(), Axis::X);
        assert_eq!(Wall::Right.axis(), Axis::X);
        assert_eq!(Wall::Front.axis(), Axis::Z);
        assert_eq!(Wall::Back.axis(), Axis::Z);
    }

    #[test]
    fn test_wall_codes_are_distinct() {
        let mut codes: Vec<u8> = Wall::PRIORITY.iter().map(|w| w.code()).collect();
        codes.sort();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(wall_code(None), 0);
        assert_eq!(wall_code(Some(Wall::Right)), 6);
    }

    #[test]
    fn test_from_parts_checks_lengths() {
        assert!(Particles::from_parts(vec![1.0], vec![1.0], vec![[0.0; 3]], vec![]).is_none());
        let p = Particles::from_parts(vec![1.0], vec![1.0], vec![[0.0; 3]], vec![[0.0; 3]]).unwrap();
        assert_eq!(p.len(), 1);
        assert!(!p.is_empty());
    }

    #[test]
    fn test_distance() {
        assert!((distance([0.0, 0.0, 0.0], [3.0, 4.0, 0.0]) - 5.0).abs() < 1e-12);
        assert_eq!(distance([1.0, 2.0, 3.0], [1.0, 2.0, 3.0]), 0.0);
    }
}
