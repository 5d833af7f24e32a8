//! Errors raised while building a simulation from its configuration.
//!
//! The tick itself cannot fail, so everything here happens before the first frame.

use std::fmt;

/// Reasons a simulation refuses to initialize.
#[derive(Debug)]
pub enum ConfigError {
    /// The mass list is not a JSON array of numbers.
    MalformedMasses(serde_json::Error),
    /// A mass is zero, negative, or not finite.
    InvalidMass { index: usize, value: f64 },
    /// The container edge length is zero, negative, or not finite.
    InvalidContainerSize(f64),
    /// The density used for radii is zero, negative, or not finite.
    InvalidDensity(f64),
    /// The initial speed bound is negative or not finite.
    InvalidSpeed(f64),
    /// The size control range is empty or does not contain the initial size.
    InvalidRange { min: f64, max: f64, step: f64 },
    /// A sphere is too large to be placed strictly inside the container.
    ContainerTooSmall { index: usize, radius: f64, size: f64 },
    /// The configuration file could not be read.
    ConfigFile(std::io::Error),
    /// The configuration file is not valid JSON for a `SimConfig`.
    ConfigFormat(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MalformedMasses(e) => {
                write!(f, "Mass list must be a JSON array of numbers: {}", e)
            }
            ConfigError::InvalidMass { index, value } => {
                write!(f, "Mass #{} must be a positive number, got {}", index, value)
            }
            ConfigError::InvalidContainerSize(size) => {
                write!(f, "Container size must be a positive number, got {}", size)
            }
            ConfigError::InvalidDensity(density) => {
                write!(f, "Density must be a positive number, got {}", density)
            }
            ConfigError::InvalidSpeed(speed) => {
                write!(f, "Initial speed must be a non-negative number, got {}", speed)
            }
            ConfigError::InvalidRange { min, max, step } => write!(
                f,
                "Container size range [{}, {}] with step {} is not usable",
                min, max, step
            ),
            ConfigError::ContainerTooSmall { index, radius, size } => write!(
                f,
                "Sphere #{} (radius {:.3}) does not fit inside a container of size {}",
                index, radius, size
            ),
            ConfigError::ConfigFile(e) => write!(f, "Failed to read config file: {}", e),
            ConfigError::ConfigFormat(e) => write!(f, "Failed to parse config file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::MalformedMasses(e) => Some(e),
            ConfigError::ConfigFile(e) => Some(e),
            ConfigError::ConfigFormat(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::ConfigFile(e)
    }
}
