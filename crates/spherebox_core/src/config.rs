use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::ConfigError;
use crate::masses::{parse_masses, validate_masses};

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// One entry per sphere, in particle index order
    pub masses: Vec<f64>,
    /// Initial container edge length
    pub container_size: f64,
    /// Lower bound of the size control
    pub container_min: f64,
    /// Upper bound of the size control
    pub container_max: f64,
    /// Size control increment
    pub container_step: f64,
    /// Density used to derive radii from masses
    pub density: f64,
    /// Bound on each initial velocity component
    pub max_initial_speed: f64,
    /// Random seed for reproducible runs (None = seed from entropy)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            masses: Vec::new(),
            container_size: DEFAULT_CONTAINER_SIZE,
            container_min: MIN_CONTAINER_SIZE,
            container_max: MAX_CONTAINER_SIZE,
            container_step: CONTAINER_STEP,
            density: DEFAULT_DENSITY,
            max_initial_speed: INITIAL_SPEED,
            seed: None,
        }
    }
}

/// Values given on the command line, applied on top of the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    /// Mass list as JSON text
    pub masses: Option<String>,
    pub container_size: Option<f64>,
    pub seed: Option<u64>,
}

impl SimConfig {
    /// Defaults, then the config file if any, then the overrides; validated.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = match &overrides.config_file {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };
        if let Some(masses) = &overrides.masses {
            config.masses = parse_masses(masses)?;
        }
        if let Some(size) = overrides.container_size {
            config.container_size = size;
        }
        if let Some(seed) = overrides.seed {
            config.seed = Some(seed);
        }
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(ConfigError::ConfigFormat)
    }

    /// Check every value the simulation relies on before anything is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.container_size.is_finite() && self.container_size > 0.0) {
            return Err(ConfigError::InvalidContainerSize(self.container_size));
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        if !(self.max_initial_speed.is_finite() && self.max_initial_speed >= 0.0) {
            return Err(ConfigError::InvalidSpeed(self.max_initial_speed));
        }
        let range_ok = self.container_min.is_finite()
            && self.container_max.is_finite()
            && self.container_step.is_finite()
            && self.container_min > 0.0
            && self.container_step > 0.0
            && self.container_min <= self.container_max
            && (self.container_min..=self.container_max).contains(&self.container_size);
        if !range_ok {
            return Err(ConfigError::InvalidRange {
                min: self.container_min,
                max: self.container_max,
                step: self.container_step,
            });
        }
        validate_masses(&self.masses)
    }
}
