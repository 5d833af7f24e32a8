use bevy::prelude::*;
use spherebox_core::{ConfigError, SimConfig};

/// Edge length of the cubic container, shared between the size control,
/// the simulation tick and the boundary renderer.
///
/// Lives in its own resource so a resize between frames is picked up by the
/// next tick without touching the simulation state.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Container {
    /// Current edge length
    pub size: f64,
    /// Smallest size the control allows
    pub min: f64,
    /// Largest size the control allows
    pub max: f64,
    /// Increment per control step
    pub step: f64,
}

impl Container {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            size: config.container_size,
            min: config.container_min,
            max: config.container_max,
            step: config.container_step,
        }
    }

    /// Set a new edge length, clamped to the control range.
    /// Returns the size actually applied.
    pub fn set_size(&mut self, size: f64) -> Result<f64, ConfigError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(ConfigError::InvalidContainerSize(size));
        }
        let applied = size.clamp(self.min, self.max);
        if applied != size {
            warn!(
                "Container size {} outside [{}, {}], using {}",
                size, self.min, self.max, applied
            );
        }
        self.size = applied;
        Ok(applied)
    }

    /// One step larger, stopping at the maximum
    pub fn grow(&mut self) -> f64 {
        self.size = (self.size + self.step).min(self.max);
        self.size
    }

    /// One step smaller, stopping at the minimum
    pub fn shrink(&mut self) -> f64 {
        self.size = (self.size - self.step).max(self.min);
        self.size
    }

    pub fn half(&self) -> f64 {
        self.size / 2.0
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}
