//! Runtime tuning for swimmers.
//!
//! Defaults mirror [`crate::constants`]. A JSON file may override any subset
//! of fields; omitted fields keep their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    AIR_DENSITY, DRAG_COEFF, FLUID_DENSITY, GRAVITY, IDLE_SPIN_RATE, JOIN_SPEED, JOIN_THRESHOLD,
    LAG_SECONDS, MASS, MAX_FPS, MIN_MASS, MIN_TRAIL_CAPACITY, WATERLINE,
};
use crate::error::ConfigError;
use crate::numeric::ceil_to_usize;

/// Physical constants used by the buoyancy integrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuoyancyParams {
    /// Body mass.
    pub mass: f32,
    /// Gravitational acceleration (positive, pointing down).
    pub gravity: f32,
    /// Density used for buoyancy and underwater drag.
    pub fluid_density: f32,
    /// Density used for drag above the waterline.
    pub air_density: f32,
    /// Quadratic drag coefficient.
    pub drag_coefficient: f32,
    /// Height of the fluid surface.
    pub waterline: f32,
}

impl Default for BuoyancyParams {
    fn default() -> Self {
        Self {
            mass: MASS,
            gravity: GRAVITY,
            fluid_density: FLUID_DENSITY,
            air_density: AIR_DENSITY,
            drag_coefficient: DRAG_COEFF,
            waterline: WATERLINE,
        }
    }
}

/// Tuning for a single swimmer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwimmerConfig {
    /// How far behind the leader's path the swimmer trails, in seconds.
    pub lag_seconds: f32,
    /// Expected tick rate; sizes the trail buffer.
    pub tick_rate: f32,
    /// Speed used to close on the trail while joining.
    pub join_speed: f32,
    /// Distance at which joining becomes following.
    pub join_threshold: f32,
    /// Idle spin rate while floating, in radians per second.
    pub idle_spin_rate: f32,
    /// Buoyancy and drag constants.
    pub buoyancy: BuoyancyParams,
}

impl Default for SwimmerConfig {
    fn default() -> Self {
        Self {
            lag_seconds: LAG_SECONDS,
            tick_rate: MAX_FPS,
            join_speed: JOIN_SPEED,
            join_threshold: JOIN_THRESHOLD,
            idle_spin_rate: IDLE_SPIN_RATE,
            buoyancy: BuoyancyParams::default(),
        }
    }
}

fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            value,
            reason: "must be finite and positive",
        })
    }
}

fn require_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            value,
            reason: "must be finite and non-negative",
        })
    }
}

impl SwimmerConfig {
    /// Parses a configuration from JSON and validates it.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON or an unknown key,
    /// and [`ConfigError::InvalidValue`] when a field is out of range.
    ///
    /// # Examples
    /// ```
    /// use swimmer::SwimmerConfig;
    /// let cfg = SwimmerConfig::from_json_str(r#"{ "lag_seconds": 0.5 }"#).unwrap();
    /// assert_eq!(cfg.lag_seconds, 0.5);
    /// assert_eq!(cfg.tick_rate, 60.0);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise
    /// the errors of [`Self::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks every field against its accepted range.
    ///
    /// # Errors
    /// Returns the first [`ConfigError::InvalidValue`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("lag_seconds", self.lag_seconds)?;
        require_positive("tick_rate", self.tick_rate)?;
        require_positive("join_speed", self.join_speed)?;
        require_positive("join_threshold", self.join_threshold)?;
        if !self.idle_spin_rate.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "idle_spin_rate",
                value: self.idle_spin_rate,
                reason: "must be finite",
            });
        }
        let physics = &self.buoyancy;
        if !(physics.mass.is_finite() && physics.mass > MIN_MASS) {
            return Err(ConfigError::InvalidValue {
                field: "buoyancy.mass",
                value: physics.mass,
                reason: "must exceed the minimum mass",
            });
        }
        require_non_negative("buoyancy.gravity", physics.gravity)?;
        require_non_negative("buoyancy.fluid_density", physics.fluid_density)?;
        require_non_negative("buoyancy.air_density", physics.air_density)?;
        require_non_negative("buoyancy.drag_coefficient", physics.drag_coefficient)?;
        if !physics.waterline.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "buoyancy.waterline",
                value: physics.waterline,
                reason: "must be finite",
            });
        }
        Ok(())
    }

    /// Number of samples the trail buffer needs for this lag and tick rate.
    ///
    /// Never less than [`MIN_TRAIL_CAPACITY`].
    ///
    /// # Examples
    /// ```
    /// use swimmer::SwimmerConfig;
    /// assert_eq!(SwimmerConfig::default().trail_capacity(), 60);
    /// ```
    #[must_use]
    pub fn trail_capacity(&self) -> usize {
        ceil_to_usize(self.lag_seconds * self.tick_rate)
            .unwrap_or(MIN_TRAIL_CAPACITY)
            .max(MIN_TRAIL_CAPACITY)
    }
}
