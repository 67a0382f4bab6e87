//! Simulation configuration (parsed from TOML)

use crate::error::{Result, SwarmError};
use crate::types::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Half-open `[min, max)` sampling range for one color channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRange {
    pub min: u8,
    pub max: u8,
}

impl ChannelRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min >= self.max
    }
}

/// Physical constants, bounds, and spawn parameters for one simulation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: f64,
    pub height: f64,
    /// Shared by every particle, for both boundary and collision math
    pub radius: f64,
    /// Per-tick acceleration `[x, y]`
    pub gravity: [f64; 2],
    pub boundary_restitution: f64,
    pub collision_restitution: f64,
    pub spawn_speed: f64,
    /// Relaxation sweeps over all pairs per tick
    pub pass_count: u32,
    /// Spawn anchor `[x, y]`; defaults to `(2 * radius, 2 * radius)` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spawn_anchor: Option<[f64; 2]>,
    /// Exclusive upper bound of the random term added to spawn vy
    pub spawn_vertical_jitter: f64,
    /// Spawn requests queued when the simulation is created
    pub initial_particles: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub color_red: ChannelRange,
    pub color_green: ChannelRange,
    pub color_blue: ChannelRange,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            radius: 5.0,
            gravity: [-0.005, 0.098],
            boundary_restitution: 0.3,
            collision_restitution: 0.9,
            spawn_speed: 10.0,
            pass_count: 3,
            spawn_anchor: None,
            spawn_vertical_jitter: 0.5,
            initial_particles: 2000,
            seed: None,
            color_red: ChannelRange::new(50, 100),
            color_green: ChannelRange::new(50, 100),
            color_blue: ChannelRange::new(200, 255),
        }
    }
}

impl SimConfig {
    /// Parse a config from a TOML document; missing keys keep their defaults
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SimConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn gravity(&self) -> Vec2 {
        Vec2::from_array(self.gravity)
    }

    pub fn spawn_anchor(&self) -> Vec2 {
        match self.spawn_anchor {
            Some(anchor) => Vec2::from_array(anchor),
            None => Vec2::new(self.radius * 2.0, self.radius * 2.0),
        }
    }

    /// Check every constant the physics relies on
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SwarmError::ValidationError(format!(
                "radius must be finite and > 0, got {}",
                self.radius
            )));
        }
        for (name, dim) in [("width", self.width), ("height", self.height)] {
            if !dim.is_finite() || dim < 2.0 * self.radius {
                return Err(SwarmError::ValidationError(format!(
                    "{name} must be finite and at least 2 * radius ({}), got {dim}",
                    2.0 * self.radius
                )));
            }
        }
        if !self.gravity().is_finite() {
            return Err(SwarmError::ValidationError(
                "gravity components must be finite".into(),
            ));
        }
        check_unit_range("boundary_restitution", self.boundary_restitution)?;
        check_unit_range("collision_restitution", self.collision_restitution)?;
        if !self.spawn_speed.is_finite() || self.spawn_speed < 0.0 {
            return Err(SwarmError::ValidationError(format!(
                "spawn_speed must be finite and >= 0, got {}",
                self.spawn_speed
            )));
        }
        if !self.spawn_vertical_jitter.is_finite() || self.spawn_vertical_jitter < 0.0 {
            return Err(SwarmError::ValidationError(format!(
                "spawn_vertical_jitter must be finite and >= 0, got {}",
                self.spawn_vertical_jitter
            )));
        }
        if self.pass_count == 0 {
            return Err(SwarmError::ValidationError(
                "pass_count must be at least 1".into(),
            ));
        }
        if let Some(anchor) = self.spawn_anchor {
            if !Vec2::from_array(anchor).is_finite() {
                return Err(SwarmError::ValidationError(
                    "spawn_anchor must be finite".into(),
                ));
            }
        }
        for (name, range) in [
            ("color_red", self.color_red),
            ("color_green", self.color_green),
            ("color_blue", self.color_blue),
        ] {
            if range.is_empty() {
                return Err(SwarmError::ValidationError(format!(
                    "{name} range is empty: [{}, {})",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }
}

fn check_unit_range(field: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SwarmError::ValueOutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: 1.0,
            value,
        });
    }
    Ok(())
}
