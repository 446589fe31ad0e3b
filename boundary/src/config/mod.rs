//! Cleanup configuration.
//!
//! Every threshold of the pipeline is a field here rather than a literal, so
//! drawings at unusual scales or with noisy linework can be tuned per session.
//! Lengths are in drawing units; the defaults assume inches.

pub mod defaults;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Order in which arc markers and door candidates are discovered, and
/// therefore the order in which doors claim arcs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorOrder {
    /// Highest vertex index first.
    #[default]
    ReverseScan,
    /// Lowest vertex index first.
    Scan,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CleanupConfig {
    /// Two vertices closer than this may bound a spike.
    #[serde(default = "defaults::spike_proximity")]
    pub spike_proximity: f64,

    /// A detour must be at least this many times the direct distance.
    #[serde(default = "defaults::spike_detour_ratio")]
    pub spike_detour_ratio: f64,

    /// A detour shorter than this is treated as wall jitter.
    #[serde(default = "defaults::spike_min_size")]
    pub spike_min_size: f64,

    /// Inclusive lower bound of a door-width edge.
    #[serde(default = "defaults::door_width_min")]
    pub door_width_min: f64,

    /// Inclusive upper bound of a door-width edge.
    #[serde(default = "defaults::door_width_max")]
    pub door_width_max: f64,

    /// A door pairs with an arc only when strictly closer than this.
    #[serde(default = "defaults::door_arc_max_distance")]
    pub door_arc_max_distance: f64,

    #[serde(default = "defaults::door_order")]
    pub door_order: DoorOrder,

    #[serde(default = "defaults::enabled")]
    pub remove_spikes: bool,

    #[serde(default = "defaults::enabled")]
    pub collapse_doors: bool,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            spike_proximity: defaults::spike_proximity(),
            spike_detour_ratio: defaults::spike_detour_ratio(),
            spike_min_size: defaults::spike_min_size(),
            door_width_min: defaults::door_width_min(),
            door_width_max: defaults::door_width_max(),
            door_arc_max_distance: defaults::door_arc_max_distance(),
            door_order: defaults::door_order(),
            remove_spikes: true,
            collapse_doors: true,
        }
    }
}

impl CleanupConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("spike_proximity", self.spike_proximity),
            ("spike_detour_ratio", self.spike_detour_ratio),
            ("spike_min_size", self.spike_min_size),
            ("door_width_min", self.door_width_min),
            ("door_width_max", self.door_width_max),
            ("door_arc_max_distance", self.door_arc_max_distance),
        ];
        for (param, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { param });
            }
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { param });
            }
        }
        if self.door_width_min > self.door_width_max {
            return Err(ConfigError::EmptyDoorRange {
                min: self.door_width_min,
                max: self.door_width_max,
            });
        }
        Ok(())
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<CleanupConfig, ConfigError> {
        let cfg: CleanupConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_value(v: serde_json::Value) -> Result<CleanupConfig, ConfigError> {
        let cfg: CleanupConfig = serde_json::from_value(v)?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[inline]
    pub(crate) fn is_door_width(&self, len: f64) -> bool {
        len >= self.door_width_min && len <= self.door_width_max
    }
}
