//! Runtime settings
//!
//! Read from a JSON file next to the binary. Missing or broken files fall
//! back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_DT;

/// Default settings file name
pub const DEFAULT_SETTINGS_PATH: &str = "jump-runner.json";

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed for reproducible runs (random when unset)
    pub seed: Option<u64>,
    /// Let the demo autopilot play
    pub autopilot: bool,
    /// Ticks the headless loop runs before stopping
    pub max_ticks: u64,
    /// Host tick rate
    pub tick_rate_hz: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            autopilot: true,
            max_ticks: 10_000,
            tick_rate_hz: 60,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Seconds per tick
    pub fn tick_dt(&self) -> f32 {
        if self.tick_rate_hz == 0 {
            TICK_DT
        } else {
            1.0 / self.tick_rate_hz as f32
        }
    }
}
