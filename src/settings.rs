//! Game settings
//!
//! Read once at startup from JSON. Nothing is ever written back; the only
//! state that outlives a run is the in-memory high score.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::DifficultyId;

/// Startup settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty selected at launch
    pub difficulty: DifficultyId,
    /// Fixed RNG seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
    /// Demo mode - the autopilot plays
    pub autopilot: bool,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: DifficultyId::Normal,
            seed: None,
            autopilot: false,
            show_fps: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
