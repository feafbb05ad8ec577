//! Difficulty presets
//!
//! The preset set is closed: every id maps to exactly one profile, so the
//! lookup itself cannot fail. Geometry is validated once at startup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Player-selectable difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyId {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl DifficultyId {
    pub const ALL: [DifficultyId; 3] = [DifficultyId::Easy, DifficultyId::Normal, DifficultyId::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyId::Easy => "easy",
            DifficultyId::Normal => "normal",
            DifficultyId::Hard => "hard",
        }
    }

    /// Title-case name for the HUD
    pub fn label(&self) -> &'static str {
        match self {
            DifficultyId::Easy => "Easy",
            DifficultyId::Normal => "Normal",
            DifficultyId::Hard => "Hard",
        }
    }

    pub fn profile(&self) -> DifficultyProfile {
        match self {
            DifficultyId::Easy => DifficultyProfile {
                gap_size: 120.0,
                horizontal_speed_base: 1.5,
                gravity: 0.4,
            },
            DifficultyId::Normal => DifficultyProfile {
                gap_size: 100.0,
                horizontal_speed_base: 2.0,
                gravity: 0.5,
            },
            DifficultyId::Hard => DifficultyProfile {
                gap_size: 80.0,
                horizontal_speed_base: 2.7,
                gravity: 0.65,
            },
        }
    }
}

impl fmt::Display for DifficultyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(DifficultyId::Easy),
            "normal" | "norm" => Ok(DifficultyId::Normal),
            "hard" => Ok(DifficultyId::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Physics and spacing parameters for one difficulty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Gap between top and bottom segments at score 0
    pub gap_size: f32,
    /// Obstacle speed (pixels per tick) at score 0
    pub horizontal_speed_base: f32,
    /// Downward acceleration (pixels per tick²)
    pub gravity: f32,
}

impl DifficultyProfile {
    /// Check that this profile can always place a gap inside the play field
    pub fn validate(&self, id: DifficultyId) -> Result<(), ConfigError> {
        let fields = [
            ("gap", self.gap_size),
            ("speed", self.horizontal_speed_base),
            ("gravity", self.gravity),
        ];
        for (field, value) in fields {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::NonPositive { id, field, value });
            }
        }

        // Widest gap is the base gap; scoring only narrows it
        let widest = self.gap_size.max(MIN_GAP);
        if PLAY_HEIGHT - 2.0 * PIPE_MARGIN - widest <= 0.0 {
            return Err(ConfigError::NoRoomForGap {
                id,
                gap: widest,
                margin: PIPE_MARGIN,
                play_height: PLAY_HEIGHT,
            });
        }
        Ok(())
    }
}

/// Validate every preset against the world geometry
pub fn validate_presets() -> Result<(), ConfigError> {
    for id in DifficultyId::ALL {
        id.profile().validate(id)?;
    }
    log::debug!("Difficulty presets validated ({} presets)", DifficultyId::ALL.len());
    Ok(())
}
