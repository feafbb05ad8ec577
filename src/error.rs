//! Startup configuration errors
//!
//! Nothing in a running session can fail; everything here is detected before
//! the first tick.

use std::path::PathBuf;

use thiserror::Error;

use crate::sim::DifficultyId;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown difficulty `{0}` (expected easy, normal or hard)")]
    UnknownDifficulty(String),

    #[error("difficulty {id} has non-positive {field}: {value}")]
    NonPositive {
        id: DifficultyId,
        field: &'static str,
        value: f32,
    },

    #[error(
        "difficulty {id}: gap {gap} leaves no room between {margin}px margins in a {play_height}px play field"
    )]
    NoRoomForGap {
        id: DifficultyId,
        gap: f32,
        margin: f32,
        play_height: f32,
    },

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
