//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (obstacles oldest first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use collision::{Aabb, ContactOutcome, hits_obstacle, resolve_contacts};
pub use difficulty::{DifficultyId, DifficultyProfile, validate_presets};
pub use obstacles::{ObstacleStream, gap_for, is_spawn_tick, spawn_obstacle, speed_for};
pub use state::{Avatar, BoundsContact, GamePhase, Obstacle, SessionState, Snapshot};
pub use tick::{TickEvent, TickInput, Transition, tick, transition, update};
