//! Flappy Pixel - a single-screen flap-through-the-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, obstacles, collisions, session state)
//! - `renderer`: Renderer-agnostic frame building with flat-colour fallbacks
//! - `input`: Device events folded into per-tick input
//! - `assets`: Asset readiness gate
//! - `game`: Fixed-step driver tying the above together

pub mod assets;
pub mod autopilot;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame delta the driver will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// World dimensions (pixels, y grows downward)
    pub const WORLD_WIDTH: f32 = 288.0;
    pub const WORLD_HEIGHT: f32 = 512.0;
    pub const GROUND_HEIGHT: f32 = 112.0;
    /// Height of the flyable area above the ground
    pub const PLAY_HEIGHT: f32 = WORLD_HEIGHT - GROUND_HEIGHT;

    /// Avatar defaults - fixed column, square hitbox
    pub const AVATAR_X: f32 = 60.0;
    pub const AVATAR_SIZE: f32 = 24.0;
    pub const AVATAR_HALF: f32 = AVATAR_SIZE / 2.0;
    /// Vertical velocity set by a flap (negative is up)
    pub const FLAP_VELOCITY: f32 = -6.0;

    /// Obstacle geometry
    pub const OBSTACLE_WIDTH: f32 = 52.0;
    /// Minimum extent of the top and bottom segments
    pub const PIPE_MARGIN: f32 = 40.0;
    /// Ticks between obstacle spawns
    pub const SPAWN_INTERVAL_TICKS: u64 = 90;

    /// Score scaling: gap narrows by GAP_DECAY_STEP every GAP_DECAY_EVERY points
    pub const MIN_GAP: f32 = 60.0;
    pub const GAP_DECAY_STEP: f32 = 10.0;
    pub const GAP_DECAY_EVERY: u32 = 5;
    /// Score scaling: speed grows by SPEED_GROWTH_STEP every SPEED_GROWTH_EVERY points
    pub const SPEED_GROWTH_STEP: f32 = 0.5;
    pub const SPEED_GROWTH_EVERY: u32 = 10;
}
