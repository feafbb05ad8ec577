//! Demo mode - a simple bot that plays the game
//!
//! Hovers just above the bottom of the next gap: flap whenever the avatar has
//! sunk below the target line and is no longer rising. Starts runs from the
//! title screen and restarts once a game over has been on screen for a while.

use crate::consts::*;
use crate::sim::{GamePhase, Obstacle, SessionState};

/// How far above the gap bottom the avatar's lower edge is held
pub const TARGET_CLEARANCE: f32 = 8.0;
/// Ticks the game over screen stays up before the bot restarts
pub const RESTART_DELAY_TICKS: u32 = 90;

/// The first obstacle the avatar has not yet fully cleared
pub fn next_obstacle(state: &SessionState) -> Option<&Obstacle> {
    let leading_edge = AVATAR_X - AVATAR_HALF;
    state
        .obstacles
        .iter()
        .find(|o| o.trailing_edge() >= leading_edge)
}

/// Avatar center height the bot tries to hold
pub fn target_y(state: &SessionState) -> f32 {
    match next_obstacle(state) {
        Some(o) => o.bottom_edge - AVATAR_HALF - TARGET_CLEARANCE,
        None => PLAY_HEIGHT / 2.0,
    }
}

/// `ended_ticks` counts ticks already spent in Ended
pub fn wants_flap(state: &SessionState, ended_ticks: u32) -> bool {
    match state.phase {
        GamePhase::Idle => true,
        GamePhase::Ended => ended_ticks >= RESTART_DELAY_TICKS,
        GamePhase::Running => state.avatar.y > target_y(state) && state.avatar.v_y >= 0.0,
    }
}
