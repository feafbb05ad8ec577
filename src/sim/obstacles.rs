//! Obstacle stream: spawn cadence, score scaling, placement, advance, retire
//!
//! Gap and speed are always derived from the score at the moment they are
//! needed. Obstacles never carry their own speed.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyProfile;
use super::state::Obstacle;
use crate::consts::*;

/// Gap for an obstacle spawned at `score`
pub fn gap_for(profile: &DifficultyProfile, score: u32) -> f32 {
    let steps = (score / GAP_DECAY_EVERY) as f32;
    (profile.gap_size - steps * GAP_DECAY_STEP).max(MIN_GAP)
}

/// Horizontal speed applied to every obstacle this tick
pub fn speed_for(profile: &DifficultyProfile, score: u32) -> f32 {
    let steps = (score / SPEED_GROWTH_EVERY) as f32;
    profile.horizontal_speed_base + steps * SPEED_GROWTH_STEP
}

/// True on ticks that spawn exactly one obstacle
pub fn is_spawn_tick(frame_counter: u64) -> bool {
    frame_counter > 0 && frame_counter.is_multiple_of(SPAWN_INTERVAL_TICKS)
}

/// Create an obstacle at the right edge with a random vertical placement.
///
/// The top edge is `PIPE_MARGIN` plus a whole-pixel offset drawn uniformly
/// from the room left over by the gap, so both segments keep at least the
/// margin. Callers guarantee the room is positive (see `validate_presets`).
pub fn spawn_obstacle<R: Rng>(rng: &mut R, gap: f32) -> Obstacle {
    let room = PLAY_HEIGHT - 2.0 * PIPE_MARGIN - gap;
    debug_assert!(room > 0.0, "gap {gap} leaves no room for placement");
    let offset = (rng.random::<f32>() * room).floor();
    Obstacle::new(WORLD_WIDTH, PIPE_MARGIN + offset, gap)
}

/// Live obstacles ordered by spawn time (equivalently by ascending x)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObstacleStream {
    obstacles: VecDeque<Obstacle>,
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self {
            obstacles: VecDeque::new(),
        }
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push_back(obstacle);
    }

    /// Move every obstacle left by `speed`
    pub fn advance(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
    }

    /// Drop obstacles that are fully off the left edge. Only the head is
    /// ever inspected, since it is always the leftmost.
    pub fn retire(&mut self) -> usize {
        let mut retired = 0;
        while self
            .obstacles
            .front()
            .is_some_and(|o| o.x < -OBSTACLE_WIDTH)
        {
            self.obstacles.pop_front();
            retired += 1;
        }
        if retired > 0 {
            log::debug!("Retired {} obstacle(s), {} live", retired, self.obstacles.len());
        }
        retired
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn front(&self) -> Option<&Obstacle> {
        self.obstacles.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.obstacles.iter_mut()
    }
}
