//! Session state and core simulation types
//!
//! Everything a tick reads or writes lives in `SessionState`, including the
//! seeded RNG, so a session replays exactly from its seed and inputs.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::difficulty::{DifficultyId, DifficultyProfile};
use super::obstacles::{ObstacleStream, spawn_obstacle};
use crate::consts::*;

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first flap; avatar static, no obstacles
    Idle,
    /// Active gameplay
    Running,
    /// Run ended; everything frozen until reset
    Ended,
}

/// Which world bound the avatar touched this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsContact {
    None,
    Ceiling,
    Floor,
}

/// The player's avatar. Only vertical motion; x is fixed at `AVATAR_X`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Center y (pixels, down is positive)
    pub y: f32,
    /// Vertical velocity (pixels per tick)
    pub v_y: f32,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            y: WORLD_HEIGHT / 2.0,
            v_y: 0.0,
        }
    }
}

impl Avatar {
    pub fn flap(&mut self) {
        self.v_y = FLAP_VELOCITY;
    }

    /// One step of constant-acceleration motion
    pub fn integrate(&mut self, gravity: f32) {
        self.v_y += gravity;
        self.y += self.v_y;
    }

    /// Clamp into the play field. Floor wins if both are somehow touched.
    pub fn clamp_to_world(&mut self) -> BoundsContact {
        if self.y + AVATAR_HALF >= PLAY_HEIGHT {
            self.y = PLAY_HEIGHT - AVATAR_HALF;
            return BoundsContact::Floor;
        }
        if self.y - AVATAR_HALF < 0.0 {
            self.y = AVATAR_HALF;
            self.v_y = 0.0;
            return BoundsContact::Ceiling;
        }
        BoundsContact::None
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(AVATAR_X, self.y)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.center(), Vec2::splat(AVATAR_HALF))
    }

    /// Nose-down tilt in radians, capped at 0.5
    pub fn tilt(&self) -> f32 {
        (self.v_y / 10.0).min(0.5)
    }
}

/// A gapped barrier moving right to left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Bottom of the upper segment
    pub top_edge: f32,
    /// Top of the lower segment
    pub bottom_edge: f32,
    /// Set once when the trailing edge clears the avatar
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, top_edge: f32, gap: f32) -> Self {
        Self {
            x,
            top_edge,
            bottom_edge: top_edge + gap,
            passed: false,
        }
    }

    pub fn gap(&self) -> f32 {
        self.bottom_edge - self.top_edge
    }

    pub fn trailing_edge(&self) -> f32 {
        self.x + OBSTACLE_WIDTH
    }

    /// Horizontal extent of the whole obstacle column
    pub fn column(&self) -> Aabb {
        Aabb::new(Vec2::new(self.x, 0.0), Vec2::new(self.trailing_edge(), PLAY_HEIGHT))
    }

    /// The open gap between the two segments
    pub fn opening(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.top_edge),
            Vec2::new(self.trailing_edge(), self.bottom_edge),
        )
    }

    pub fn top_segment(&self) -> Aabb {
        Aabb::new(Vec2::new(self.x, 0.0), Vec2::new(self.trailing_edge(), self.top_edge))
    }

    pub fn bottom_segment(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.bottom_edge),
            Vec2::new(self.trailing_edge(), PLAY_HEIGHT),
        )
    }

    /// Flip `passed` if the trailing edge is strictly behind `line`.
    /// Returns true only on the tick the flag flips.
    pub fn mark_passed_if_behind(&mut self, line: f32) -> bool {
        if !self.passed && self.trailing_edge() < line {
            self.passed = true;
            return true;
        }
        false
    }
}

/// Read-only projection consumed by the renderer and the driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub phase: GamePhase,
    pub difficulty: DifficultyId,
    pub score: u32,
    pub high_score: u32,
    pub frame_counter: u64,
    pub avatar_x: f32,
    pub avatar: Avatar,
    /// Oldest first
    pub obstacles: Vec<Obstacle>,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Active difficulty
    pub difficulty: DifficultyId,
    /// Obstacles cleared this session
    pub score: u32,
    /// Best score reached this process
    pub high_score: u32,
    /// Running ticks since the session started
    pub frame_counter: u64,
    /// Player avatar
    pub avatar: Avatar,
    /// Live obstacles, oldest first
    pub obstacles: ObstacleStream,
    /// Placement RNG, advanced only by spawns
    rng: Pcg32,
}

impl SessionState {
    /// Create an idle session with the given difficulty and seed
    pub fn new(difficulty: DifficultyId, seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            difficulty,
            score: 0,
            high_score: 0,
            frame_counter: 0,
            avatar: Avatar::default(),
            obstacles: ObstacleStream::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.difficulty.profile()
    }

    pub fn started(&self) -> bool {
        self.phase != GamePhase::Idle
    }

    pub fn over(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// Idle -> Running; the starting flap is applied immediately
    pub fn start(&mut self) {
        if self.phase != GamePhase::Idle {
            return;
        }
        self.phase = GamePhase::Running;
        self.avatar.flap();
        log::info!("Run started ({})", self.difficulty);
    }

    /// Running -> Ended, committing the high score on the edge.
    /// Returns false if the session was not running.
    pub fn end_session(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.phase = GamePhase::Ended;
        if self.score > self.high_score {
            log::info!("New high score: {} (was {})", self.score, self.high_score);
            self.high_score = self.score;
        }
        log::info!("Game over: score {} after {} ticks", self.score, self.frame_counter);
        true
    }

    /// Back to the canonical idle state; high score and difficulty survive
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
        self.score = 0;
        self.frame_counter = 0;
        self.avatar = Avatar::default();
        self.obstacles.clear();
        log::info!("Session reset (high score {})", self.high_score);
    }

    /// Switch difficulty; always resets the session
    pub fn set_difficulty(&mut self, difficulty: DifficultyId) {
        if difficulty != self.difficulty {
            log::info!("Difficulty changed: {} -> {}", self.difficulty, difficulty);
        }
        self.difficulty = difficulty;
        self.reset();
    }

    /// Spawn one obstacle at the right edge with the given gap
    pub fn spawn_obstacle(&mut self, gap: f32) {
        let obstacle = spawn_obstacle(&mut self.rng, gap);
        log::debug!(
            "Spawned obstacle at tick {}: gap {}..{}",
            self.frame_counter,
            obstacle.top_edge,
            obstacle.bottom_edge
        );
        self.obstacles.push(obstacle);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            phase: self.phase,
            difficulty: self.difficulty,
            score: self.score,
            high_score: self.high_score,
            frame_counter: self.frame_counter,
            avatar_x: AVATAR_X,
            avatar: self.avatar,
            obstacles: self.obstacles.iter().copied().collect(),
        }
    }
}
