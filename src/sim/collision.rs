//! Collision detection and scoring
//!
//! Everything is axis-aligned: the avatar is a square at a fixed column and
//! each obstacle is a column with an open gap. An obstacle the avatar overlaps
//! horizontally can never also be fully behind it, so a single pass can score
//! and test collisions without double counting.

use glam::Vec2;

use super::obstacles::ObstacleStream;
use super::state::Avatar;

/// Axis-aligned bounding box (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Strict overlap of the horizontal spans (touching edges do not count)
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x && self.min.x < other.max.x
    }

    /// Whether `other`'s vertical span lies within ours, edges inclusive
    pub fn contains_y(&self, other: &Aabb) -> bool {
        other.min.y >= self.min.y && other.max.y <= self.max.y
    }
}

/// Result of resolving one tick of avatar/obstacle interaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactOutcome {
    /// Obstacles newly passed this tick
    pub points: u32,
    /// Whether the avatar struck an obstacle
    pub collided: bool,
}

/// Whether the avatar strikes this obstacle's solid segments
pub fn hits_obstacle(avatar: &Aabb, column: &Aabb, opening: &Aabb) -> bool {
    avatar.overlaps_x(column) && !opening.contains_y(avatar)
}

/// Score passed obstacles and detect a collision, oldest obstacle first.
///
/// Evaluation stops at the first collision. Obstacles are ordered by x, so
/// every obstacle passed this tick is visited before any colliding one.
pub fn resolve_contacts(avatar: &Avatar, obstacles: &mut ObstacleStream) -> ContactOutcome {
    let avatar_box = avatar.bounds();
    let leading_edge = avatar_box.min.x;
    let mut outcome = ContactOutcome::default();

    for obstacle in obstacles.iter_mut() {
        if obstacle.mark_passed_if_behind(leading_edge) {
            outcome.points += 1;
        }

        if hits_obstacle(&avatar_box, &obstacle.column(), &obstacle.opening()) {
            outcome.collided = true;
            break;
        }
    }

    outcome
}
