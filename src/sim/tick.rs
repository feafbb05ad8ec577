//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session deterministically. The single
//! player action is overloaded by phase (start, flap, restart); that mapping
//! lives in one table, `transition`.

use serde::{Deserialize, Serialize};

use super::collision::resolve_contacts;
use super::difficulty::DifficultyId;
use super::obstacles::{gap_for, is_spawn_tick, speed_for};
use super::state::{BoundsContact, GamePhase, SessionState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Flap / start / restart (space, click, tap)
    pub flap: bool,
    /// Difficulty button pressed since the last tick
    pub set_difficulty: Option<DifficultyId>,
}

impl TickInput {
    pub fn flap() -> Self {
        Self {
            flap: true,
            ..Default::default()
        }
    }

    pub fn difficulty(id: DifficultyId) -> Self {
        Self {
            set_difficulty: Some(id),
            ..Default::default()
        }
    }

    /// Collapse the input to one event; a difficulty change wins over a flap
    pub fn event(&self) -> TickEvent {
        match (self.set_difficulty, self.flap) {
            (Some(id), _) => TickEvent::SetDifficulty(id),
            (None, true) => TickEvent::Flap,
            (None, false) => TickEvent::None,
        }
    }
}

/// The event a tick reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    None,
    Flap,
    SetDifficulty(DifficultyId),
}

/// What a tick does to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing moves
    Hold,
    /// Idle -> Running with the starting flap
    Start,
    /// Advance physics and obstacles, flapping first if requested
    Step { flap: bool },
    /// Ended -> Idle
    Reset,
    /// Any -> Idle under a new difficulty
    ChangeDifficulty(DifficultyId),
}

/// Transition table keyed by (phase, event)
pub fn transition(phase: GamePhase, event: TickEvent) -> Transition {
    match (phase, event) {
        (_, TickEvent::SetDifficulty(id)) => Transition::ChangeDifficulty(id),
        (GamePhase::Idle, TickEvent::Flap) => Transition::Start,
        (GamePhase::Idle, TickEvent::None) => Transition::Hold,
        (GamePhase::Running, TickEvent::Flap) => Transition::Step { flap: true },
        (GamePhase::Running, TickEvent::None) => Transition::Step { flap: false },
        (GamePhase::Ended, TickEvent::Flap) => Transition::Reset,
        (GamePhase::Ended, TickEvent::None) => Transition::Hold,
    }
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut SessionState, input: &TickInput) {
    match transition(state.phase, input.event()) {
        Transition::Hold => {}
        Transition::Start => state.start(),
        Transition::Step { flap } => step(state, flap),
        Transition::Reset => state.reset(),
        Transition::ChangeDifficulty(id) => state.set_difficulty(id),
    }
}

/// Pure form of `tick`: the next state from the current one
pub fn update(state: &SessionState, input: &TickInput) -> SessionState {
    let mut next = state.clone();
    tick(&mut next, input);
    next
}

/// One running tick: kinematics, obstacle stream, contacts
fn step(state: &mut SessionState, flap: bool) {
    let profile = state.profile();

    // Avatar
    if flap {
        state.avatar.flap();
    }
    state.avatar.integrate(profile.gravity);
    if state.avatar.clamp_to_world() == BoundsContact::Floor {
        // Hard stop: the world freezes on the tick the ground is hit
        state.end_session();
        return;
    }

    // Obstacles
    state.frame_counter += 1;
    if is_spawn_tick(state.frame_counter) {
        state.spawn_obstacle(gap_for(&profile, state.score));
    }
    state.obstacles.advance(speed_for(&profile, state.score));
    state.obstacles.retire();

    // Contacts
    let outcome = resolve_contacts(&state.avatar, &mut state.obstacles);
    state.score += outcome.points;
    if outcome.collided {
        state.end_session();
    }
}
