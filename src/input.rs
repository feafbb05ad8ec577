//! Device input folded into per-tick input
//!
//! Events arrive between ticks; they are collected here and handed to the
//! next tick as one `TickInput`, never applied mid-tick.

use crate::sim::{DifficultyId, TickInput};

/// Raw device-level events from the platform layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Key press by DOM-style code ("Space", "KeyA", ...)
    KeyDown(String),
    /// Mouse button down on the canvas
    PointerDown,
    /// Touch start on the canvas
    TouchStart,
    /// One of the difficulty buttons
    DifficultyButton(DifficultyId),
}

impl InputEvent {
    /// Whether this event is the overloaded start/flap/restart action
    pub fn is_flap(&self) -> bool {
        match self {
            InputEvent::KeyDown(code) => code == "Space",
            InputEvent::PointerDown | InputEvent::TouchStart => true,
            InputEvent::DifficultyButton(_) => false,
        }
    }
}

/// Pending input for the next tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: TickInput,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        if event.is_flap() {
            self.pending.flap = true;
        }
        if let InputEvent::DifficultyButton(id) = event {
            // Last button pressed before the tick wins
            self.pending.set_difficulty = Some(id);
        }
    }

    /// Request a flap directly (autopilot)
    pub fn request_flap(&mut self) {
        self.pending.flap = true;
    }

    /// Hand the pending input to a tick and clear the one-shot flags
    pub fn take(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }
}
