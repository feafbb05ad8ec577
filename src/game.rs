//! Fixed-step game driver
//!
//! Owns the session, the pending input and the asset gate. The platform layer
//! feeds it device events and wall-clock deltas and gets back a frame to draw.

use crate::assets::AssetGate;
use crate::autopilot;
use crate::consts::*;
use crate::error::ConfigError;
use crate::input::{InputEvent, InputQueue};
use crate::renderer::{Frame, build_frame, draw_fps, loading_frame};
use crate::settings::Settings;
use crate::sim::{GamePhase, SessionState, Snapshot, tick, validate_presets};

/// Frames averaged for the FPS counter
const FPS_WINDOW: usize = 60;

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    state: SessionState,
    input: InputQueue,
    assets: AssetGate,
    accumulator: f32,
    autopilot: bool,
    /// Ticks spent in Ended, for the autopilot restart delay
    ended_ticks: u32,
    last_phase: GamePhase,
    show_fps: bool,
    // FPS tracking
    clock: f64,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Game {
    /// Validate configuration and create an idle game
    pub fn new(settings: &Settings, seed: u64) -> Result<Self, ConfigError> {
        validate_presets()?;
        log::info!(
            "Game initialized with seed {} ({}, autopilot {})",
            seed,
            settings.difficulty,
            settings.autopilot
        );
        Ok(Self {
            state: SessionState::new(settings.difficulty, seed),
            input: InputQueue::new(),
            assets: AssetGate::new(),
            accumulator: 0.0,
            autopilot: settings.autopilot,
            ended_ticks: 0,
            last_phase: GamePhase::Idle,
            show_fps: settings.show_fps,
            clock: 0.0,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn assets_mut(&mut self) -> &mut AssetGate {
        &mut self.assets
    }

    /// Frames per second over the last second of wall-clock time
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Queue a device event for the next tick
    pub fn handle_event(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run exactly one tick with the pending input.
    /// Returns false (and keeps the input pending) while assets are loading.
    pub fn step(&mut self) -> bool {
        if !self.assets.is_open() {
            return false;
        }

        if self.autopilot && autopilot::wants_flap(&self.state, self.ended_ticks) {
            self.input.request_flap();
        }
        let input = self.input.take();
        tick(&mut self.state, &input);

        self.ended_ticks = match self.state.phase {
            GamePhase::Ended => self.ended_ticks.saturating_add(1),
            _ => 0,
        };

        if self.state.phase != self.last_phase {
            log::debug!("Phase {:?} -> {:?}", self.last_phase, self.state.phase);
            self.last_phase = self.state.phase;
        }
        true
    }

    /// Advance by a wall-clock delta (seconds) and build the frame to draw
    pub fn frame(&mut self, dt: f32) -> Frame {
        if !self.assets.is_open() {
            return loading_frame();
        }

        // NaN would poison the accumulator for good
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        self.accumulator += dt;
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        self.track_fps(dt);

        let mut frame = build_frame(&self.state.snapshot(), &self.assets);
        if self.show_fps {
            draw_fps(&mut frame, self.fps);
        }
        frame
    }

    fn track_fps(&mut self, dt: f32) {
        self.clock += f64::from(dt);
        self.frame_times[self.frame_index] = self.clock;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest entry is the one about to be overwritten
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = self.clock - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 / elapsed).round() as u32;
            }
        }
    }
}
