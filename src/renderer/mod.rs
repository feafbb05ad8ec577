//! Renderer-agnostic frame building
//!
//! Turns a session snapshot into an ordered list of draw commands. Each layer
//! draws its sprite when the asset is ready and flat-colour placeholder
//! geometry otherwise. A platform backend only has to blit sprites, upload
//! vertices and draw centered text.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::assets::{AssetGate, AssetId};
use crate::consts::*;
use crate::sim::{Aabb, GamePhase, Snapshot};
pub use vertex::{Vertex, colors};

/// Length of each pipe sprite, long enough to reach any world edge
pub const PIPE_SPRITE_LENGTH: f32 = PLAY_HEIGHT - PIPE_MARGIN;
/// Outline stroke for placeholder pipes
pub const PIPE_OUTLINE_WIDTH: f32 = 4.0;
/// Grass strip along the top of the placeholder ground
pub const GRASS_HEIGHT: f32 = 16.0;

/// A textured quad
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub asset: AssetId,
    pub dest: Aabb,
    /// Radians about the dest center
    pub rotation: f32,
    /// Mirror vertically (top pipes)
    pub flip_y: bool,
}

/// Centered text
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub pos: Vec2,
    /// Font size in pixels (monospace)
    pub size: f32,
    pub color: [f32; 4],
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite(Sprite),
    /// Placeholder triangles
    Shapes(Vec<Vertex>),
    Text(Text),
}

/// Everything needed to paint one frame, in paint order
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear_color: [f32; 4],
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    fn new(clear_color: [f32; 4]) -> Self {
        Self {
            clear_color,
            commands: Vec::new(),
        }
    }

    fn text(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Text(Text {
            text: text.into(),
            pos: Vec2::new(x, y),
            size,
            color,
        }));
    }

    fn shapes(&mut self, vertices: Vec<Vertex>) {
        if !vertices.is_empty() {
            self.commands.push(DrawCommand::Shapes(vertices));
        }
    }

    /// All placeholder vertices, concatenated in paint order
    pub fn vertices(&self) -> Vec<Vertex> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Shapes(v) => Some(v.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    /// Placeholder vertices as raw bytes for a GPU vertex buffer
    pub fn vertex_bytes(&self) -> Vec<u8> {
        let vertices = self.vertices();
        bytemuck::cast_slice::<Vertex, u8>(&vertices).to_vec()
    }

    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Sprite(s) => Some(s),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }
}

/// Frame shown while assets are still pending
pub fn loading_frame() -> Frame {
    let mut frame = Frame::new(colors::CLEAR);
    frame.text("Loading...", WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0, 20.0, colors::TEXT);
    frame
}

/// Build the frame for a snapshot
pub fn build_frame(snapshot: &Snapshot, assets: &AssetGate) -> Frame {
    let mut frame = Frame::new(colors::SKY);
    draw_background(&mut frame, assets);
    draw_obstacles(&mut frame, snapshot, assets);
    draw_ground(&mut frame, assets);
    draw_avatar(&mut frame, snapshot, assets);
    draw_score(&mut frame, snapshot);
    draw_ui(&mut frame, snapshot);
    frame
}

/// Repeat a sprite horizontally across the world width
fn tile_row(frame: &mut Frame, asset: AssetId, y: f32, width: u32, height: u32) {
    let step = width.max(1) as f32;
    let mut x = 0.0;
    while x < WORLD_WIDTH {
        frame.commands.push(DrawCommand::Sprite(Sprite {
            asset,
            dest: Aabb::new(Vec2::new(x, y), Vec2::new(x + step, y + height as f32)),
            rotation: 0.0,
            flip_y: false,
        }));
        x += step;
    }
}

fn draw_background(frame: &mut Frame, assets: &AssetGate) {
    match assets.ready(AssetId::Background) {
        Some((w, h)) => tile_row(frame, AssetId::Background, 0.0, w, h),
        None => {
            let sky = Aabb::new(Vec2::ZERO, Vec2::new(WORLD_WIDTH, WORLD_HEIGHT));
            frame.shapes(shapes::rect(&sky, colors::SKY));
        }
    }
}

fn draw_obstacles(frame: &mut Frame, snapshot: &Snapshot, assets: &AssetGate) {
    if assets.ready(AssetId::Pipe).is_some() {
        for o in &snapshot.obstacles {
            let (left, right) = (o.x, o.x + OBSTACLE_WIDTH);
            frame.commands.push(DrawCommand::Sprite(Sprite {
                asset: AssetId::Pipe,
                dest: Aabb::new(
                    Vec2::new(left, o.top_edge - PIPE_SPRITE_LENGTH),
                    Vec2::new(right, o.top_edge),
                ),
                rotation: 0.0,
                flip_y: true,
            }));
            frame.commands.push(DrawCommand::Sprite(Sprite {
                asset: AssetId::Pipe,
                dest: Aabb::new(
                    Vec2::new(left, o.bottom_edge),
                    Vec2::new(right, o.bottom_edge + PIPE_SPRITE_LENGTH),
                ),
                rotation: 0.0,
                flip_y: false,
            }));
        }
        return;
    }

    let mut vertices = Vec::with_capacity(snapshot.obstacles.len() * 60);
    for o in &snapshot.obstacles {
        for segment in [o.top_segment(), o.bottom_segment()] {
            vertices.extend(shapes::rect(&segment, colors::PIPE));
            vertices.extend(shapes::rect_outline(
                &segment,
                PIPE_OUTLINE_WIDTH,
                colors::PIPE_OUTLINE,
            ));
        }
    }
    frame.shapes(vertices);
}

fn draw_ground(frame: &mut Frame, assets: &AssetGate) {
    match assets.ready(AssetId::Ground) {
        Some((w, h)) => tile_row(frame, AssetId::Ground, PLAY_HEIGHT, w, h),
        None => {
            let ground = Aabb::new(
                Vec2::new(0.0, PLAY_HEIGHT),
                Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
            );
            let grass = Aabb::new(
                Vec2::new(0.0, PLAY_HEIGHT),
                Vec2::new(WORLD_WIDTH, PLAY_HEIGHT + GRASS_HEIGHT),
            );
            let mut vertices = shapes::rect(&ground, colors::GROUND);
            vertices.extend(shapes::rect(&grass, colors::GRASS));
            frame.shapes(vertices);
        }
    }
}

fn draw_avatar(frame: &mut Frame, snapshot: &Snapshot, assets: &AssetGate) {
    let center = Vec2::new(snapshot.avatar_x, snapshot.avatar.y);
    let tilt = snapshot.avatar.tilt();

    if assets.ready(AssetId::Bird).is_some() {
        frame.commands.push(DrawCommand::Sprite(Sprite {
            asset: AssetId::Bird,
            dest: Aabb::from_center(center, Vec2::splat(AVATAR_HALF)),
            rotation: tilt,
            flip_y: false,
        }));
        return;
    }

    let local = |x: f32, y: f32, w: f32, h: f32| Aabb::new(Vec2::new(x, y), Vec2::new(x + w, y + h));
    let mut vertices = shapes::rotated_rect(
        center,
        tilt,
        &local(-AVATAR_HALF, -AVATAR_HALF, AVATAR_SIZE, AVATAR_SIZE),
        colors::BIRD_BODY,
    );
    // Eye
    vertices.extend(shapes::rotated_rect(center, tilt, &local(4.0, -6.0, 4.0, 4.0), colors::BIRD_EYE));
    // Beak
    vertices.extend(shapes::rotated_rect(
        center,
        tilt,
        &local(AVATAR_HALF - 2.0, -2.0, 6.0, 4.0),
        colors::BIRD_BEAK,
    ));
    frame.shapes(vertices);
}

fn draw_score(frame: &mut Frame, snapshot: &Snapshot) {
    let x = WORLD_WIDTH / 2.0;
    frame.text(snapshot.score.to_string(), x, 80.0, 32.0, colors::TEXT);
    frame.text(format!("HI {}", snapshot.high_score), x, 110.0, 16.0, colors::HIGH_SCORE);
}

fn draw_ui(frame: &mut Frame, snapshot: &Snapshot) {
    let x = WORLD_WIDTH / 2.0;
    let mid = WORLD_HEIGHT / 2.0;
    frame.text(
        format!("Difficulty: {}", snapshot.difficulty.label()),
        x,
        30.0,
        20.0,
        colors::TEXT,
    );

    let title = match snapshot.phase {
        GamePhase::Idle => Some("FLAPPY BIRD"),
        GamePhase::Ended => Some("GAME OVER"),
        GamePhase::Running => None,
    };
    if let Some(title) = title {
        frame.text(title, x, mid - 40.0, 20.0, colors::TEXT);
        frame.text("Press SPACE or TAP", x, mid, 20.0, colors::TEXT);
    }
}

/// FPS counter in the top-left corner, drawn over everything else
pub fn draw_fps(frame: &mut Frame, fps: u32) {
    frame.text(format!("FPS {fps}"), 32.0, 12.0, 12.0, colors::TEXT);
}
