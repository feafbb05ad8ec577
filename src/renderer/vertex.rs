//! Vertex types for 2D placeholder rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Opaque color from 8-bit channels
pub const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements (placeholder palette)
pub mod colors {
    use super::rgb;

    pub const SKY: [f32; 4] = rgb(0x70, 0xc5, 0xce);
    pub const GROUND: [f32; 4] = rgb(0xde, 0xd8, 0x95);
    pub const GRASS: [f32; 4] = rgb(0xba, 0xda, 0x55);
    pub const PIPE: [f32; 4] = rgb(0x5f, 0xdc, 0x4d);
    pub const PIPE_OUTLINE: [f32; 4] = rgb(0x38, 0x7c, 0x2b);
    pub const BIRD_BODY: [f32; 4] = rgb(0xff, 0xff, 0x00);
    pub const BIRD_EYE: [f32; 4] = rgb(0x22, 0x22, 0x22);
    pub const BIRD_BEAK: [f32; 4] = rgb(0xff, 0x88, 0x00);
    pub const TEXT: [f32; 4] = rgb(0xff, 0xff, 0xff);
    pub const HIGH_SCORE: [f32; 4] = rgb(0xff, 0xff, 0x00);
    /// Cleared canvas while loading
    pub const CLEAR: [f32; 4] = [0.0, 0.0, 0.0, 0.0];
}
