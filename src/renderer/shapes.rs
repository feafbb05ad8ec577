//! Shape generation for 2D primitives (triangle lists)

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Aabb;

/// Two triangles from four corners in winding order
fn quad(corners: [Vec2; 4], color: [f32; 4]) -> [Vertex; 6] {
    let [a, b, c, d] = corners;
    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
        Vertex::new(a.x, a.y, color),
    ]
}

fn corners(rect: &Aabb) -> [Vec2; 4] {
    [
        rect.min,
        Vec2::new(rect.max.x, rect.min.y),
        rect.max,
        Vec2::new(rect.min.x, rect.max.y),
    ]
}

/// Filled axis-aligned rectangle
pub fn rect(rect: &Aabb, color: [f32; 4]) -> Vec<Vertex> {
    quad(corners(rect), color).to_vec()
}

/// Rectangle outline with the stroke centered on the edges
pub fn rect_outline(rect: &Aabb, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let h = width / 2.0;
    let (min, max) = (rect.min, rect.max);
    let bars = [
        // Top and bottom span the full outer width
        Aabb::new(Vec2::new(min.x - h, min.y - h), Vec2::new(max.x + h, min.y + h)),
        Aabb::new(Vec2::new(min.x - h, max.y - h), Vec2::new(max.x + h, max.y + h)),
        // Sides fill between them
        Aabb::new(Vec2::new(min.x - h, min.y + h), Vec2::new(min.x + h, max.y - h)),
        Aabb::new(Vec2::new(max.x - h, min.y + h), Vec2::new(max.x + h, max.y - h)),
    ];

    let mut vertices = Vec::with_capacity(bars.len() * 6);
    for bar in &bars {
        vertices.extend_from_slice(&quad(corners(bar), color));
    }
    vertices
}

/// Rectangle given in local space, rotated by `angle` and placed at `origin`
pub fn rotated_rect(origin: Vec2, angle: f32, local: &Aabb, color: [f32; 4]) -> Vec<Vertex> {
    let rotation = Vec2::from_angle(angle);
    let placed = corners(local).map(|c| origin + rotation.rotate(c));
    quad(placed, color).to_vec()
}
