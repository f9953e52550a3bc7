//! Vertex batch surface
//!
//! Tessellates every primitive into one triangle list ready for a GPU vertex
//! buffer. Text cannot be tessellated here and is collected separately for an
//! overlay (DOM or glyph renderer).

use glam::Vec2;

use super::color::Color;
use super::shapes;
use super::surface::{DrawSurface, TextAlign};
use super::vertex::Vertex;

/// A text run left for an overlay renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub pos: Vec2,
    pub font_size: f32,
    pub align: TextAlign,
    pub color: Color,
}

/// Triangle-list surface
#[derive(Debug, Clone, Default)]
pub struct VertexBatch {
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextRun>,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's geometry, keeping the allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.texts.clear();
    }

    /// Vertex data as raw bytes for a buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl DrawSurface for VertexBatch {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.vertices
            .extend(shapes::rect(x, y, width, height, color));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.vertices.extend(shapes::convex_polygon(points, color));
    }

    fn stroke_polygon(&mut self, points: &[Vec2], line_width: f32, color: Color) {
        self.vertices
            .extend(shapes::closed_outline(points, line_width, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let segments = shapes::circle_segments(radius);
        self.vertices
            .extend(shapes::circle(center, radius, color, segments));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, align: TextAlign, color: Color) {
        self.texts.push(TextRun {
            text: text.to_string(),
            pos: Vec2::new(x, y),
            font_size,
            align,
            color,
        });
    }
}
