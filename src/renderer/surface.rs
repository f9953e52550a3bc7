//! Drawing-surface abstraction
//!
//! The scene is composed against `DrawSurface` so the same frame can go to a
//! browser canvas, a GPU vertex batch, or a recording for tests.

use glam::Vec2;
use serde::Serialize;

use super::color::Color;

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    /// `x` is the left edge of the text
    Start,
    /// `x` is the horizontal center of the text
    Center,
}

/// Primitive operations the renderer needs
pub trait DrawSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Filled closed polygon through `points`
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    /// Closed outline through `points`, `line_width` pixels wide
    fn stroke_polygon(&mut self, points: &[Vec2], line_width: f32, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Text with the baseline at `y`
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, align: TextAlign, color: Color);
}

/// A recorded drawing operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Polygon {
        points: Vec<Vec2>,
        color: Color,
    },
    Outline {
        points: Vec<Vec2>,
        line_width: f32,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font_size: f32,
        align: TextAlign,
        color: Color,
    },
}

/// Surface that records commands in order
#[derive(Debug, Clone, Default, Serialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text strings drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for DrawList {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], line_width: f32, color: Color) {
        self.commands.push(DrawCommand::Outline {
            points: points.to_vec(),
            line_width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, align: TextAlign, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font_size,
            align,
            color,
        });
    }
}
