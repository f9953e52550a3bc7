//! Canvas 2D drawing surface (browser only)

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::renderer::color::{Color, to_css};
use crate::renderer::surface::{DrawSurface, TextAlign};

/// `DrawSurface` backed by a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    fn set_fill(&self, color: Color) {
        self.ctx.set_fill_style_str(&to_css(color));
    }

    /// Begin a closed path through `points`; false when there is nothing to draw
    fn trace_path(&self, points: &[Vec2]) -> bool {
        let Some((first, rest)) = points.split_first() else {
            return false;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        true
    }
}

impl DrawSurface for CanvasSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.set_fill(color);
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if !self.trace_path(points) {
            return;
        }
        self.set_fill(color);
        self.ctx.fill();
    }

    fn stroke_polygon(&mut self, points: &[Vec2], line_width: f32, color: Color) {
        if !self.trace_path(points) {
            return;
        }
        self.ctx.set_stroke_style_str(&to_css(color));
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.set_fill(color);
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, align: TextAlign, color: Color) {
        self.set_fill(color);
        self.ctx.set_font(&format!("{}px Arial", font_size));
        self.ctx.set_text_align(match align {
            TextAlign::Start => "start",
            TextAlign::Center => "center",
        });
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("Canvas fill_text failed: {:?}", e);
        }
    }
}
