//! Camera and coordinate model
//!
//! The world scrolls horizontally only. Screen Y equals world Y; screen X is
//! world X minus the camera offset, which follows the ship once it passes the
//! middle of the viewport and never goes negative.

use serde::{Deserialize, Serialize};

/// Viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// World X of the right viewport edge for a camera offset
    #[inline]
    pub fn right_edge(&self, cam_x: f32) -> f32 {
        cam_x + self.width
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Camera offset for a ship at `world_x`: `max(0, world_x - width / 2)`
#[inline]
pub fn camera_offset(world_x: f32, viewport_width: f32) -> f32 {
    (world_x - viewport_width / 2.0).max(0.0)
}

/// Project a world X coordinate into screen space
#[inline]
pub fn world_to_screen_x(world_x: f32, cam_x: f32) -> f32 {
    world_x - cam_x
}
