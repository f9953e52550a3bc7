//! Scrolling obstacles and bonus stars
//!
//! Both follow the same contract: `advance` moves the entity left by its
//! speed, recomputes its screen X and reports whether any part of it is still
//! on screen. Scoring and life loss are applied by the caller.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::camera::{Viewport, world_to_screen_x};
use crate::consts::GAME_SCALE;

/// A rectangular hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub world_x: f32,
    pub screen_x: f32,
    pub screen_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// Random size in [80, 160) scaled, placed so it fits the viewport height
    pub fn spawn(world_x: f32, viewport: Viewport, rng: &mut impl Rng) -> Self {
        let width = rng.random_range(80.0f32..160.0) * GAME_SCALE;
        let height = rng.random_range(80.0f32..160.0) * GAME_SCALE;
        let screen_y = random_below(rng, viewport.height - height);
        Self {
            world_x,
            screen_x: world_x,
            screen_y,
            width,
            height,
        }
    }

    /// Scroll left by `speed`; returns false once fully off the left edge
    pub fn advance(&mut self, cam_x: f32, speed: f32) -> bool {
        self.world_x -= speed;
        self.screen_x = world_to_screen_x(self.world_x, cam_x);
        self.screen_x + self.width > 0.0
    }
}

/// A bonus star worth points on pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub world_x: f32,
    pub screen_x: f32,
    pub screen_y: f32,
    /// Scroll speed fixed at spawn
    pub speed: f32,
    pub size: f32,
}

impl Star {
    pub fn spawn(world_x: f32, viewport: Viewport, velocity_scale: f32, rng: &mut impl Rng) -> Self {
        let speed = rng.random_range(4.5f32..6.5) * velocity_scale;
        let size = rng.random_range(4.0f32..8.0) * GAME_SCALE;
        let screen_y = random_below(rng, viewport.height - size);
        Self {
            world_x,
            screen_x: world_x,
            screen_y,
            speed,
            size,
        }
    }

    /// Scroll left by the star's own speed; returns false once off screen
    pub fn advance(&mut self, cam_x: f32) -> bool {
        self.world_x -= self.speed;
        self.screen_x = world_to_screen_x(self.world_x, cam_x);
        self.screen_x + self.size > 0.0
    }

    /// Screen-space center used for drawing and pickup tests
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.screen_x + self.size / 2.0,
            self.screen_y + self.size / 2.0,
        )
    }
}

/// Uniform draw in [0, max), or 0 when the viewport is too small to fit
fn random_below(rng: &mut impl Rng, max: f32) -> f32 {
    if max > 0.0 {
        rng.random_range(0.0..max)
    } else {
        0.0
    }
}
