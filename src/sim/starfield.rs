//! Parallax background starfield
//!
//! Stars are recycled rather than destroyed: once one drifts past the left
//! edge it jumps back to just beyond the right edge at a new height.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::camera::{Viewport, world_to_screen_x};
use crate::consts::BG_STAR_RECYCLE_X;

/// A background star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundStar {
    pub world_x: f32,
    pub screen_y: f32,
    /// Scroll speed, fixed until the field is regenerated
    pub speed: f32,
}

fn random_speed(rng: &mut impl Rng, velocity_scale: f32) -> f32 {
    rng.random_range(1.0f32..3.5) * velocity_scale
}

/// The full set of background stars
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Starfield {
    pub stars: Vec<BackgroundStar>,
}

impl Starfield {
    /// Scatter `count` stars across the initial viewport
    pub fn scatter(count: usize, viewport: Viewport, velocity_scale: f32, rng: &mut impl Rng) -> Self {
        let stars = (0..count)
            .map(|_| BackgroundStar {
                world_x: rng.random_range(0.0..viewport.width.max(1.0)),
                screen_y: rng.random_range(0.0..viewport.height.max(1.0)),
                speed: random_speed(rng, velocity_scale),
            })
            .collect();
        Self { stars }
    }

    /// Replace every star with a new one in the band one viewport ahead of the camera
    pub fn regenerate_ahead(
        &mut self,
        cam_x: f32,
        viewport: Viewport,
        velocity_scale: f32,
        rng: &mut impl Rng,
    ) {
        let ahead = viewport.right_edge(cam_x);
        for star in &mut self.stars {
            *star = BackgroundStar {
                world_x: ahead + rng.random_range(0.0..viewport.width.max(1.0)),
                screen_y: rng.random_range(0.0..viewport.height.max(1.0)),
                speed: random_speed(rng, velocity_scale),
            };
        }
    }

    /// Drift every star left and recycle the ones past the left edge
    pub fn scroll(&mut self, cam_x: f32, viewport: Viewport, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.world_x -= star.speed;
            if world_to_screen_x(star.world_x, cam_x) < BG_STAR_RECYCLE_X {
                star.world_x = viewport.right_edge(cam_x) + rng.random_range(0.0f32..100.0);
                star.screen_y = rng.random_range(0.0..viewport.height.max(1.0));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
