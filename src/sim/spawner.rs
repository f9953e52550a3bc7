//! Timer-driven spawning of obstacles and bonus stars
//!
//! Each timer accumulates a velocity-scaled amount per active tick. Crossing
//! its threshold spawns one entity just past the right edge of the viewport
//! and resets the timer to zero.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::camera::Viewport;
use super::hazards::{Obstacle, Star};
use crate::consts::*;

/// Obstacle spawn threshold for a level: denser with level, floored at 16
pub fn obstacle_threshold(level: u32) -> f32 {
    (42.0 - level as f32 * 3.7).max(OBSTACLE_MIN_THRESHOLD)
}

/// Entities produced by one spawner step
#[derive(Debug, Default)]
pub struct Spawned {
    pub obstacle: Option<Obstacle>,
    pub star: Option<Star>,
}

/// The two spawn accumulators
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    pub obstacle_timer: f32,
    pub star_timer: f32,
}

impl Spawner {
    /// Accumulate one tick and spawn whatever crossed its threshold
    pub fn step(
        &mut self,
        level: u32,
        velocity_scale: f32,
        cam_x: f32,
        viewport: Viewport,
        rng: &mut impl Rng,
    ) -> Spawned {
        let mut spawned = Spawned::default();
        let edge = viewport.right_edge(cam_x);

        self.obstacle_timer += OBSTACLE_TIMER_RATE * velocity_scale;
        if self.obstacle_timer > obstacle_threshold(level) {
            let x = edge + rng.random_range(50.0f32..150.0);
            spawned.obstacle = Some(Obstacle::spawn(x, viewport, rng));
            self.obstacle_timer = 0.0;
        }

        self.star_timer += STAR_TIMER_RATE * velocity_scale;
        if self.star_timer > STAR_SPAWN_THRESHOLD {
            let x = edge + rng.random_range(100.0f32..400.0);
            spawned.star = Some(Star::spawn(x, viewport, velocity_scale, rng));
            self.star_timer = 0.0;
        }

        spawned
    }
}
