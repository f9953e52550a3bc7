//! The player's rocket ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::{Viewport, camera_offset, world_to_screen_x};
use super::tick::TickInput;
use crate::consts::*;
use crate::rotate_point;

/// Body silhouette in unscaled ship-local units (nose along +X)
pub const BODY_POINTS: [[f32; 2]; 7] = [
    [35.0, 0.0],
    [8.0, -18.0],
    [-8.0, -18.0],
    [-22.0, -12.0],
    [-22.0, 12.0],
    [-8.0, 18.0],
    [8.0, 18.0],
];

/// Exhaust flame silhouette in unscaled ship-local units
pub const FLAME_POINTS: [[f32; 2]; 3] = [[-30.0, -8.0], [-30.0, 8.0], [-50.0, 0.0]];

/// The player ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    /// Unbounded horizontal world position
    pub world_x: f32,
    /// Vertical position (no vertical scrolling, so world Y == screen Y)
    pub screen_y: f32,
    pub vel: Vec2,
    /// Facing angle (radians, 0 = right, -PI/2 = up)
    pub angle: f32,
    /// Camera offset derived from `world_x`
    pub cam_x: f32,
    /// Screen X derived from `world_x - cam_x`
    pub screen_x: f32,
    pub thrusting: bool,
    pub half_w: f32,
    pub half_h: f32,
}

impl Ship {
    /// A ship at rest in the middle of the viewport, nose up
    pub fn new(viewport: Viewport) -> Self {
        let half = SHIP_HALF_EXTENT * GAME_SCALE;
        let mut ship = Self {
            world_x: viewport.width / 2.0,
            screen_y: viewport.height / 2.0,
            vel: Vec2::ZERO,
            angle: -std::f32::consts::FRAC_PI_2,
            cam_x: 0.0,
            screen_x: 0.0,
            thrusting: false,
            half_w: half,
            half_h: half,
        };
        ship.follow_camera(viewport);
        ship
    }

    /// Recompute the camera offset and derived screen X
    pub fn follow_camera(&mut self, viewport: Viewport) {
        self.cam_x = camera_offset(self.world_x, viewport.width);
        self.screen_x = world_to_screen_x(self.world_x, self.cam_x);
    }

    /// Screen center of the ship
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.screen_x, self.screen_y)
    }

    /// Y of the top edge of the collision box
    #[inline]
    pub fn top(&self) -> f32 {
        self.screen_y - self.half_h
    }

    /// Max speed per axis for a velocity scale
    #[inline]
    pub fn max_speed(velocity_scale: f32) -> f32 {
        SHIP_MAX_SPEED * velocity_scale
    }

    /// Advance the ship by one tick
    pub fn update(&mut self, input: &TickInput, viewport: Viewport, velocity_scale: f32) {
        if input.rotate_left {
            self.angle -= SHIP_ROT_SPEED;
        }
        if input.rotate_right {
            self.angle += SHIP_ROT_SPEED;
        }

        self.thrusting = input.thrust;
        if self.thrusting {
            self.vel += crate::heading(self.angle) * SHIP_THRUST;
        }

        self.vel.y += GRAVITY;
        self.vel *= DRAG;

        let max = Self::max_speed(velocity_scale);
        self.vel = self.vel.clamp(Vec2::splat(-max), Vec2::splat(max));

        self.world_x += self.vel.x;
        self.screen_y += self.vel.y;
        self.follow_camera(viewport);

        // Side walls: bounce off the viewport edges in screen space
        if self.screen_x < self.half_w {
            self.world_x = self.cam_x + self.half_w;
            self.vel.x *= -WALL_RESTITUTION;
            self.follow_camera(viewport);
        }
        if self.screen_x > viewport.width - self.half_w {
            self.world_x = self.cam_x + (viewport.width - self.half_w);
            self.vel.x *= -WALL_RESTITUTION;
            self.follow_camera(viewport);
        }

        // Floor bounce. The ceiling is lethal and handled by the tick.
        let floor = viewport.height - self.half_h;
        if self.screen_y > floor {
            self.screen_y = floor;
            self.vel.y *= -FLOOR_RESTITUTION;
        }
    }

    /// Local polygon scaled and rotated to the current angle, relative to the ship center
    pub fn rotated(&self, points: &[[f32; 2]]) -> Vec<Vec2> {
        points
            .iter()
            .map(|&[x, y]| rotate_point(Vec2::new(x, y) * GAME_SCALE, self.angle))
            .collect()
    }

    /// Body polygon in screen space
    pub fn body_polygon(&self) -> Vec<Vec2> {
        let center = self.center();
        self.rotated(&BODY_POINTS)
            .into_iter()
            .map(|p| p + center)
            .collect()
    }

    /// Flame polygon in screen space (only drawn while thrusting)
    pub fn flame_polygon(&self) -> Vec<Vec2> {
        let center = self.center();
        self.rotated(&FLAME_POINTS)
            .into_iter()
            .map(|p| p + center)
            .collect()
    }
}
