//! Rocket Dodge - a side-scrolling gravity rocket arcade game
//!
//! Core modules:
//! - `sim`: Simulation (ship physics, spawning, collisions, level progression)
//! - `renderer`: Drawing-surface abstraction, scene and HUD composition
//! - `platform`: Keyboard mapping and the browser canvas adapter
//! - `settings`: Data-driven configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep. Physics constants are tuned per tick at 60 Hz.
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Global visual scale applied to every entity size
    pub const GAME_SCALE: f32 = 0.6;

    /// Progression
    pub const MAX_LEVEL: u32 = 6;
    pub const LEVEL_THRESHOLD: u64 = 1200;
    pub const WIN_SCORE: u64 = 9000;

    /// Velocity scale at level 1, and its increase per level
    pub const BASE_VELOCITY_SCALE: f32 = 0.41;
    pub const VELOCITY_SCALE_PER_LEVEL: f32 = 0.07;

    /// Ship physics (per tick)
    pub const SHIP_ROT_SPEED: f32 = 0.1;
    pub const SHIP_THRUST: f32 = 0.5;
    pub const GRAVITY: f32 = 0.18;
    pub const DRAG: f32 = 0.991;
    /// Max speed per axis before velocity scaling
    pub const SHIP_MAX_SPEED: f32 = 15.0;
    pub const WALL_RESTITUTION: f32 = 0.4;
    pub const FLOOR_RESTITUTION: f32 = 0.3;
    /// Unscaled half extent of the ship collision box
    pub const SHIP_HALF_EXTENT: f32 = 35.0;

    /// Scoring
    pub const OBSTACLE_PASS_REWARD: u64 = 20;
    pub const STAR_PICKUP_REWARD: u64 = 100;

    /// Spawning
    pub const OBSTACLE_TIMER_RATE: f32 = 0.82;
    pub const STAR_TIMER_RATE: f32 = 1.2;
    pub const STAR_SPAWN_THRESHOLD: f32 = 75.0;
    pub const OBSTACLE_MIN_THRESHOLD: f32 = 16.0;

    /// Background star recycling margin (pixels past the left edge)
    pub const BG_STAR_RECYCLE_X: f32 = -10.0;
}

/// Rotate a local point by `angle` radians around the origin.
///
/// x' = x·cosθ − y·sinθ, y' = x·sinθ + y·cosθ
#[inline]
pub fn rotate_point(point: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(point)
}

/// Unit direction vector for an angle
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rotate_point_quarter_turn() {
        let p = rotate_point(Vec2::new(1.0, 0.0), FRAC_PI_2);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);

        let q = rotate_point(Vec2::new(2.0, 3.0), FRAC_PI_2);
        // x' = -y, y' = x
        assert!((q.x + 3.0).abs() < 1e-5);
        assert!((q.y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_heading_is_unit() {
        for i in 0..16 {
            let a = i as f32 * 0.4;
            assert!((heading(a).length() - 1.0).abs() < 1e-5);
        }
    }
}
