//! Score-gated difficulty progression

use crate::consts::*;

/// Level a score qualifies for, capped at `MAX_LEVEL`
pub fn target_level(score: u64) -> u32 {
    let earned = 1 + score / LEVEL_THRESHOLD;
    earned.min(MAX_LEVEL as u64) as u32
}

/// Global velocity multiplier for a level
pub fn velocity_scale_for(level: u32) -> f32 {
    BASE_VELOCITY_SCALE + level.saturating_sub(1) as f32 * VELOCITY_SCALE_PER_LEVEL
}

/// Scroll speed shared by every obstacle this tick
pub fn obstacle_speed(level: u32, velocity_scale: f32) -> f32 {
    (4.8 + level as f32 * 1.7) * velocity_scale
}

/// Whether the score has reached the win condition
#[inline]
pub fn is_winning_score(score: u64) -> bool {
    score >= WIN_SCORE
}
