//! Per-level visual themes

use super::color::{Color, rgb8};
use crate::consts::MAX_LEVEL;

/// Colors and banner name for one level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelPalette {
    pub name: &'static str,
    pub obstacle_outer: Color,
    pub obstacle_inner: Color,
    pub star: Color,
    pub background_star: Color,
}

/// Themes for levels 1..=MAX_LEVEL, in order
pub const LEVELS: [LevelPalette; MAX_LEVEL as usize] = [
    LevelPalette {
        name: "Liftoff",
        obstacle_outer: rgb8(0, 128, 0),
        obstacle_inner: rgb8(0xc8, 0, 0),
        star: rgb8(255, 255, 255),
        background_star: rgb8(255, 255, 255),
    },
    LevelPalette {
        name: "Violet Drift",
        obstacle_outer: rgb8(0x8a, 0x2b, 0xe2),
        obstacle_inner: rgb8(0x00, 0xff, 0xff),
        star: rgb8(0xff, 0xff, 0x00),
        background_star: rgb8(0xaa, 0xaa, 0xff),
    },
    LevelPalette {
        name: "Solar Wind",
        obstacle_outer: rgb8(255, 165, 0),
        obstacle_inner: rgb8(255, 255, 0),
        star: rgb8(0, 255, 255),
        background_star: rgb8(255, 255, 0),
    },
    LevelPalette {
        name: "Red Giant",
        obstacle_outer: rgb8(255, 0, 0),
        obstacle_inner: rgb8(139, 0, 0),
        star: rgb8(255, 165, 0),
        background_star: rgb8(0xff, 0x88, 0x00),
    },
    LevelPalette {
        name: "Ice Belt",
        obstacle_outer: rgb8(0xaa, 0xff, 0xff),
        obstacle_inner: rgb8(0, 0, 255),
        star: rgb8(0xcc, 0xff, 0xff),
        background_star: rgb8(0xad, 0xd8, 0xe6),
    },
    LevelPalette {
        name: "Event Horizon",
        obstacle_outer: rgb8(255, 0, 255),
        obstacle_inner: rgb8(128, 0, 128),
        star: rgb8(255, 0, 0),
        background_star: rgb8(0xff, 0x44, 0x44),
    },
];

/// Theme for a level. Panics on levels outside 1..=MAX_LEVEL.
pub fn palette(level: u32) -> &'static LevelPalette {
    assert!(
        (1..=MAX_LEVEL).contains(&level),
        "level {level} outside 1..={MAX_LEVEL}"
    );
    &LEVELS[(level - 1) as usize]
}
