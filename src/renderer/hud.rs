//! HUD overlay text

use super::color::colors;
use super::palette::palette;
use super::surface::{DrawSurface, TextAlign};
use crate::consts::GAME_SCALE;
use crate::sim::{HudSnapshot, Viewport};

/// Font sizes and margins derived from the viewport height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudLayout {
    pub font: f32,
    pub small_font: f32,
    pub big_font: f32,
    pub margin_x: f32,
    pub margin_y: f32,
    pub line_height: f32,
}

impl HudLayout {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let font = (viewport.height / 20.0 * GAME_SCALE).floor();
        Self {
            font,
            small_font: (viewport.height / 35.0 * GAME_SCALE).floor(),
            big_font: (viewport.height / 15.0 * GAME_SCALE).floor(),
            margin_x: 30.0 * GAME_SCALE,
            margin_y: 40.0 * GAME_SCALE,
            line_height: font + 10.0 * GAME_SCALE,
        }
    }
}

/// Draw the score panel plus the phase-specific banner or control hints
pub fn draw_hud(hud: &HudSnapshot, viewport: Viewport, surface: &mut impl DrawSurface) {
    let layout = HudLayout::for_viewport(viewport);
    let (cx, cy) = (viewport.width / 2.0, viewport.height / 2.0);

    let panel = [
        format!("Score: {}", hud.score),
        format!("Lives: {}", hud.lives),
        format!("Level: {}", hud.level),
    ];
    for (i, line) in panel.iter().enumerate() {
        surface.fill_text(
            line,
            layout.margin_x,
            layout.margin_y + layout.line_height * i as f32,
            layout.font,
            TextAlign::Start,
            colors::WHITE,
        );
    }

    if hud.paused {
        let name = palette(hud.level).name;
        surface.fill_text(
            &format!("Level {}: {}!", hud.level, name),
            cx,
            cy,
            layout.big_font,
            TextAlign::Center,
            colors::LIME,
        );
        surface.fill_text(
            "Press SPACE to Continue",
            cx,
            cy + 50.0 * GAME_SCALE,
            layout.font,
            TextAlign::Center,
            colors::LIME,
        );
    } else if hud.game_over || hud.win {
        let (title, color) = if hud.game_over {
            ("GAME OVER!", colors::RED)
        } else {
            ("YOU WIN! Rocket Legend!", colors::LIME)
        };
        surface.fill_text(
            title,
            cx,
            cy - 80.0 * GAME_SCALE,
            layout.big_font,
            TextAlign::Center,
            color,
        );
        surface.fill_text(
            &format!("Final Score: {}", hud.score),
            cx,
            cy - 20.0 * GAME_SCALE,
            layout.font,
            TextAlign::Center,
            colors::WHITE,
        );
        surface.fill_text(
            "R: Restart | ESC/Q: Quit",
            cx,
            cy + 40.0 * GAME_SCALE,
            layout.small_font,
            TextAlign::Center,
            colors::WHITE,
        );
    } else {
        surface.fill_text(
            "LEFT/RIGHT: Rotate | UP: Thrust",
            layout.margin_x,
            viewport.height - 60.0 * GAME_SCALE,
            layout.small_font,
            TextAlign::Start,
            colors::WHITE,
        );
        surface.fill_text(
            "(Gravity pulls down! Dodge & Collect!)",
            layout.margin_x,
            viewport.height - 30.0 * GAME_SCALE,
            layout.small_font,
            TextAlign::Start,
            colors::WHITE,
        );
    }
}
