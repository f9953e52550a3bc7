//! Frame composition
//!
//! Draw order: background, starfield, obstacles, bonus stars, exhaust, ship, HUD.

use glam::Vec2;

use super::color::{colors, with_alpha};
use super::hud::draw_hud;
use super::palette::palette;
use super::surface::DrawSurface;
use crate::consts::GAME_SCALE;
use crate::sim::{ExhaustKind, GameState};

/// Inset of the obstacle's inner rectangle (unscaled)
const OBSTACLE_INSET: f32 = 20.0;
/// Ship outline width (unscaled)
const SHIP_OUTLINE: f32 = 2.0;

/// Render one full frame of `state` onto `surface`
pub fn render(state: &GameState, surface: &mut impl DrawSurface) {
    let viewport = state.viewport;
    let theme = palette(state.level);
    let cam_x = state.ship.cam_x;

    surface.fill_rect(0.0, 0.0, viewport.width, viewport.height, colors::BACKGROUND);

    for star in &state.starfield.stars {
        let x = star.world_x - cam_x;
        if x > viewport.width {
            continue;
        }
        surface.fill_rect(x, star.screen_y, 1.0, 1.0, theme.background_star);
    }

    let inset = OBSTACLE_INSET * GAME_SCALE;
    for obstacle in &state.obstacles {
        surface.fill_rect(
            obstacle.screen_x,
            obstacle.screen_y,
            obstacle.width,
            obstacle.height,
            theme.obstacle_outer,
        );
        surface.fill_rect(
            obstacle.screen_x + inset,
            obstacle.screen_y + inset,
            (obstacle.width - 2.0 * inset).max(0.0),
            (obstacle.height - 2.0 * inset).max(0.0),
            theme.obstacle_inner,
        );
    }

    for star in &state.stars {
        surface.fill_circle(star.center(), star.size, theme.star);
    }

    for particle in &state.particles {
        let base = match particle.kind {
            ExhaustKind::Thrust => colors::EXHAUST_THRUST,
            ExhaustKind::Coast => colors::EXHAUST_COAST,
        };
        let half = particle.size / 2.0;
        surface.fill_rect(
            particle.pos.x - half,
            particle.pos.y - half,
            particle.size,
            particle.size,
            with_alpha(base, particle.alpha()),
        );
    }

    draw_ship(state, surface);
    draw_hud(&state.hud(), viewport, surface);
}

fn draw_ship(state: &GameState, surface: &mut impl DrawSurface) {
    let ship = &state.ship;
    let body: Vec<Vec2> = ship.body_polygon();
    surface.fill_polygon(&body, colors::SHIP_BODY);
    surface.stroke_polygon(&body, SHIP_OUTLINE * GAME_SCALE, colors::WHITE);
    if ship.thrusting {
        surface.fill_polygon(&ship.flame_polygon(), colors::SHIP_FLAME);
    }
}
