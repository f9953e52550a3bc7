//! Fixed-order simulation tick
//!
//! One call advances the session by one frame: input, ship physics, exhaust,
//! spawning, hazard sweep with scoring, then level progression. Rendering is
//! the host's next step and reads the state read-only.

use serde::{Deserialize, Serialize};

use super::camera::Viewport;
use super::collision::{obstacle_fate, star_fate, sweep};
use super::level::{is_winning_score, obstacle_speed, target_level, velocity_scale_for};
use super::particles::{emit_exhaust, update_particles};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick, sampled once from the held-key set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    /// Continue after a level-up pause
    pub resume: bool,
    /// Start over (only after game over or win)
    pub restart: bool,
    /// Stop the loop (only after game over or win)
    pub quit: bool,
    /// Viewport size at tick start, if the host reports one
    pub viewport: Option<Viewport>,
}

/// What the host loop should do after a tick
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> LoopControl {
    state.events.clear();

    if let Some(viewport) = input.viewport {
        state.resize(viewport);
    }

    match state.phase {
        GamePhase::Paused if input.resume => {
            log::info!("Resuming at level {}", state.level);
            state.phase = GamePhase::Running;
        }
        GamePhase::GameOver | GamePhase::Won => {
            if input.restart {
                log::info!("Restarting after {:?} with score {}", state.phase, state.score);
                state.reset();
                state.events.push(GameEvent::Restarted);
                return LoopControl::Continue;
            }
            if input.quit {
                log::info!("Quit requested");
                return LoopControl::Quit;
            }
        }
        _ => {}
    }

    // Background keeps drifting in every phase
    state
        .starfield
        .scroll(state.ship.cam_x, state.viewport, &mut state.rng);

    if state.phase == GamePhase::Running {
        step_running(state, input);
    }

    // Exhaust keeps fading even when nothing emits
    update_particles(&mut state.particles);

    evaluate_progression(state);

    LoopControl::Continue
}

/// Gameplay update for a running tick
fn step_running(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;
    let viewport = state.viewport;

    state.ship.update(input, viewport, state.velocity_scale);

    // At most one life is lost per tick, whatever combination of hazards hit
    let mut life_lost = false;
    if state.ship.top() <= 0.0 {
        log::debug!("Ceiling breach at tick {}", state.time_ticks);
        state.events.push(GameEvent::CeilingBreach);
        state.lose_life();
        life_lost = true;
    }

    let cap = state.settings.max_particles();
    emit_exhaust(&state.ship, &mut state.rng, &mut state.particles, cap);

    let spawned = state.spawner.step(
        state.level,
        state.velocity_scale,
        state.ship.cam_x,
        viewport,
        &mut state.rng,
    );
    state.obstacles.extend(spawned.obstacle);
    state.stars.extend(spawned.star);

    let speed = obstacle_speed(state.level, state.velocity_scale);
    resolve_obstacles(state, speed, &mut life_lost);
    resolve_stars(state);
}

/// Advance obstacles at `speed`, reward passes and charge collisions
pub(crate) fn resolve_obstacles(state: &mut GameState, speed: f32, life_lost: &mut bool) {
    let ship = &state.ship;
    let report = sweep(&mut state.obstacles, |o| obstacle_fate(o, ship, speed));

    for _ in 0..report.scrolled_off {
        state.score += OBSTACLE_PASS_REWARD;
        state.events.push(GameEvent::ObstaclePassed);
    }
    for _ in 0..report.collided {
        log::debug!("Obstacle hit at tick {}", state.time_ticks);
        state.events.push(GameEvent::ObstacleHit);
    }
    if report.collided > 0 && !*life_lost {
        state.lose_life();
        *life_lost = true;
    }
}

/// Advance stars and reward pickups
pub(crate) fn resolve_stars(state: &mut GameState) {
    let ship = &state.ship;
    let report = sweep(&mut state.stars, |s| star_fate(s, ship));

    for _ in 0..report.collided {
        log::debug!("Star collected at tick {}", state.time_ticks);
        state.score += STAR_PICKUP_REWARD;
        state.events.push(GameEvent::StarCollected);
    }
}

/// Level-up, win and pause transitions, evaluated after the entity updates
fn evaluate_progression(state: &mut GameState) {
    let target = target_level(state.score);
    if target > state.level {
        state.level = target;
        state.velocity_scale = velocity_scale_for(target);
        state.starfield.regenerate_ahead(
            state.ship.cam_x,
            state.viewport,
            state.velocity_scale,
            &mut state.rng,
        );
        state.events.push(GameEvent::LevelUp { level: target });
        log::info!(
            "Level {} reached at score {} (velocity scale {:.2})",
            target,
            state.score,
            state.velocity_scale
        );
        if state.phase == GamePhase::Running {
            state.phase = GamePhase::Paused;
        }
    }

    if is_winning_score(state.score) && !state.phase.is_terminal() {
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Won { score: state.score });
        log::info!("Won with score {}", state.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::hazards::{Obstacle, Star};
    use proptest::prelude::*;

    const VP: Viewport = Viewport::new(800.0, 600.0);

    fn new_state() -> GameState {
        GameState::new(12345, Settings::default(), VP)
    }

    fn state_with_lives(lives: u32) -> GameState {
        let settings = Settings {
            starting_lives: lives,
            ..Settings::default()
        };
        GameState::new(12345, settings, VP)
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    /// Obstacle overlapping the ship after this tick's scroll
    fn obstacle_on_ship(state: &GameState) -> Obstacle {
        let ship = &state.ship;
        Obstacle {
            world_x: ship.world_x - 10.0,
            screen_x: 0.0,
            screen_y: ship.screen_y - 10.0,
            width: 40.0,
            height: 40.0,
        }
    }

    #[test]
    fn test_running_tick_advances() {
        let mut state = new_state();
        let y = state.ship.screen_y;
        assert_eq!(tick(&mut state, &idle()), LoopControl::Continue);
        assert_eq!(state.time_ticks, 1);
        assert!(state.ship.screen_y > y);
        assert!(state.spawner.obstacle_timer > 0.0);
    }

    #[test]
    fn test_camera_invariant_every_tick() {
        let mut state = new_state();
        let input = TickInput {
            thrust: true,
            rotate_right: true,
            ..Default::default()
        };
        for i in 0..300 {
            let input = if i % 40 < 20 { input.clone() } else { idle() };
            let _ = tick(&mut state, &input);
            let ship = &state.ship;
            assert_eq!(ship.cam_x, (ship.world_x - VP.width / 2.0).max(0.0));
            assert_eq!(ship.screen_x, ship.world_x - ship.cam_x);
        }
    }

    #[test]
    fn test_obstacle_pass_scores_exactly_twenty() {
        let mut state = new_state();
        // Ship far from the obstacle's row
        state.ship.screen_y = 550.0;
        let width = 100.0;
        state.obstacles.push(Obstacle {
            world_x: state.ship.cam_x + VP.width + 100.0,
            screen_x: 0.0,
            screen_y: 0.0,
            width,
            height: 50.0,
        });
        let speed = 5.0;
        let ticks = ((VP.width + 100.0 + width) / speed).ceil() as u32;

        let mut life_lost = false;
        for _ in 0..ticks - 1 {
            resolve_obstacles(&mut state, speed, &mut life_lost);
        }
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.score, 0);

        resolve_obstacles(&mut state, speed, &mut life_lost);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, OBSTACLE_PASS_REWARD);
        assert_eq!(state.lives, 1);
        assert!(!life_lost);
    }

    #[test]
    fn test_obstacle_collision_costs_life_and_ends_game() {
        let mut state = new_state();
        let o = obstacle_on_ship(&state);
        state.obstacles.push(o);
        let _ = tick(&mut state, &idle());
        assert!(state.obstacles.is_empty());
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::ObstacleHit));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_star_pickup_scores_hundred() {
        let mut state = new_state();
        let center = state.ship.center();
        state.stars.push(Star {
            world_x: state.ship.world_x,
            screen_x: 0.0,
            screen_y: center.y,
            speed: 0.0,
            size: 2.0,
        });
        let _ = tick(&mut state, &idle());
        assert!(state.stars.is_empty());
        assert_eq!(state.score, STAR_PICKUP_REWARD);
        assert_eq!(state.lives, 1);
    }

    #[test]
    fn test_star_scrolling_off_scores_nothing() {
        let mut state = new_state();
        state.stars.push(Star {
            world_x: -5.0,
            screen_x: 0.0,
            screen_y: 10.0,
            speed: 3.0,
            size: 2.0,
        });
        let _ = tick(&mut state, &idle());
        assert!(state.stars.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_ceiling_breach_costs_life() {
        let mut state = state_with_lives(3);
        state.ship.screen_y = state.ship.half_h + 0.5;
        state.ship.vel.y = -5.0;
        let _ = tick(&mut state, &idle());
        assert_eq!(state.lives, 2);
        assert!(state.events.contains(&GameEvent::CeilingBreach));
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_one_life_per_tick_for_simultaneous_hazards() {
        let mut state = state_with_lives(3);
        state.ship.screen_y = state.ship.half_h + 0.5;
        state.ship.vel.y = -5.0;
        let mut o = obstacle_on_ship(&state);
        o.screen_y = 0.0;
        state.obstacles.push(o.clone());
        o.world_x += 5.0;
        state.obstacles.push(o);

        let _ = tick(&mut state, &idle());
        assert!(state.events.contains(&GameEvent::CeilingBreach));
        assert!(state.events.contains(&GameEvent::ObstacleHit));
        assert_eq!(state.lives, 2);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_level_up_pauses_and_regenerates_starfield() {
        for k in 1..=7u64 {
            let mut state = new_state();
            state.score = LEVEL_THRESHOLD * k;
            let _ = tick(&mut state, &idle());
            let expected = (k as u32 + 1).min(MAX_LEVEL);
            assert_eq!(state.level, expected);
            if state.score < WIN_SCORE {
                assert_eq!(state.phase, GamePhase::Paused);
            } else {
                assert_eq!(state.phase, GamePhase::Won);
            }
            assert!((state.velocity_scale - velocity_scale_for(expected)).abs() < 1e-6);
            let edge = state.ship.cam_x + VP.width;
            assert!(state.starfield.stars.iter().all(|s| s.world_x >= edge));
            assert!(state.events.contains(&GameEvent::LevelUp { level: expected }));
        }
    }

    #[test]
    fn test_paused_blocks_gameplay_until_resume() {
        let mut state = new_state();
        state.score = LEVEL_THRESHOLD;
        let _ = tick(&mut state, &idle());
        assert_eq!(state.phase, GamePhase::Paused);

        let ship = state.ship.clone();
        let timers = state.spawner.clone();
        let ticks = state.time_ticks;
        let count = state.particles.len();
        for _ in 0..10 {
            let _ = tick(&mut state, &TickInput { thrust: true, ..Default::default() });
        }
        assert_eq!(state.ship, ship);
        assert_eq!(state.spawner, timers);
        assert_eq!(state.time_ticks, ticks);
        assert!(state.particles.len() <= count);

        let resume = TickInput {
            resume: true,
            ..Default::default()
        };
        let _ = tick(&mut state, &resume);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.time_ticks, ticks + 1);
    }

    #[test]
    fn test_level_never_decreases() {
        let mut state = new_state();
        state.score = LEVEL_THRESHOLD * 3;
        let _ = tick(&mut state, &idle());
        assert_eq!(state.level, 4);
        state.score = 0;
        let _ = tick(&mut state, &idle());
        assert_eq!(state.level, 4);
    }

    #[test]
    fn test_win_is_terminal() {
        let mut state = new_state();
        state.level = MAX_LEVEL;
        state.score = WIN_SCORE;
        let _ = tick(&mut state, &idle());
        assert_eq!(state.phase, GamePhase::Won);
        assert!(state.hud().win);

        // Gameplay keys are ignored
        let ticks = state.time_ticks;
        let _ = tick(&mut state, &TickInput { thrust: true, resume: true, ..Default::default() });
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = state_with_lives(2);
        state.score = 4321;
        state.level = 4;
        state.velocity_scale = 0.62;
        state.spawner.obstacle_timer = 12.0;
        state.spawner.star_timer = 30.0;
        state.lives = 0;
        state.phase = GamePhase::GameOver;
        let o = obstacle_on_ship(&state);
        state.obstacles.push(o);

        // Resume does nothing in a terminal phase
        let _ = tick(&mut state, &TickInput { resume: true, ..Default::default() });
        assert_eq!(state.phase, GamePhase::GameOver);

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &restart), LoopControl::Continue);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 2);
        assert_eq!(state.level, 1);
        assert_eq!(state.velocity_scale, BASE_VELOCITY_SCALE);
        assert_eq!(state.spawner.obstacle_timer, 0.0);
        assert_eq!(state.spawner.star_timer, 0.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.events, vec![GameEvent::Restarted]);
    }

    #[test]
    fn test_quit_only_in_terminal_phase() {
        let mut state = new_state();
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &quit), LoopControl::Continue);
        state.phase = GamePhase::GameOver;
        assert_eq!(tick(&mut state, &quit), LoopControl::Quit);
    }

    #[test]
    fn test_resize_applies_at_tick_start() {
        let mut state = new_state();
        let big = Viewport::new(1600.0, 900.0);
        let _ = tick(
            &mut state,
            &TickInput {
                viewport: Some(big),
                ..Default::default()
            },
        );
        assert_eq!(state.viewport, big);
        assert_eq!(state.ship.cam_x, (state.ship.world_x - 800.0).max(0.0));
    }

    #[test]
    fn test_determinism() {
        let mut a = new_state();
        let mut b = new_state();
        let inputs = [
            TickInput {
                thrust: true,
                ..Default::default()
            },
            TickInput {
                rotate_right: true,
                thrust: true,
                ..Default::default()
            },
            TickInput::default(),
        ];
        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            let _ = tick(&mut a, input);
            let _ = tick(&mut b, input);
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.ship, b.ship);
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.stars, b.stars);
    }

    proptest! {
        #[test]
        fn prop_score_and_level_monotonic(
            seed in any::<u64>(),
            inputs in proptest::collection::vec((any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()), 1..300),
        ) {
            let mut state = GameState::new(seed, Settings::default(), VP);
            let mut score = state.score;
            let mut level = state.level;
            for (l, r, t, resume) in inputs {
                let input = TickInput { rotate_left: l, rotate_right: r, thrust: t, resume, ..Default::default() };
                let _ = tick(&mut state, &input);
                prop_assert!(state.score >= score);
                prop_assert!(state.level >= level);
                let limit = 15.0 * state.velocity_scale;
                prop_assert!(state.ship.vel.x.abs() <= limit + 1e-4);
                prop_assert!(state.ship.vel.y.abs() <= limit + 1e-4);
                score = state.score;
                level = state.level;
            }
        }
    }
}
