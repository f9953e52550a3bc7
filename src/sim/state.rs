//! Game state and session bookkeeping
//!
//! Everything one session mutates lives in `GameState`, owned by the host and
//! advanced only by `tick`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Viewport;
use super::hazards::{Obstacle, Star};
use super::level::velocity_scale_for;
use super::particles::Particle;
use super::ship::Ship;
use super::spawner::Spawner;
use super::starfield::Starfield;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Frozen after a level-up until the resume key
    Paused,
    /// Lives exhausted
    GameOver,
    /// Winning score reached
    Won,
}

impl GamePhase {
    /// GameOver and Won only accept restart or quit
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// Gameplay events produced by a tick (cleared at the start of each tick)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ObstaclePassed,
    ObstacleHit,
    StarCollected,
    CeilingBreach,
    LifeLost { remaining: u32 },
    LevelUp { level: u32 },
    GameOver { score: u64 },
    Won { score: u64 },
    Restarted,
}

/// Values an external HUD reads after each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub paused: bool,
    pub game_over: bool,
    pub win: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Settings the session was created with (restart reuses them)
    pub settings: Settings,
    /// Viewport current at the start of the tick
    pub viewport: Viewport,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// Current level (1..=MAX_LEVEL)
    pub level: u32,
    /// Difficulty multiplier on max speed and spawn rates
    pub velocity_scale: f32,
    pub spawner: Spawner,
    pub ship: Ship,
    pub obstacles: Vec<Obstacle>,
    pub stars: Vec<Star>,
    /// Visual exhaust particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub starfield: Starfield,
    /// Simulation tick counter (running ticks only)
    pub time_ticks: u64,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, settings: Settings, viewport: Viewport) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), settings, viewport)
    }

    /// Create a new session drawing randomness from `rng`
    pub fn with_rng(rng: Pcg32, settings: Settings, viewport: Viewport) -> Self {
        let mut state = Self {
            settings,
            viewport,
            rng,
            phase: GamePhase::Running,
            score: 0,
            lives: 0,
            level: 1,
            velocity_scale: velocity_scale_for(1),
            spawner: Spawner::default(),
            ship: Ship::new(viewport),
            obstacles: Vec::new(),
            stars: Vec::new(),
            particles: Vec::new(),
            starfield: Starfield::default(),
            time_ticks: 0,
            events: Vec::new(),
        };
        state.reset();
        state
    }

    /// Re-initialize every session value. The RNG stream continues.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Running;
        self.score = self.settings.starting_score;
        self.lives = self.settings.starting_lives;
        self.level = 1;
        self.velocity_scale = velocity_scale_for(1);
        self.spawner = Spawner::default();
        self.ship = Ship::new(self.viewport);
        self.obstacles.clear();
        self.stars.clear();
        self.particles.clear();
        self.starfield = Starfield::scatter(
            self.settings.background_stars(),
            self.viewport,
            self.velocity_scale,
            &mut self.rng,
        );
        self.time_ticks = 0;

        log::info!(
            "Session started: score={}, lives={}, {} background stars",
            self.score,
            self.lives,
            self.starfield.len()
        );
    }

    /// Apply a new viewport size (takes effect from the next physics step)
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            log::debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
            self.viewport = viewport;
            self.ship.follow_camera(viewport);
        }
    }

    /// Lose one life; enters GameOver when none remain
    pub(crate) fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::LifeLost {
            remaining: self.lives,
        });
        if self.lives == 0 && self.phase != GamePhase::GameOver {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver { score: self.score });
            log::info!("Game over with score {}", self.score);
        }
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.score,
            lives: self.lives,
            level: self.level,
            paused: self.phase == GamePhase::Paused,
            game_over: self.phase == GamePhase::GameOver,
            win: self.phase == GamePhase::Won,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BASE_VELOCITY_SCALE;

    #[test]
    fn test_new_session_defaults() {
        let state = GameState::new(1, Settings::default(), Viewport::new(800.0, 600.0));
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 1);
        assert_eq!(state.level, 1);
        assert_eq!(state.velocity_scale, BASE_VELOCITY_SCALE);
        assert_eq!(state.starfield.len(), 1070);
        assert!(state.obstacles.is_empty() && state.stars.is_empty());
    }

    #[test]
    fn test_starting_offset_from_settings() {
        let settings = Settings {
            starting_score: 5400,
            starting_lives: 3,
            ..Settings::default()
        };
        let state = GameState::new(1, settings, Viewport::default());
        assert_eq!(state.score, 5400);
        assert_eq!(state.lives, 3);
        // Level is only re-evaluated by the tick
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_lose_last_life_ends_game() {
        let mut state = GameState::new(1, Settings::default(), Viewport::default());
        state.lose_life();
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::GameOver { score: 0 }));
        assert!(state.hud().game_over);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(GamePhase::GameOver.is_terminal());
        assert!(GamePhase::Won.is_terminal());
        assert!(!GamePhase::Paused.is_terminal());
        assert!(!GamePhase::Running.is_terminal());
    }
}
