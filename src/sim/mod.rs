//! Simulation module
//!
//! All gameplay logic lives here:
//! - One fixed-order tick per frame, no wall-clock time
//! - Injected, seedable RNG only
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod hazards;
pub mod level;
pub mod particles;
pub mod ship;
pub mod spawner;
pub mod starfield;
pub mod state;
pub mod tick;

pub use camera::{Viewport, camera_offset, world_to_screen_x};
pub use collision::{Fate, SweepReport, ship_collects_star, ship_hits_obstacle, sweep};
pub use hazards::{Obstacle, Star};
pub use particles::{ExhaustKind, Particle};
pub use ship::Ship;
pub use spawner::{Spawner, obstacle_threshold};
pub use starfield::{BackgroundStar, Starfield};
pub use state::{GameEvent, GamePhase, GameState, HudSnapshot};
pub use tick::{LoopControl, TickInput, tick};
