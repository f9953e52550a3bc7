//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Keyboard input (DOM key names to `TickInput`)
//! - Drawing to a browser canvas

pub mod input;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use input::{Key, KeyState};
