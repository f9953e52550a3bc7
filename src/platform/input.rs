//! Keyboard state sampled once per simulation tick

use crate::sim::{TickInput, Viewport};

/// Keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Space,
    Restart,
    Quit,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            " " | "Spacebar" => Some(Key::Space),
            "r" | "R" => Some(Key::Restart),
            "Escape" | "q" | "Q" => Some(Key::Quit),
            _ => None,
        }
    }
}

/// Held keys plus presses waiting for the next tick
///
/// Every press is latched until sampled, so a key tapped and released between
/// two ticks still reaches the simulation as held for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    left: bool,
    right: bool,
    up: bool,
    /// Pressed since the last sample, even if already released
    left_tapped: bool,
    right_tapped: bool,
    up_tapped: bool,
    resume: bool,
    restart: bool,
    quit: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Left => {
                self.left = true;
                self.left_tapped = true;
            }
            Key::Right => {
                self.right = true;
                self.right_tapped = true;
            }
            Key::Up => {
                self.up = true;
                self.up_tapped = true;
            }
            Key::Space => self.resume = true,
            Key::Restart => self.restart = true,
            Key::Quit => self.quit = true,
        }
    }

    /// Held keys stop on release; latched presses survive until sampled
    pub fn release(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Up => self.up = false,
            Key::Space | Key::Restart | Key::Quit => {}
        }
    }

    /// Build the next tick's input and clear every latch
    pub fn sample(&mut self, viewport: Option<Viewport>) -> TickInput {
        let input = TickInput {
            rotate_left: self.left || self.left_tapped,
            rotate_right: self.right || self.right_tapped,
            thrust: self.up || self.up_tapped,
            resume: self.resume,
            restart: self.restart,
            quit: self.quit,
            viewport,
        };
        self.left_tapped = false;
        self.right_tapped = false;
        self.up_tapped = false;
        self.resume = false;
        self.restart = false;
        self.quit = false;
        input
    }
}
