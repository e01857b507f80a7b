//! Keyboard state to tick input
//!
//! The host forwards raw key names (`KeyboardEvent.key` on the web). Only two
//! flags reach the simulation: ascend (held) and restart (one-shot).

use crate::sim::{Session, TickInput};

/// Produces the input for the next frame
pub trait InputSource {
    fn poll(&mut self, session: &Session) -> TickInput;
}

/// Key names the game listens to
pub mod keys {
    pub const ARROW_UP: &str = "ArrowUp";
    pub const SPACE: &str = " ";
}

/// Held keys plus a latched restart press
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    arrow_up: bool,
    space: bool,
    /// Set on a space press, cleared when polled
    restart_pressed: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; returns true if the key is one the game uses
    pub fn key_down(&mut self, key: &str) -> bool {
        match key {
            keys::ARROW_UP => {
                self.arrow_up = true;
                true
            }
            keys::SPACE => {
                // Auto-repeat keydowns while held don't count as new presses
                if !self.space {
                    self.restart_pressed = true;
                }
                self.space = true;
                true
            }
            _ => false,
        }
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        match key {
            keys::ARROW_UP => {
                self.arrow_up = false;
                true
            }
            keys::SPACE => {
                self.space = false;
                true
            }
            _ => false,
        }
    }

    /// Whether a jump key is currently held
    pub fn ascend_held(&self) -> bool {
        self.arrow_up || self.space
    }

    /// Current flags; the restart latch is consumed
    pub fn take_input(&mut self) -> TickInput {
        TickInput {
            ascend: self.ascend_held(),
            restart: std::mem::take(&mut self.restart_pressed),
        }
    }
}

impl InputSource for KeyState {
    fn poll(&mut self, _session: &Session) -> TickInput {
        self.take_input()
    }
}
