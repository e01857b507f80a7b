//! Dino Run - A side-scrolling obstacle runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, session)
//! - `renderer`: Drawing boundary and vertex batching
//! - `platform`: Input flags, frame scheduling and the loop driver
//! - `config`: Data-driven tuning loaded from JSON

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;
pub use sim::{FrameOutcome, GamePhase, Session, TickInput, tick};

/// Default tuning constants
pub mod consts {
    /// Playing field dimensions
    pub const FIELD_WIDTH: f64 = 1000.0;
    pub const FIELD_HEIGHT: f64 = 600.0;
    /// Inset from the bottom edge for ground-level entities
    pub const MARGIN: f64 = 10.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f64 = 25.0;
    pub const PLAYER_HEIGHT: f64 = 40.0;
    /// Player starts a quarter of the way across the field
    pub const PLAYER_X_FRACTION: f64 = 0.25;
    pub const MAX_JUMP_HEIGHT: f64 = 100.0;
    /// Upward impulse re-armed on each qualifying frame
    pub const JUMP_IMPULSE: f64 = 7.0;
    /// Height budget consumed per re-arm
    pub const JUMP_STEP: f64 = 10.0;
    /// Per-frame decay of jump power and growth of fall speed
    pub const GRAVITY: f64 = 0.5;

    /// Scroll speed
    pub const DEFAULT_SPEED: f64 = 5.0;
    pub const SPEED_INCREMENT: f64 = 0.1;
    /// Frames between speed increments
    pub const SPEED_RAMP_RATE: u64 = 100;

    /// Ground obstacles
    pub const GROUND_SPAWN_RATE: u64 = 100;
    pub const GROUND_OBSTACLE_WIDTH: f64 = 25.0;
    pub const GROUND_OBSTACLE_HEIGHT: f64 = 40.0;

    /// Flying obstacles
    pub const FLYING_SPAWN_RATE: u64 = 130;
    pub const FLYING_OBSTACLE_WIDTH: f64 = 50.0;
    pub const FLYING_OBSTACLE_HEIGHT: f64 = 20.0;
    /// Flying obstacles sit this many of their own heights above the floor
    pub const FLYING_ALTITUDE_FACTOR: f64 = 4.0;

    pub const GAME_OVER_MESSAGE: &str = "GAME OVER";
    pub const RESTART_INSTRUCTION: &str = "Press space to play again";
}
