//! Error types
//!
//! The simulation itself is total; only configuration can be rejected.

use thiserror::Error;

/// Configuration errors, raised before a session is constructed
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A dimension, rate of change or impulse that must be strictly positive
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// A quantity that may be zero but never negative
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// A frame cadence of zero would divide by zero
    #[error("{field} must be at least one frame")]
    ZeroRate { field: &'static str },

    /// The field cannot hold the player above the margin
    #[error("field height {height} cannot fit player height {player_height} plus margin {margin}")]
    FieldTooSmall {
        height: f64,
        player_height: f64,
        margin: f64,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
}
