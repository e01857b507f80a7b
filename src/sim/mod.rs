//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - One tick per displayed frame, no wall-clock time
//! - No randomness: spawning is a frame-modulus cadence
//! - Stable iteration order (obstacles in spawn order)

pub mod collision;
pub mod entity;
pub mod player;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{any_collision, first_collision, is_colliding};
pub use entity::Entity;
pub use player::{Player, PlayerStep, advance};
pub use spawner::maybe_spawn;
pub use state::{GameEvent, GamePhase, Obstacle, ObstacleKind, Session};
pub use tick::{FrameOutcome, TickInput, tick};
