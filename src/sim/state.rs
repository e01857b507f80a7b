//! Session state and core simulation types
//!
//! A `Session` is an explicit value owned by whatever embeds the loop; nothing
//! here assumes a single global instance.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::player::Player;
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frames advance physics, spawning and movement
    #[default]
    Running,
    /// A collision ended the run; waiting for a restart signal
    Frozen,
}

/// Obstacle families; cosmetic only, collision ignores the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Sits on the floor; jump over it
    Ground,
    /// Hovers above the floor; stay grounded under it
    Flying,
}

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub body: Entity,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            kind,
            body: Entity::new(x, y, width, height),
        }
    }
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ObstacleSpawned { kind: ObstacleKind },
    SpeedIncreased { speed: f64 },
    Landed,
    GameOver { frame: u64, obstacle: usize },
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Validated tuning, fixed for the session's lifetime; restored
    /// snapshots are validated again
    #[serde(deserialize_with = "GameConfig::deserialize_validated")]
    pub(crate) config: GameConfig,
    /// Player's resting y-coordinate (top edge)
    pub land: f64,
    pub player: Player,
    /// Current horizontal scroll rate
    pub speed: f64,
    /// Frames advanced while running; preserved across restarts
    pub frame_number: u64,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub phase: GamePhase,
    /// Pending events (not part of the snapshot)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Session {
    /// Create a running session; rejects malformed config up front
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let land = config.ground_y();
        let player_x = config.field.width * config.player.x_fraction;
        let player = Player::new(player_x, land, &config.player);

        log::info!(
            "Session created: field {}x{}, land at {}, speed {}",
            config.field.width,
            config.field.height,
            land,
            config.speed.default_speed
        );

        Ok(Self {
            land,
            player,
            speed: config.speed.default_speed,
            frame_number: 0,
            obstacles: Vec::new(),
            phase: GamePhase::Running,
            events: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_frozen(&self) -> bool {
        self.phase == GamePhase::Frozen
    }

    /// Enter the terminal state; further ticks are no-ops until restart
    pub fn freeze(&mut self) {
        self.phase = GamePhase::Frozen;
    }

    /// Clear obstacles, reset speed and resume running
    ///
    /// The frame counter and the player are left as they are.
    pub fn restart(&mut self) {
        self.obstacles.clear();
        self.speed = self.config.speed.default_speed;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Restarted);
        log::info!("Session restarted at frame {}", self.frame_number);
    }

    /// Game-over message and instruction while frozen
    pub fn game_over_text(&self) -> Option<(&str, &str)> {
        if self.is_frozen() {
            let messages = &self.config.messages;
            Some((messages.game_over.as_str(), messages.restart_instruction.as_str()))
        } else {
            None
        }
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
