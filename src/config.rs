//! Game tuning and configuration
//!
//! Loaded once at startup (JSON, LocalStorage on web) and validated before a
//! session is built. Every section falls back to the defaults in `consts`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Playing field dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f64,
    pub height: f64,
    /// Inset from the bottom edge used to position ground-level entities
    pub margin: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            margin: MARGIN,
        }
    }
}

/// Player size and jump physics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: f64,
    pub height: f64,
    /// Horizontal start position as a fraction of the field width
    pub x_fraction: f64,
    pub max_jump_height: f64,
    pub jump_impulse: f64,
    pub jump_step: f64,
    pub gravity: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            x_fraction: PLAYER_X_FRACTION,
            max_jump_height: MAX_JUMP_HEIGHT,
            jump_impulse: JUMP_IMPULSE,
            jump_step: JUMP_STEP,
            gravity: GRAVITY,
        }
    }
}

/// Shape and cadence of one obstacle family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleConfig {
    pub width: f64,
    pub height: f64,
    /// Spawn every `spawn_rate` frames
    pub spawn_rate: u64,
    /// Bottom edge sits `height * (altitude_factor - 1)` above the floor
    pub altitude_factor: f64,
}

impl ObstacleConfig {
    pub fn ground() -> Self {
        Self {
            width: GROUND_OBSTACLE_WIDTH,
            height: GROUND_OBSTACLE_HEIGHT,
            spawn_rate: GROUND_SPAWN_RATE,
            altitude_factor: 1.0,
        }
    }

    pub fn flying() -> Self {
        Self {
            width: FLYING_OBSTACLE_WIDTH,
            height: FLYING_OBSTACLE_HEIGHT,
            spawn_rate: FLYING_SPAWN_RATE,
            altitude_factor: FLYING_ALTITUDE_FACTOR,
        }
    }

    fn validate(&self, names: &ObstacleFieldNames) -> Result<(), ConfigError> {
        positive(names.width, self.width)?;
        positive(names.height, self.height)?;
        positive(names.altitude_factor, self.altitude_factor)?;
        if self.spawn_rate == 0 {
            return Err(ConfigError::ZeroRate {
                field: names.spawn_rate,
            });
        }
        Ok(())
    }
}

/// Partial obstacle section as written in JSON; absent keys keep the base
#[derive(Debug, Deserialize)]
struct ObstacleOverrides {
    width: Option<f64>,
    height: Option<f64>,
    spawn_rate: Option<u64>,
    altitude_factor: Option<f64>,
}

impl ObstacleOverrides {
    fn apply(self, base: ObstacleConfig) -> ObstacleConfig {
        ObstacleConfig {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            spawn_rate: self.spawn_rate.unwrap_or(base.spawn_rate),
            altitude_factor: self.altitude_factor.unwrap_or(base.altitude_factor),
        }
    }
}

fn ground_obstacle<'de, D: Deserializer<'de>>(d: D) -> Result<ObstacleConfig, D::Error> {
    Ok(ObstacleOverrides::deserialize(d)?.apply(ObstacleConfig::ground()))
}

fn flying_obstacle<'de, D: Deserializer<'de>>(d: D) -> Result<ObstacleConfig, D::Error> {
    Ok(ObstacleOverrides::deserialize(d)?.apply(ObstacleConfig::flying()))
}

/// Dotted names reported by validation errors
struct ObstacleFieldNames {
    width: &'static str,
    height: &'static str,
    spawn_rate: &'static str,
    altitude_factor: &'static str,
}

const GROUND_OBSTACLE_FIELDS: ObstacleFieldNames = ObstacleFieldNames {
    width: "ground_obstacle.width",
    height: "ground_obstacle.height",
    spawn_rate: "ground_obstacle.spawn_rate",
    altitude_factor: "ground_obstacle.altitude_factor",
};

const FLYING_OBSTACLE_FIELDS: ObstacleFieldNames = ObstacleFieldNames {
    width: "flying_obstacle.width",
    height: "flying_obstacle.height",
    spawn_rate: "flying_obstacle.spawn_rate",
    altitude_factor: "flying_obstacle.altitude_factor",
};

/// Scroll speed and its linear ramp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedConfig {
    pub default_speed: f64,
    pub increment: f64,
    /// Frames between increments
    pub ramp_rate: u64,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            default_speed: DEFAULT_SPEED,
            increment: SPEED_INCREMENT,
            ramp_rate: SPEED_RAMP_RATE,
        }
    }
}

/// Text shown on game over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    pub game_over: String,
    pub restart_instruction: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            game_over: GAME_OVER_MESSAGE.to_string(),
            restart_instruction: RESTART_INSTRUCTION.to_string(),
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub player: PlayerConfig,
    #[serde(deserialize_with = "ground_obstacle")]
    pub ground_obstacle: ObstacleConfig,
    #[serde(deserialize_with = "flying_obstacle")]
    pub flying_obstacle: ObstacleConfig,
    pub speed: SpeedConfig,
    pub messages: MessageConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            player: PlayerConfig::default(),
            ground_obstacle: ObstacleConfig::ground(),
            flying_obstacle: ObstacleConfig::flying(),
            speed: SpeedConfig::default(),
            messages: MessageConfig::default(),
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_nan() || value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_nan() || value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

impl GameConfig {
    /// Check every precondition the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let field = &self.field;
        positive("field.width", field.width)?;
        positive("field.height", field.height)?;
        non_negative("field.margin", field.margin)?;

        let player = &self.player;
        positive("player.width", player.width)?;
        positive("player.height", player.height)?;
        non_negative("player.x_fraction", player.x_fraction)?;
        non_negative("player.max_jump_height", player.max_jump_height)?;
        positive("player.jump_impulse", player.jump_impulse)?;
        positive("player.jump_step", player.jump_step)?;
        positive("player.gravity", player.gravity)?;

        if player.height + field.margin > field.height {
            return Err(ConfigError::FieldTooSmall {
                height: field.height,
                player_height: player.height,
                margin: field.margin,
            });
        }

        self.ground_obstacle.validate(&GROUND_OBSTACLE_FIELDS)?;
        self.flying_obstacle.validate(&FLYING_OBSTACLE_FIELDS)?;

        positive("speed.default_speed", self.speed.default_speed)?;
        non_negative("speed.increment", self.speed.increment)?;
        if self.speed.ramp_rate == 0 {
            return Err(ConfigError::ZeroRate {
                field: "speed.ramp_rate",
            });
        }

        Ok(())
    }

    /// Parse and validate a JSON config; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resting y-coordinate of the player's top edge
    pub fn ground_y(&self) -> f64 {
        self.field.height - self.player.height - self.field.margin
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "dino_run_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Deserialize and validate, for state restored from a snapshot
    pub(crate) fn deserialize_validated<'de, D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let config = Self::deserialize(d)?;
        config.validate().map_err(serde::de::Error::custom)?;
        Ok(config)
    }

    /// Load config from a JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
