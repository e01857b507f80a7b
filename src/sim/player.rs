//! Player jump/gravity physics
//!
//! The player is either powering upward (`jump_power > 0`) or falling
//! (`gravity_speed > 0`), never both. Holding ascend re-arms the impulse on
//! every frame while the height budget lasts, so a held key produces a
//! stepped multi-pulse ascent rather than a single parabola.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::config::PlayerConfig;

/// The controllable runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Entity,
    /// Downward velocity accumulated while falling
    pub gravity_speed: f64,
    /// Remaining upward impulse for the current jump
    pub jump_power: f64,
    /// Upward displacement already granted in the current ascent
    pub jump_height: f64,
}

/// What the physics step did this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStep {
    /// Resting on the ground
    Grounded,
    /// Moved up under jump power
    Ascending,
    /// Moved down under gravity
    Falling,
    /// Touched down this frame after being airborne
    Landed,
}

impl Player {
    pub fn new(x: f64, ground_y: f64, config: &PlayerConfig) -> Self {
        Self {
            body: Entity::new(x, ground_y, config.width, config.height),
            gravity_speed: 0.0,
            jump_power: 0.0,
            jump_height: 0.0,
        }
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.body.pos.y
    }

    pub fn is_grounded(&self, ground_y: f64) -> bool {
        self.y() >= ground_y && self.jump_power <= 0.0
    }

    /// Reset fall speed and the height budget
    fn land(&mut self) {
        self.gravity_speed = 0.0;
        self.jump_height = 0.0;
    }
}

/// Advance the player's vertical motion by one frame
pub fn advance(player: &mut Player, ground_y: f64, ascend: bool, config: &PlayerConfig) -> PlayerStep {
    let was_airborne = player.y() < ground_y || player.gravity_speed > 0.0;

    if ascend
        && player.gravity_speed == 0.0
        && player.jump_height + config.jump_step <= config.max_jump_height
    {
        player.jump_power = config.jump_impulse;
        player.jump_height += config.jump_step;
    }

    if player.jump_power > 0.0 {
        player.body.pos.y -= player.jump_power;
        player.jump_power = (player.jump_power - config.gravity).max(0.0);
        player.gravity_speed = 0.0;
        return PlayerStep::Ascending;
    }

    if player.y() <= ground_y {
        player.gravity_speed += config.gravity;
        let next_y = player.y() + player.gravity_speed;
        if next_y > ground_y {
            player.body.pos.y = ground_y;
            player.land();
            if was_airborne {
                PlayerStep::Landed
            } else {
                PlayerStep::Grounded
            }
        } else {
            player.body.pos.y = next_y;
            PlayerStep::Falling
        }
    } else {
        // Below the floor; ground is a hard limit
        player.body.pos.y = ground_y;
        player.land();
        PlayerStep::Landed
    }
}
