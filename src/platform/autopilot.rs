//! Scripted input for demo and headless runs
//!
//! Holds ascend while the nearest ground obstacle ahead is inside the
//! look-ahead window. Flying obstacles are ducked by simply staying down.

use crate::sim::{ObstacleKind, Session, TickInput};

use super::input::InputSource;

/// Default distance (field units) at which the autopilot starts a jump
pub const DEFAULT_LOOK_AHEAD: f64 = 40.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Jump when the gap to a ground obstacle is below this
    pub look_ahead: f64,
    /// Press restart as soon as the session freezes
    pub auto_restart: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            look_ahead: DEFAULT_LOOK_AHEAD,
            auto_restart: true,
        }
    }
}

impl Autopilot {
    pub fn new(look_ahead: f64, auto_restart: bool) -> Self {
        Self {
            look_ahead,
            auto_restart,
        }
    }

    /// Gap to the closest ground obstacle still ahead of the player
    fn nearest_ground_gap(session: &Session) -> Option<f64> {
        let player_right = session.player.body.right();
        session
            .obstacles
            .iter()
            .filter(|o| o.kind == ObstacleKind::Ground && o.body.left() > player_right)
            .map(|o| o.body.left() - player_right)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, session: &Session) -> TickInput {
        if session.is_frozen() {
            return TickInput {
                ascend: false,
                restart: self.auto_restart,
            };
        }

        let ascend = Self::nearest_ground_gap(session).is_some_and(|gap| gap < self.look_ahead);
        TickInput {
            ascend,
            restart: false,
        }
    }
}
