//! Per-frame simulation step
//!
//! Advances a session by exactly one frame. Order within a running frame:
//! counter, speed ramp, player physics, spawning, scrolling, pruning,
//! collision.
//!
//! The collision step is `any_collision` in its `first_collision(..).is_some()`
//! form, so the game-over event can name the obstacle that was hit.

use serde::{Deserialize, Serialize};

use super::collision::first_collision;
use super::player::{PlayerStep, advance};
use super::spawner::maybe_spawn;
use super::state::{GameEvent, Session};

/// Input flags for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Jump key held
    pub ascend: bool,
    /// Restart key pressed (only honored while frozen)
    pub restart: bool,
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Frame advanced; schedule the next one
    Continue,
    /// A collision ended the run on this frame
    GameOver,
    /// Frozen and no restart requested; nothing changed
    Frozen,
    /// A frozen session was restarted; the next tick advances again
    Restarted,
}

impl FrameOutcome {
    /// Whether the host should request another frame
    pub fn keeps_running(self) -> bool {
        matches!(self, FrameOutcome::Continue | FrameOutcome::Restarted)
    }
}

/// Advance the session by one frame
pub fn tick(session: &mut Session, input: &TickInput) -> FrameOutcome {
    if session.is_frozen() {
        if input.restart {
            session.restart();
            return FrameOutcome::Restarted;
        }
        return FrameOutcome::Frozen;
    }

    session.frame_number += 1;
    let frame = session.frame_number;

    let speed_config = &session.config.speed;
    if frame.is_multiple_of(speed_config.ramp_rate) {
        session.speed += speed_config.increment;
        log::debug!("Frame {}: speed -> {:.2}", frame, session.speed);
        session.events.push(GameEvent::SpeedIncreased {
            speed: session.speed,
        });
    }

    let config = &session.config;
    if advance(&mut session.player, session.land, input.ascend, &config.player) == PlayerStep::Landed {
        session.events.push(GameEvent::Landed);
    }

    let spawned = maybe_spawn(
        frame,
        &config.field,
        &config.ground_obstacle,
        &config.flying_obstacle,
    );
    for obstacle in spawned {
        log::debug!("Frame {}: spawned {:?} obstacle", frame, obstacle.kind);
        session.events.push(GameEvent::ObstacleSpawned {
            kind: obstacle.kind,
        });
        session.obstacles.push(obstacle);
    }

    let speed = session.speed;
    for obstacle in &mut session.obstacles {
        obstacle.body.pos.x -= speed;
    }

    // Scrolled fully past the left edge; geometry alone decides collisions
    session.obstacles.retain(|o| o.body.right() >= 0.0);

    if let Some(index) = first_collision(&session.player.body, &session.obstacles) {
        session.freeze();
        session.events.push(GameEvent::GameOver {
            frame,
            obstacle: index,
        });
        log::info!(
            "Game over at frame {} (speed {:.2}, {:?} obstacle)",
            frame,
            speed,
            session.obstacles[index].kind
        );
        return FrameOutcome::GameOver;
    }

    FrameOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::{GamePhase, Obstacle, ObstacleKind};

    const IDLE: TickInput = TickInput {
        ascend: false,
        restart: false,
    };

    const RESTART: TickInput = TickInput {
        ascend: false,
        restart: true,
    };

    fn new_session() -> Session {
        Session::new(GameConfig::default()).unwrap()
    }

    #[test]
    fn test_idle_until_first_spawn() {
        let mut session = new_session();

        for _ in 0..99 {
            assert_eq!(tick(&mut session, &IDLE), FrameOutcome::Continue);
        }
        assert_eq!(session.frame_number, 99);
        assert_eq!(session.speed, 5.0);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.player.y(), session.land);
        assert!(session.player.is_grounded(session.land));
        assert_eq!(session.player.gravity_speed, 0.0);
        assert_eq!(session.player.jump_height, 0.0);

        assert_eq!(tick(&mut session, &IDLE), FrameOutcome::Continue);
        assert_eq!(session.obstacles.len(), 1);
        let obstacle = &session.obstacles[0];
        assert_eq!(obstacle.kind, ObstacleKind::Ground);
        // Spawned at the right edge, then scrolled once at the ramped speed
        assert!((session.speed - 5.1).abs() < 1e-12);
        assert!((obstacle.body.left() - (990.0 - session.speed)).abs() < 1e-12);
    }

    #[test]
    fn test_speed_ramp_is_monotonic() {
        let mut session = new_session();
        let mut last = session.speed;
        let mut ramps = 0;
        while session.frame_number < 1000 {
            // Keep the track clear so the run never ends
            session.obstacles.clear();
            tick(&mut session, &IDLE);
            assert!(session.speed >= last);
            if session.speed > last {
                ramps += 1;
                assert!(session.frame_number.is_multiple_of(100));
            }
            last = session.speed;
        }
        assert_eq!(ramps, 10);
        assert!((session.speed - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_spawn_frames_in_session() {
        let mut session = new_session();
        let mut spawns = Vec::new();
        while session.frame_number < 520 {
            session.obstacles.clear();
            tick(&mut session, &IDLE);
            for event in session.drain_events() {
                if let GameEvent::ObstacleSpawned { kind } = event {
                    spawns.push((session.frame_number, kind));
                }
            }
        }
        assert_eq!(
            spawns,
            vec![
                (100, ObstacleKind::Ground),
                (130, ObstacleKind::Flying),
                (200, ObstacleKind::Ground),
                (260, ObstacleKind::Flying),
                (300, ObstacleKind::Ground),
                (390, ObstacleKind::Flying),
                (400, ObstacleKind::Ground),
                (500, ObstacleKind::Ground),
                (520, ObstacleKind::Flying),
            ]
        );
    }

    #[test]
    fn test_forced_collision_freezes() {
        let mut session = new_session();
        for _ in 0..10 {
            tick(&mut session, &IDLE);
        }

        // Place an obstacle so that after this frame's scroll it overlaps the player
        let player = session.player.body;
        session.obstacles.push(Obstacle::new(
            ObstacleKind::Ground,
            player.left() + session.speed,
            player.top(),
            25.0,
            40.0,
        ));
        assert_eq!(tick(&mut session, &IDLE), FrameOutcome::GameOver);
        assert_eq!(session.phase, GamePhase::Frozen);
        assert!(session.game_over_text().is_some());
        assert!(
            session
                .drain_events()
                .contains(&GameEvent::GameOver { frame: 11, obstacle: 0 })
        );

        // Frozen frames change nothing, even with ascend held
        let snapshot = serde_json::to_string(&session).unwrap();
        for _ in 0..50 {
            let held = TickInput {
                ascend: true,
                restart: false,
            };
            assert_eq!(tick(&mut session, &held), FrameOutcome::Frozen);
        }
        assert_eq!(serde_json::to_string(&session).unwrap(), snapshot);

        // Restart clears the track and resumes
        assert_eq!(tick(&mut session, &RESTART), FrameOutcome::Restarted);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.speed, 5.0);
        assert_eq!(session.frame_number, 11);
        assert_eq!(tick(&mut session, &IDLE), FrameOutcome::Continue);
        assert_eq!(session.frame_number, 12);
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut session = new_session();
        for _ in 0..150 {
            tick(&mut session, &IDLE);
        }
        let obstacles = session.obstacles.len();
        assert!(obstacles > 0);
        assert_eq!(tick(&mut session, &RESTART), FrameOutcome::Continue);
        assert_eq!(session.obstacles.len(), obstacles);
    }

    #[test]
    fn test_idle_run_ends_on_first_ground_obstacle() {
        let mut session = new_session();
        let mut outcome = FrameOutcome::Continue;
        while outcome == FrameOutcome::Continue {
            outcome = tick(&mut session, &IDLE);
            assert!(session.frame_number < 1000, "idle player should be hit");
        }
        assert_eq!(outcome, FrameOutcome::GameOver);
        // The first flying obstacle passes overhead; the first ground one hits
        let hit = session
            .drain_events()
            .into_iter()
            .find_map(|e| match e {
                GameEvent::GameOver { obstacle, .. } => Some(obstacle),
                _ => None,
            })
            .unwrap();
        assert_eq!(session.obstacles[hit].kind, ObstacleKind::Ground);
        assert!(session.frame_number > 200 && session.frame_number < 260);
    }

    #[test]
    fn test_offscreen_obstacles_pruned_in_order() {
        let mut session = new_session();
        session
            .obstacles
            .push(Obstacle::new(ObstacleKind::Flying, -48.0, 100.0, 50.0, 20.0));
        session
            .obstacles
            .push(Obstacle::new(ObstacleKind::Flying, 600.0, 100.0, 50.0, 20.0));
        session
            .obstacles
            .push(Obstacle::new(ObstacleKind::Ground, 800.0, 100.0, 25.0, 40.0));
        tick(&mut session, &IDLE);
        assert_eq!(session.obstacles.len(), 2);
        assert_eq!(session.obstacles[0].body.left(), 595.0);
        assert_eq!(session.obstacles[1].body.left(), 795.0);
    }

    #[test]
    fn test_jump_clears_ground_obstacle() {
        let mut config = GameConfig::default();
        config.flying_obstacle.spawn_rate = 10_000;
        let mut session = Session::new(config).unwrap();
        let mut outcome = FrameOutcome::Continue;
        while session.frame_number < 400 && outcome == FrameOutcome::Continue {
            // Jump when the nearest ground obstacle is close
            let player_right = session.player.body.right();
            let ascend = session.obstacles.iter().any(|o| {
                o.kind == ObstacleKind::Ground
                    && o.body.left() > player_right
                    && o.body.left() - player_right < 40.0
            });
            outcome = tick(
                &mut session,
                &TickInput {
                    ascend,
                    restart: false,
                },
            );
        }
        // The second ground obstacle (frame 200) is behind the player by frame 400
        assert_eq!(outcome, FrameOutcome::Continue);
    }
}
