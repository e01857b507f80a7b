//! Periodic obstacle generation
//!
//! Two independent cadences are checked every frame. Frames divisible by
//! both rates emit a ground and a flying obstacle at the same x.

use super::state::{Obstacle, ObstacleKind};
use crate::config::{FieldConfig, ObstacleConfig};

/// Build an obstacle of `kind` at the right edge of the field
pub fn spawn(kind: ObstacleKind, field: &FieldConfig, shape: &ObstacleConfig) -> Obstacle {
    let x = field.width - field.margin;
    let y = field.height - field.margin - shape.height * shape.altitude_factor;
    Obstacle::new(kind, x, y, shape.width, shape.height)
}

/// Emit the obstacles due on `frame`, ground before flying
///
/// Frame 0 is divisible by every rate, so calling this with 0 emits both
/// kinds. The session increments its counter before spawning and never
/// checks frame 0.
pub fn maybe_spawn(
    frame: u64,
    field: &FieldConfig,
    ground: &ObstacleConfig,
    flying: &ObstacleConfig,
) -> Vec<Obstacle> {
    let mut spawned = Vec::new();
    if frame.is_multiple_of(ground.spawn_rate) {
        spawned.push(spawn(ObstacleKind::Ground, field, ground));
    }
    if frame.is_multiple_of(flying.spawn_rate) {
        spawned.push(spawn(ObstacleKind::Flying, field, flying));
    }
    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn spawn_at(frame: u64) -> Vec<Obstacle> {
        let config = GameConfig::default();
        maybe_spawn(
            frame,
            &config.field,
            &config.ground_obstacle,
            &config.flying_obstacle,
        )
    }

    #[test]
    fn test_ground_cadence() {
        for frame in [100, 200, 300, 400] {
            let spawned = spawn_at(frame);
            assert_eq!(spawned.len(), 1, "frame {frame}");
            let obstacle = &spawned[0];
            assert_eq!(obstacle.kind, ObstacleKind::Ground);
            assert_eq!(obstacle.body.left(), 990.0);
            assert_eq!(obstacle.body.top(), 550.0);
            assert_eq!(obstacle.body.width(), 25.0);
            assert_eq!(obstacle.body.height(), 40.0);
            // Sits on the floor
            assert_eq!(obstacle.body.bottom(), 590.0);
        }
    }

    #[test]
    fn test_flying_cadence() {
        for frame in [130, 260, 390, 520] {
            let spawned = spawn_at(frame);
            assert_eq!(spawned.len(), 1, "frame {frame}");
            let obstacle = &spawned[0];
            assert_eq!(obstacle.kind, ObstacleKind::Flying);
            assert_eq!(obstacle.body.left(), 990.0);
            assert_eq!(obstacle.body.top(), 600.0 - 10.0 - 80.0);
            assert_eq!(obstacle.body.width(), 50.0);
            assert_eq!(obstacle.body.height(), 20.0);
        }
    }

    #[test]
    fn test_quiet_frames() {
        for frame in (1..100).chain(101..130).chain(131..200) {
            assert!(spawn_at(frame).is_empty(), "frame {frame}");
        }
    }

    #[test]
    fn test_coinciding_cadences_spawn_both() {
        // lcm(100, 130)
        let spawned = spawn_at(1300);
        assert_eq!(spawned.len(), 2);
        assert_eq!(spawned[0].kind, ObstacleKind::Ground);
        assert_eq!(spawned[1].kind, ObstacleKind::Flying);
        assert_eq!(spawned[0].body.left(), spawned[1].body.left());
    }

    #[test]
    fn test_frame_zero_spawns_both() {
        assert_eq!(spawn_at(0).len(), 2);
    }
}
