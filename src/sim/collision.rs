//! Axis-aligned bounding box collision
//!
//! Touching edges count as a hit: only strict separation on some axis
//! rules a collision out.

use super::entity::Entity;
use super::state::Obstacle;

/// Check whether two rectangles overlap or touch
#[inline]
pub fn is_colliding(a: &Entity, b: &Entity) -> bool {
    let separated = a.left() > b.right()
        || a.right() < b.left()
        || a.top() > b.bottom()
        || a.bottom() < b.top();
    !separated
}

/// Index of the first obstacle (in insertion order) touching `player`
pub fn first_collision(player: &Entity, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles.iter().position(|o| is_colliding(player, &o.body))
}

/// True if any obstacle touches `player`; stops at the first hit
pub fn any_collision(player: &Entity, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| is_colliding(player, &o.body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObstacleKind;
    use proptest::prelude::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Entity {
        Entity::new(x, y, w, h)
    }

    #[test]
    fn test_identical_bounds_collide() {
        let a = rect(250.0, 550.0, 25.0, 40.0);
        assert!(is_colliding(&a, &a));
    }

    #[test]
    fn test_horizontal_gap_never_collides() {
        let player = rect(0.0, 0.0, 25.0, 40.0);
        for y in [-100.0, 0.0, 10.0, 550.0] {
            let obstacle = rect(100.0, y, 25.0, 40.0);
            assert!(!is_colliding(&player, &obstacle));
        }
    }

    #[test]
    fn test_touching_edges_collide() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(is_colliding(&a, &rect(10.0, 0.0, 10.0, 10.0)));
        assert!(is_colliding(&a, &rect(0.0, 10.0, 10.0, 10.0)));
        assert!(is_colliding(&a, &rect(10.0, 10.0, 10.0, 10.0)));
        assert!(!is_colliding(&a, &rect(10.001, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_flying_obstacle_clears_grounded_player() {
        // Flying obstacle spans y 510..530, grounded player 550..590
        let player = rect(250.0, 550.0, 25.0, 40.0);
        let flying = rect(240.0, 510.0, 50.0, 20.0);
        assert!(!is_colliding(&player, &flying));

        let jumping = rect(250.0, 520.0, 25.0, 40.0);
        assert!(is_colliding(&jumping, &flying));
    }

    #[test]
    fn test_any_and_first_collision() {
        let player = rect(250.0, 550.0, 25.0, 40.0);
        let obstacles = vec![
            Obstacle::new(ObstacleKind::Ground, 900.0, 550.0, 25.0, 40.0),
            Obstacle::new(ObstacleKind::Flying, 240.0, 510.0, 50.0, 20.0),
            Obstacle::new(ObstacleKind::Ground, 260.0, 550.0, 25.0, 40.0),
        ];
        assert!(any_collision(&player, &obstacles));
        assert_eq!(first_collision(&player, &obstacles), Some(2));
        assert!(!any_collision(&player, &obstacles[..2]));
        assert_eq!(first_collision(&player, &[]), None);
    }

    fn arb_rect() -> impl Strategy<Value = Entity> {
        (-500.0..500.0f64, -500.0..500.0f64, 0.1..200.0f64, 0.1..200.0f64)
            .prop_map(|(x, y, w, h)| rect(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(is_colliding(&a, &b), is_colliding(&b, &a));
        }

        #[test]
        fn prop_self_collides(a in arb_rect()) {
            prop_assert!(is_colliding(&a, &a));
        }

        #[test]
        fn prop_disjoint_x_never_collides(a in arb_rect(), b in arb_rect(), gap in 0.001..100.0f64) {
            let mut b = b;
            b.pos.x = a.right() + gap;
            prop_assert!(!is_colliding(&a, &b));
        }
    }
}
