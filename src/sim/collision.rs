//! Collision detection for the puck
//!
//! Runs after integration and wall clamping. Every collider is an AABB, so
//! this is a handful of overlap tests per tick. Resolution (stop, score) is
//! left to the tick; this module only reports what the puck touched.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::puck::Puck;
use super::rect::Rect;
use super::state::Obstacle;

/// Something the puck touched this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Moving puck ran into the obstacle with this id
    Obstacle { id: u32 },
    /// Puck box overlaps the goal net
    Goal,
}

/// Collect this tick's collisions, obstacles first, then the goal.
///
/// `prev_pos` is the puck center before this tick's integration. It lets a
/// puck resting inside an obstacle be shot back out: a hit needs the puck to
/// have entered the obstacle this tick or to be heading toward its center.
pub fn detect(puck: &Puck, prev_pos: Vec2, obstacles: &[Obstacle], goal: &Rect) -> Vec<Collision> {
    let mut hits = Vec::new();
    let bounds = puck.bounds();

    if puck.is_moving() {
        let prev_bounds = Rect::from_center_half(prev_pos, puck.half_size);
        let hit = obstacles.iter().find(|obstacle| {
            if !bounds.intersects(&obstacle.bounds) {
                return false;
            }
            let entered = !prev_bounds.intersects(&obstacle.bounds);
            let toward = puck.vel.dot(obstacle.bounds.center() - puck.pos) > 0.0;
            entered || toward
        });
        if let Some(obstacle) = hit {
            hits.push(Collision::Obstacle { id: obstacle.id });
        }
    }

    // No direction check: any overlap counts, including a puck at rest
    if bounds.intersects(goal) {
        hits.push(Collision::Goal);
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle(id: u32, x: f32, y: f32) -> Obstacle {
        Obstacle {
            id,
            bounds: Rect::from_min_size(Vec2::new(x, y), Vec2::splat(60.0)),
        }
    }

    fn goal() -> Rect {
        Rect::from_min_size(Vec2::new(860.0, 20.0), Vec2::new(120.0, 110.0))
    }

    #[test]
    fn test_moving_puck_hits_obstacle() {
        let obstacles = [obstacle(1, 400.0, 200.0)];
        let mut puck = Puck::new(Vec2::new(390.0, 230.0), Vec2::splat(16.0), 0.99);
        puck.vel = Vec2::new(400.0, 0.0);

        let hits = detect(&puck, Vec2::new(380.0, 230.0), &obstacles, &goal());
        assert_eq!(hits, vec![Collision::Obstacle { id: 1 }]);
    }

    #[test]
    fn test_resting_puck_ignores_obstacle() {
        let obstacles = [obstacle(1, 400.0, 200.0)];
        let puck = Puck::new(Vec2::new(390.0, 230.0), Vec2::splat(16.0), 0.99);

        let hits = detect(&puck, puck.pos, &obstacles, &goal());
        assert!(hits.is_empty());
    }

    #[test]
    fn test_puck_can_leave_obstacle_it_rests_in() {
        let obstacles = [obstacle(1, 400.0, 200.0)];
        let mut puck = Puck::new(Vec2::new(390.0, 230.0), Vec2::splat(16.0), 0.99);
        // Heading away from the obstacle center (430, 230)
        puck.vel = Vec2::new(-400.0, 0.0);

        let hits = detect(&puck, Vec2::new(396.0, 230.0), &obstacles, &goal());
        assert!(hits.is_empty());
    }

    #[test]
    fn test_only_first_obstacle_reports() {
        let obstacles = [obstacle(1, 400.0, 200.0), obstacle(2, 380.0, 200.0)];
        let mut puck = Puck::new(Vec2::new(400.0, 230.0), Vec2::splat(16.0), 0.99);
        puck.vel = Vec2::new(400.0, 0.0);

        let hits = detect(&puck, Vec2::new(300.0, 230.0), &obstacles, &goal());
        assert_eq!(hits, vec![Collision::Obstacle { id: 1 }]);
    }

    #[test]
    fn test_goal_overlap_without_motion() {
        let puck = Puck::new(Vec2::new(900.0, 60.0), Vec2::splat(16.0), 0.99);
        let hits = detect(&puck, puck.pos, &[], &goal());
        assert_eq!(hits, vec![Collision::Goal]);
    }

    #[test]
    fn test_obstacle_reported_before_goal() {
        let obstacles = [obstacle(7, 840.0, 40.0)];
        let mut puck = Puck::new(Vec2::new(865.0, 60.0), Vec2::splat(16.0), 0.99);
        puck.vel = Vec2::new(400.0, 0.0);

        let hits = detect(&puck, Vec2::new(800.0, 60.0), &obstacles, &goal());
        assert_eq!(hits, vec![Collision::Obstacle { id: 7 }, Collision::Goal]);
    }
}
