//! Cop steering: greedy straight-line pursuit with single-obstacle avoidance.
//!
//! This is deliberately not pathfinding. Only the first wall that blocks the
//! straight step is considered, and the perpendicular escape step is checked
//! against that wall alone, so a cop can still clip a second wall near the
//! escape vector and can be pinned by concave geometry.

use slotmap::SlotMap;

use crate::geom::{Vec2, circle_overlaps_rect};
use crate::state::{Cop, Wall};
use crate::types::{SCREEN_HEIGHT, SCREEN_WIDTH, WallId};

/// Advance `cop` one step toward `target`, dodging around the first wall in
/// insertion order that blocks the straight step.
///
/// When the cop already sits exactly on the target the pursuit direction is the
/// zero vector; the cop holds position for the step and keeps its previous
/// facing instead of propagating a degenerate angle.
pub fn pursuit_step(cop: &mut Cop, target: Vec2, walls: &SlotMap<WallId, Wall>) {
    let direction = (target - cop.position).normalize();
    if direction == Vec2::ZERO {
        return;
    }

    let mut next = cop.position + direction * cop.speed;

    for wall in walls.values() {
        if !circle_overlaps_rect(next, cop.radius, wall.rect) {
            continue;
        }
        let perp = direction.perp();
        let side_a = cop.position + perp * cop.speed;
        let side_b = cop.position - perp * cop.speed;
        next = if !circle_overlaps_rect(side_a, cop.radius, wall.rect) {
            side_a
        } else if !circle_overlaps_rect(side_b, cop.radius, wall.rect) {
            side_b
        } else {
            cop.position
        };
        break;
    }

    next.x = next.x.clamp(cop.radius, SCREEN_WIDTH - cop.radius);
    next.y = next.y.clamp(cop.radius, SCREEN_HEIGHT - cop.radius);

    cop.position = next;
    cop.rotation_degrees = direction.angle_degrees();
}

#[cfg(test)]
mod tests {
    use crate::geom::Rect;
    use crate::types::COP_SPEED;

    use super::*;

    fn no_walls() -> SlotMap<WallId, Wall> {
        SlotMap::with_key()
    }

    fn one_wall(rect: Rect) -> SlotMap<WallId, Wall> {
        let mut walls = SlotMap::with_key();
        walls.insert(Wall { rect });
        walls
    }

    #[test]
    fn open_field_step_moves_exactly_speed_toward_target() {
        let mut cop = Cop::new(Vec2::new(100.0, 100.0));
        let target = Vec2::new(400.0, 100.0);
        pursuit_step(&mut cop, target, &no_walls());
        assert!((cop.position.x - (100.0 + COP_SPEED)).abs() < 1e-4);
        assert!((cop.position.y - 100.0).abs() < 1e-4);
        assert_eq!(cop.rotation_degrees, 0.0);
    }

    #[test]
    fn each_open_field_step_closes_the_gap_by_speed() {
        let mut cop = Cop::new(Vec2::new(100.0, 100.0));
        let target = Vec2::new(400.0, 300.0);
        let mut distance = cop.position.distance(target);
        for _ in 0..20 {
            pursuit_step(&mut cop, target, &no_walls());
            let next_distance = cop.position.distance(target);
            assert!((distance - next_distance - COP_SPEED).abs() < 1e-3);
            distance = next_distance;
        }
    }

    #[test]
    fn blocking_wall_diverts_to_a_perpendicular_step() {
        // Wall directly to the right of the cop, target beyond it.
        let wall = Rect::new(130.0, 50.0, 20.0, 100.0);
        let mut cop = Cop::new(Vec2::new(108.0, 100.0));
        let before = cop.position;
        pursuit_step(&mut cop, Vec2::new(400.0, 100.0), &one_wall(wall));
        assert!(!circle_overlaps_rect(cop.position, cop.radius, wall));
        // The dodge is perpendicular: x unchanged, y shifted by one step.
        assert_eq!(cop.position.x, before.x);
        assert!((cop.position.y - before.y).abs() > 0.0);
    }

    #[test]
    fn fully_blocked_cop_holds_position() {
        // Close enough to a long wall that both perpendicular steps still
        // overlap it, so the only resolution is to stand still.
        let wall = Rect::new(100.0, 110.0, 200.0, 20.0);
        let mut cop = Cop::new(Vec2::new(200.0, 93.0));
        pursuit_step(&mut cop, Vec2::new(200.0, 400.0), &one_wall(wall));
        assert_eq!(cop.position, Vec2::new(200.0, 93.0));
    }

    #[test]
    fn cop_on_target_holds_position_and_facing() {
        let mut cop = Cop::new(Vec2::new(250.0, 250.0));
        cop.rotation_degrees = 45.0;
        pursuit_step(&mut cop, Vec2::new(250.0, 250.0), &no_walls());
        assert_eq!(cop.position, Vec2::new(250.0, 250.0));
        assert_eq!(cop.rotation_degrees, 45.0);
    }

    #[test]
    fn step_is_clamped_to_screen_bounds() {
        let mut cop = Cop::new(Vec2::new(21.0, 21.0));
        pursuit_step(&mut cop, Vec2::new(-100.0, -100.0), &no_walls());
        assert_eq!(cop.position, Vec2::new(cop.radius, cop.radius));
    }
}
