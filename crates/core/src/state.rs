//! Entities and the world aggregate that owns them.
//!
//! Every entity is owned exactly once: walls and coins in keyed slot maps,
//! level-gated entities (backup cop, slowing zone, door) in `Option` slots that
//! level transitions replace wholesale.

use slotmap::SlotMap;

use crate::geom::{Rect, Vec2};
use crate::types::*;

#[derive(Clone, Copy, Debug)]
pub struct Wall {
    pub rect: Rect,
}

#[derive(Clone, Copy, Debug)]
pub struct Door {
    pub rect: Rect,
    pub is_open: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct Coin {
    pub id: CoinId,
    pub position: Vec2,
    pub collected: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct SlowingZone {
    pub rect: Rect,
    pub multiplier: f32,
}

impl SlowingZone {
    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains_point(point)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Robber {
    pub position: Vec2,
    pub radius: f32,
    /// Effective speed for the current frame; the game recomputes it from
    /// slowing-zone membership after each move.
    pub speed: f32,
}

impl Robber {
    pub fn new(position: Vec2) -> Self {
        Self { position, radius: ROBBER_RADIUS, speed: ROBBER_BASE_SPEED }
    }

    /// Axis-independent held-direction movement. Each axis steps by the
    /// effective speed only if the robber's bounding circle would stay on
    /// screen, so diagonals work and a blocked axis never cancels the other.
    pub fn apply_input(&mut self, controls: Controls) {
        if controls.up && self.position.y - self.radius - self.speed >= 0.0 {
            self.position.y -= self.speed;
        }
        if controls.down && self.position.y + self.radius + self.speed <= SCREEN_HEIGHT {
            self.position.y += self.speed;
        }
        if controls.left && self.position.x - self.radius - self.speed >= 0.0 {
            self.position.x -= self.speed;
        }
        if controls.right && self.position.x + self.radius + self.speed <= SCREEN_WIDTH {
            self.position.x += self.speed;
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Cop {
    pub position: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Facing angle in degrees, for the render-side direction indicator only.
    pub rotation_degrees: f32,
}

impl Cop {
    pub fn new(position: Vec2) -> Self {
        Self { position, radius: COP_RADIUS, speed: COP_SPEED, rotation_degrees: 0.0 }
    }
}

/// All live entities. Exactly one robber and one primary cop always exist;
/// the optional slots are populated by level transitions.
pub struct World {
    pub walls: SlotMap<WallId, Wall>,
    pub coins: SlotMap<CoinId, Coin>,
    pub robber: Robber,
    pub cop: Cop,
    pub backup_cop: Option<Cop>,
    pub slowing_zone: Option<SlowingZone>,
    pub door: Option<Door>,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn in_bounds(robber: &Robber) -> bool {
        robber.position.x - robber.radius >= 0.0
            && robber.position.x + robber.radius <= SCREEN_WIDTH
            && robber.position.y - robber.radius >= 0.0
            && robber.position.y + robber.radius <= SCREEN_HEIGHT
    }

    #[test]
    fn diagonal_input_moves_both_axes() {
        let mut robber = Robber::new(Vec2::new(400.0, 300.0));
        robber.apply_input(Controls { up: true, right: true, ..Controls::default() });
        assert_eq!(robber.position, Vec2::new(404.5, 295.5));
    }

    #[test]
    fn blocked_axis_does_not_cancel_the_other() {
        let mut robber = Robber::new(Vec2::new(400.0, ROBBER_RADIUS));
        robber.apply_input(Controls { up: true, left: true, ..Controls::default() });
        assert_eq!(robber.position, Vec2::new(395.5, ROBBER_RADIUS));
    }

    #[test]
    fn slowing_zone_contains_is_point_based() {
        let zone = SlowingZone { rect: Rect::new(0.0, 0.0, 400.0, 300.0), multiplier: SLOW_MULTIPLIER };
        assert!(zone.contains(Vec2::new(400.0, 300.0)));
        assert!(!zone.contains(Vec2::new(401.0, 300.0)));
    }

    proptest! {
        #[test]
        fn movement_never_leaves_screen_bounds(
            start_x in ROBBER_RADIUS..=(SCREEN_WIDTH - ROBBER_RADIUS),
            start_y in ROBBER_RADIUS..=(SCREEN_HEIGHT - ROBBER_RADIUS),
            inputs in prop::collection::vec((any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()), 0..200),
        ) {
            let mut robber = Robber::new(Vec2::new(start_x, start_y));
            for (up, down, left, right) in inputs {
                robber.apply_input(Controls { up, down, left, right, restart: false });
                prop_assert!(in_bounds(&robber));
            }
        }
    }
}
