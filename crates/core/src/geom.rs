//! 2D vector arithmetic and the collision predicates the simulation is built on.
//!
//! Everything here is stateless. The overlap predicates are boundary-inclusive:
//! two circles exactly tangent count as overlapping.

use std::ops::{Add, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction. A zero-length input yields the zero
    /// vector rather than NaN; callers must tolerate a zero steering vector.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length == 0.0 { Self::ZERO } else { self * (1.0 / length) }
    }

    /// Rotation by 90 degrees counter-clockwise.
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Facing angle in degrees, measured from the positive x axis.
    pub fn angle_degrees(self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }

    pub fn from_angle_degrees(degrees: f32) -> Self {
        let radians = degrees.to_radians();
        Self::new(radians.cos(), radians.sin())
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Axis-aligned rectangle, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains_point(self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.x + self.w && point.y >= self.y && point.y <= self.y + self.h
    }

    /// Closest point of the rectangle to `point` (the point itself when inside).
    pub fn nearest_point(self, point: Vec2) -> Vec2 {
        Vec2::new(point.x.clamp(self.x, self.x + self.w), point.y.clamp(self.y, self.y + self.h))
    }
}

pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) <= radius_a + radius_b
}

pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: Rect) -> bool {
    center.distance(rect.nearest_point(center)) <= radius
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn normalize_of_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn perp_rotates_counter_clockwise() {
        assert_eq!(Vec2::new(1.0, 0.0).perp(), Vec2::new(0.0, 1.0));
        assert_eq!(Vec2::new(0.0, 1.0).perp(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn tangent_circles_count_as_overlapping() {
        // Robber radius 20 and coin radius 10 exactly tangent at distance 30.
        let robber = Vec2::new(100.0, 100.0);
        let coin = Vec2::new(130.0, 100.0);
        assert!(circles_overlap(robber, 20.0, coin, 10.0));
        assert!(!circles_overlap(robber, 20.0, Vec2::new(130.1, 100.0), 10.0));
    }

    #[test]
    fn circle_rect_overlap_uses_nearest_point() {
        let rect = Rect::new(100.0, 100.0, 50.0, 20.0);
        // Center left of the rect, tangent to its left edge.
        assert!(circle_overlaps_rect(Vec2::new(90.0, 110.0), 10.0, rect));
        assert!(!circle_overlaps_rect(Vec2::new(89.0, 110.0), 10.0, rect));
        // Center inside the rect always overlaps.
        assert!(circle_overlaps_rect(Vec2::new(120.0, 110.0), 1.0, rect));
    }

    #[test]
    fn rect_contains_point_is_edge_inclusive() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_point(Vec2::new(0.0, 0.0)));
        assert!(rect.contains_point(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains_point(Vec2::new(10.1, 5.0)));
    }

    #[test]
    fn angle_degrees_matches_cardinal_directions() {
        assert_eq!(Vec2::new(1.0, 0.0).angle_degrees(), 0.0);
        assert!((Vec2::new(0.0, 1.0).angle_degrees() - 90.0).abs() < 1e-3);
        assert!((Vec2::new(-1.0, 0.0).angle_degrees() - 180.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn normalized_nonzero_vectors_have_unit_length(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
        ) {
            let v = Vec2::new(x, y);
            prop_assume!(v.length() > 1e-3);
            let n = v.normalize();
            prop_assert!((n.length() - 1.0).abs() < 1e-4);
        }

        #[test]
        fn circle_overlap_is_symmetric(
            ax in 0.0f32..800.0, ay in 0.0f32..600.0,
            bx in 0.0f32..800.0, by in 0.0f32..600.0,
            ra in 0.1f32..50.0, rb in 0.1f32..50.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(circles_overlap(a, ra, b, rb), circles_overlap(b, rb, a, ra));
        }
    }
}
