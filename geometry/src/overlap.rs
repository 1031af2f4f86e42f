//! Point-membership queries over 2D shapes.

use crate::bounds::Bounds;
use crate::math::Vec2;
use crate::rect::Rect;

/// A shape that can answer 2D point-membership queries.
///
/// [`Bounds::is_overlapped`] takes any implementor, so box-vs-shape
/// checks work against every shape with a point test rather than a
/// closed list of collider types.
pub trait PointOverlap {
    /// True when `point` lies inside the shape, boundary inclusive.
    fn overlap_point(&self, point: Vec2) -> bool;
}

impl PointOverlap for Bounds {
    fn overlap_point(&self, point: Vec2) -> bool {
        self.contains(point)
    }
}

impl PointOverlap for Rect {
    fn overlap_point(&self, point: Vec2) -> bool {
        self.contains(point)
    }
}

/// A circle in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }
}

impl PointOverlap for Circle {
    fn overlap_point(&self, point: Vec2) -> bool {
        (point - self.center).norm_squared() <= self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn bounds_overlap_point_matches_contains() {
        let b = Bounds::new(Vec3::zeros(), Vec3::new(2.0, 2.0, 2.0));
        assert!(b.overlap_point(Vec2::new(1.0, -1.0)));
        assert!(!b.overlap_point(Vec2::new(1.5, 0.0)));
    }

    #[test]
    fn circle_overlap_point() {
        let c = Circle::new(Vec2::new(1.0, 0.0), 2.0);
        assert!(c.overlap_point(Vec2::new(1.0, 2.0)));
        assert!(c.overlap_point(Vec2::new(3.0, 0.0)));
        assert!(!c.overlap_point(Vec2::new(3.1, 0.0)));
    }

    #[test]
    fn bounds_inside_circle() {
        let collider = Circle::new(Vec2::zeros(), 2.0);
        let inner = Bounds::new(Vec3::zeros(), Vec3::new(2.0, 2.0, 0.0));
        let wide = Bounds::new(Vec3::zeros(), Vec3::new(6.0, 2.0, 0.0));
        assert!(inner.is_overlapped(&collider));
        assert!(!wide.is_overlapped(&collider));
    }
}
