//! Axis-aligned bounding box with 2D anchor accessors.
//!
//! [`Bounds`] is stored as center + half-extents. The corner and edge
//! accessors project onto the XY plane, which is where the 2D layout and
//! overlap helpers operate; the z extent rides along untouched.

use crate::math::{Vec2, Vec3};
use crate::overlap::PointOverlap;
use crate::rect::Rect;

/// An axis-aligned box stored as center + half-extents.
///
/// Extents are componentwise non-negative; every constructor normalizes
/// them, so `min() <= max()` holds on all axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Center point.
    pub center: Vec3,
    /// Half-extents, componentwise non-negative.
    pub extents: Vec3,
}

impl Bounds {
    /// Create bounds from a center and a full size.
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self {
            center,
            extents: (size * 0.5).abs(),
        }
    }

    /// Create bounds spanning two opposite corners.
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self::new((min + max) * 0.5, max - min)
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3 {
        self.center - self.extents
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3 {
        self.center + self.extents
    }

    /// Full size (twice the extents).
    pub fn size(&self) -> Vec3 {
        self.extents * 2.0
    }

    /// The XY footprint as a [`Rect`] (min corner + size).
    pub fn rect(&self) -> Rect {
        let min = self.min();
        let size = self.size();
        Rect::new(Vec2::new(min.x, min.y), Vec2::new(size.x, size.y))
    }

    // ===== 2D anchor points =====

    /// Midpoint of the top edge.
    pub fn top(&self) -> Vec2 {
        Vec2::new(self.center.x, self.max().y)
    }

    /// Top-left corner.
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.min().x, self.max().y)
    }

    /// Top-right corner.
    pub fn top_right(&self) -> Vec2 {
        let max = self.max();
        Vec2::new(max.x, max.y)
    }

    /// Midpoint of the bottom edge.
    pub fn bottom(&self) -> Vec2 {
        Vec2::new(self.center.x, self.min().y)
    }

    /// Bottom-left corner.
    pub fn bottom_left(&self) -> Vec2 {
        let min = self.min();
        Vec2::new(min.x, min.y)
    }

    /// Bottom-right corner.
    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.max().x, self.min().y)
    }

    /// Midpoint of the left edge.
    pub fn left(&self) -> Vec2 {
        Vec2::new(self.min().x, self.center.y)
    }

    /// Midpoint of the right edge.
    pub fn right(&self) -> Vec2 {
        Vec2::new(self.max().x, self.center.y)
    }

    // ===== Re-anchoring =====

    /// A copy of these bounds re-centered so the bottom-left corner sits
    /// at `position`. The z placement is preserved.
    pub fn with_bottom_left(&self, position: Vec2) -> Self {
        Self {
            center: Vec3::new(
                position.x + self.extents.x,
                position.y + self.extents.y,
                self.center.z,
            ),
            extents: self.extents,
        }
    }

    /// A copy of these bounds re-centered so the top-left corner sits at
    /// `position`. The z placement is preserved.
    pub fn with_top_left(&self, position: Vec2) -> Self {
        Self {
            center: Vec3::new(
                position.x + self.extents.x,
                position.y - self.extents.y,
                self.center.z,
            ),
            extents: self.extents,
        }
    }

    // ===== Queries =====

    /// Boundary-inclusive 2D point containment (XY footprint).
    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// True when all four 2D corners of `self` are contained in
    /// `container`. Boundary-inclusive, so `b.is_inside(&b)` is true.
    pub fn is_inside(&self, container: &Bounds) -> bool {
        container.contains(self.top_left())
            && container.contains(self.top_right())
            && container.contains(self.bottom_left())
            && container.contains(self.bottom_right())
    }

    /// True when all four 2D corners of `self` pass the supplied point
    /// query.
    ///
    /// Despite the name this is a full-containment test, not a partial
    /// overlap test: a box merely crossing the query shape reports
    /// `false`. The name and semantics are kept as-is from the behavior
    /// this utility set ports.
    pub fn is_overlapped(&self, collider: &impl PointOverlap) -> bool {
        collider.overlap_point(self.top_left())
            && collider.overlap_point(self.top_right())
            && collider.overlap_point(self.bottom_left())
            && collider.overlap_point(self.bottom_right())
    }
}
