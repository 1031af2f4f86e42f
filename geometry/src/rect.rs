//! 2D rectangle value type.

use crate::bounds::Bounds;
use crate::math::{Vec2, Vec3};

/// An axis-aligned 2D rectangle, stored as minimum corner + size.
///
/// Sizes are normalized componentwise non-negative on construction, so
/// `min` is always the true minimum corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum (bottom-left) corner.
    pub min: Vec2,
    /// Width and height, componentwise non-negative.
    pub size: Vec2,
}

impl Rect {
    /// Create a rect from a corner and a size.
    ///
    /// Negative size components are folded into the corner, so
    /// `Rect::new((1, 1), (-2, 3))` spans x in [-1, 1] and y in [1, 4].
    pub fn new(corner: Vec2, size: Vec2) -> Self {
        let min = Vec2::new(
            corner.x.min(corner.x + size.x),
            corner.y.min(corner.y + size.y),
        );
        Self {
            min,
            size: size.abs(),
        }
    }

    /// Maximum (top-right) corner.
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Boundary-inclusive point containment.
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x <= max.x && point.y >= self.min.y && point.y <= max.y
    }

    /// Lift this rect into a zero-depth [`Bounds`] in the XY plane.
    pub fn to_bounds(&self) -> Bounds {
        let center = self.center();
        Bounds::new(
            Vec3::new(center.x, center.y, 0.0),
            Vec3::new(self.size.x, self.size.y, 0.0),
        )
    }
}
