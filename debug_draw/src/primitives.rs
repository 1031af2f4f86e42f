//! Primitive shape generators.
//!
//! Pure functions producing [`DebugMesh`] values and point rings that the
//! [`Drawer`](crate::Drawer) methods feed to a backend. Inputs without a
//! usable direction (a zero rotation axis) return `None`; the drawing
//! layer decides how to report that.

use std::f32::consts::{FRAC_PI_4, TAU};

use nightbloom_geometry::math::{rotate_axis_angle, rotate_z, Vec2, Vec3};

use crate::mesh::DebugMesh;

/// Rings with fewer segments than this are widened to a triangle.
const MIN_SEGMENTS: u32 = 3;

/// Arrow head segments are this fraction of the shaft length.
const ARROW_HEAD_RATIO: f32 = 0.1;

/// Angle between the shaft direction and each arrow head segment.
const ARROW_HEAD_ANGLE: f32 = 3.0 * FRAC_PI_4;

/// Generate a box mesh centered at the origin.
///
/// Eight corner vertices and twelve triangles, two per face:
///
/// ```text
///    v0 ----- v1      top face at +y/2
///    | \      | \
///    v3 ----- v2 \
///     \  v7 ---\-- v6   bottom face at -y/2
///      \ |      \ |
///       v4 ----- v5
/// ```
pub fn cube(size: Vec3) -> DebugMesh {
    let hx = size.x / 2.0;
    let hy = size.y / 2.0;
    let hz = size.z / 2.0;

    let vertices = vec![
        Vec3::new(-hx, hy, hz),
        Vec3::new(hx, hy, hz),
        Vec3::new(hx, hy, -hz),
        Vec3::new(-hx, hy, -hz),
        Vec3::new(-hx, -hy, -hz),
        Vec3::new(hx, -hy, -hz),
        Vec3::new(hx, -hy, hz),
        Vec3::new(-hx, -hy, hz),
    ];

    let triangles = vec![
        [3, 0, 1], // top
        [1, 2, 3],
        [4, 6, 7], // bottom
        [4, 5, 6],
        [7, 1, 0], // front
        [7, 6, 1],
        [4, 3, 2], // back
        [2, 5, 4],
        [5, 2, 1], // right
        [1, 6, 5],
        [0, 3, 4], // left
        [4, 7, 0],
    ];

    DebugMesh::from_raw(vertices, triangles)
}

/// Generate a coarse sphere mesh centered at the origin.
///
/// Fourteen vertices: the six axis poles plus the eight points where the
/// cube diagonals meet the surface. Each pole fans out to its four
/// nearest diagonal points, 24 triangles in total. Every vertex lies
/// exactly on the sphere.
pub fn sphere(radius: f32) -> DebugMesh {
    // Diagonal points sit at radius / sqrt(3) on each axis.
    let d = radius / 3.0_f32.sqrt();

    let vertices = vec![
        Vec3::new(-d, d, d),
        Vec3::new(d, d, d),
        Vec3::new(d, d, -d),
        Vec3::new(-d, d, -d),
        Vec3::new(-d, -d, -d),
        Vec3::new(d, -d, -d),
        Vec3::new(d, -d, d),
        Vec3::new(-d, -d, d),
        Vec3::new(-radius, 0.0, 0.0),
        Vec3::new(radius, 0.0, 0.0),
        Vec3::new(0.0, radius, 0.0),
        Vec3::new(0.0, -radius, 0.0),
        Vec3::new(0.0, 0.0, radius),
        Vec3::new(0.0, 0.0, -radius),
    ];

    let triangles = vec![
        [10, 0, 1], // top
        [10, 0, 3],
        [10, 1, 2],
        [10, 2, 3],
        [11, 6, 7], // bottom
        [11, 6, 5],
        [11, 5, 4],
        [11, 4, 7],
        [12, 0, 1], // front
        [12, 0, 7],
        [12, 1, 6],
        [12, 6, 7],
        [13, 3, 2], // back
        [13, 3, 4],
        [13, 4, 5],
        [13, 5, 2],
        [9, 2, 1], // right
        [9, 2, 5],
        [9, 5, 6],
        [9, 6, 1],
        [8, 3, 4], // left
        [8, 3, 0],
        [8, 0, 7],
        [8, 7, 4],
    ];

    DebugMesh::from_raw(vertices, triangles)
}

/// Generate the points of a circle around `axis`.
///
/// The ring starts at a fixed radial direction perpendicular to `axis`
/// and walks a full turn in `segments` equal steps. Fewer than three
/// segments are widened to three. Returns `None` when `axis` is zero.
pub fn circle_points(center: Vec3, radius: f32, axis: Vec3, segments: u32) -> Option<Vec<Vec3>> {
    let start = radial_start(axis)? * radius;
    let segments = segments.max(MIN_SEGMENTS);
    let step = TAU / segments as f32;

    Some(
        (0..segments)
            .map(|i| center + rotate_axis_angle(axis, step * i as f32, start))
            .collect(),
    )
}

/// Generate a filled circle as a triangle fan.
///
/// Vertices are relative to the origin; `segments` points on the ring
/// fanned from the first one into `segments - 2` triangles. Returns
/// `None` when `axis` is zero.
pub fn solid_circle(radius: f32, axis: Vec3, segments: u32) -> Option<DebugMesh> {
    let points = circle_points(Vec3::zeros(), radius, axis, segments)?;

    let triangle_count = points.len() as u32 - 2;
    let mut triangles = Vec::with_capacity(triangle_count as usize);
    for i in 0..triangle_count {
        triangles.push([0, i + 1, i + 2]);
    }

    Some(DebugMesh::from_raw(points, triangles))
}

/// Corner points of an isosceles triangle in the XY plane.
///
/// `direction` points from the apex towards the base, `height` is the
/// apex-to-base distance and `angle` the full apex angle in radians. The
/// two legs are `direction` swung by half the apex angle either way,
/// stretched to reach the base line.
pub fn triangle_points(apex: Vec2, direction: Vec2, height: f32, angle: f32) -> [Vec2; 3] {
    let edge_length = height / (angle / 2.0).cos();

    let p1 = apex + rotate_z(-angle / 2.0, direction) * edge_length;
    let p2 = apex + rotate_z(angle / 2.0, direction) * edge_length;

    [apex, p1, p2]
}

/// The two arrow head segments for a shaft vector.
///
/// Each is a tenth of the shaft swung by 135 degrees around +Z, one per
/// side. Returned as vectors to add to the arrow tip.
pub fn arrow_head(shaft: Vec3) -> (Vec3, Vec3) {
    let part = shaft * ARROW_HEAD_RATIO;
    let left = rotate_axis_angle(Vec3::z(), ARROW_HEAD_ANGLE, part);
    let right = rotate_axis_angle(Vec3::z(), -ARROW_HEAD_ANGLE, part);
    (left, right)
}

/// A radial start direction perpendicular to `axis`, unit length.
///
/// Axes in the XY plane pair with +Z; anything else solves the plane
/// equation for a perpendicular through (1, 1, _).
fn radial_start(axis: Vec3) -> Option<Vec3> {
    if axis == Vec3::zeros() {
        return None;
    }
    if axis.z == 0.0 {
        Some(Vec3::z())
    } else {
        Some(Vec3::new(1.0, 1.0, (-axis.x - axis.y) / axis.z).normalize())
    }
}
