use nightbloom_geometry::math::{
    look_rotation, mat4_from_scale_rotation_translation, transform_point, Mat4, Vec3,
};

use crate::color::Color;
use crate::drawer::{Drawer, DEFAULT_SOLID_CIRCLE_SEGMENTS};
use crate::mesh::DebugMesh;
use crate::primitives;
use crate::vertex::ColorVertex;

/// Accumulates draw calls as colored vertices for a one-shot render.
///
/// Lines collect as vertex pairs, solid meshes as vertex triples. A
/// renderer drains both with [`take_lines`](GizmoDrawer::take_lines) and
/// [`take_triangles`](GizmoDrawer::take_triangles); the internal buffers
/// keep their allocation.
pub struct GizmoDrawer {
    color: Color,
    lines: Vec<ColorVertex>,
    triangles: Vec<ColorVertex>,
}

impl GizmoDrawer {
    pub fn new() -> Self {
        Self {
            color: Color::WHITE,
            lines: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Accumulated line vertices, in pairs.
    pub fn lines(&self) -> &[ColorVertex] {
        &self.lines
    }

    /// Accumulated solid triangle vertices, in triples.
    pub fn triangles(&self) -> &[ColorVertex] {
        &self.triangles
    }

    /// Take the accumulated line vertices, leaving the buffer empty.
    pub fn take_lines(&mut self) -> Vec<ColorVertex> {
        std::mem::take(&mut self.lines)
    }

    /// Take the accumulated triangle vertices, leaving the buffer empty.
    pub fn take_triangles(&mut self) -> Vec<ColorVertex> {
        std::mem::take(&mut self.triangles)
    }

    /// Draw a wireframe cylinder around `up`.
    ///
    /// A circle of `radius` caps the bottom; a positive `height` adds
    /// the top cap and four side lines at the cardinal points. Warns and
    /// draws nothing when `up` has no tangent (zero, or parallel to the
    /// (1, 1, 1) diagonal).
    pub fn draw_wire_cylinder(&mut self, position: Vec3, up: Vec3, height: f32, radius: f32) {
        let tangent = up.cross(&Vec3::new(1.0, 1.0, 1.0));
        if tangent.norm_squared() == 0.0 {
            log::warn!("draw_wire_cylinder: up axis has no tangent; skipping");
            return;
        }
        let transform = mat4_from_scale_rotation_translation(
            Vec3::new(radius, height, radius),
            look_rotation(tangent.normalize(), up),
            position,
        );

        self.transformed_cap(&transform, 0.0);
        if height > 0.0 {
            self.transformed_cap(&transform, 1.0);
            for (from, to) in [
                (Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0)),
                (Vec3::new(-1.0, 0.0, 0.0), Vec3::new(-1.0, 1.0, 0.0)),
                (Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 1.0)),
                (Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 1.0, -1.0)),
            ] {
                self.draw_line(
                    transform_point(&transform, from),
                    transform_point(&transform, to),
                );
            }
        }
    }

    /// A unit XZ circle at height `y`, pushed through `transform`.
    fn transformed_cap(&mut self, transform: &Mat4, y: f32) {
        if let Some(points) = primitives::circle_points(
            Vec3::new(0.0, y, 0.0),
            1.0,
            Vec3::y(),
            DEFAULT_SOLID_CIRCLE_SEGMENTS,
        ) {
            for i in 0..points.len() {
                let next = (i + 1) % points.len();
                self.draw_line(
                    transform_point(transform, points[i]),
                    transform_point(transform, points[next]),
                );
            }
        }
    }
}

impl Default for GizmoDrawer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawer for GizmoDrawer {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw_line(&mut self, from: Vec3, to: Vec3) {
        self.lines.push(ColorVertex::new(from, self.color));
        self.lines.push(ColorVertex::new(to, self.color));
    }

    /// Solid path: mesh triangles accumulate as vertex triples.
    fn draw_mesh(&mut self, mesh: &DebugMesh, position: Vec3) {
        let vertices = mesh.vertices();
        for tri in mesh.triangles() {
            for &index in tri {
                self.triangles
                    .push(ColorVertex::new(vertices[index as usize] + position, self.color));
            }
        }
    }
}
