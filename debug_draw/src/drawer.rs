use std::f32::consts::PI;

use nightbloom_geometry::bounds::Bounds;
use nightbloom_geometry::math::{Vec2, Vec3};

use crate::color::Color;
use crate::mesh::DebugMesh;
use crate::primitives;

/// Default segment count for wire circles.
pub const DEFAULT_WIRE_CIRCLE_SEGMENTS: u32 = 30;

/// Default segment count for solid circles and axis-aligned circle
/// helpers.
pub const DEFAULT_SOLID_CIRCLE_SEGMENTS: u32 = 16;

/// A drawing surface that renders shapes through line segments.
///
/// Backends implement [`draw_line`](Drawer::draw_line) plus the color
/// pair; every other shape has a provided implementation on top of it.
/// A backend with a native solid path overrides
/// [`draw_mesh`](Drawer::draw_mesh); without the override solid draws
/// fall back to the wireframe.
pub trait Drawer {
    /// Current draw color.
    fn color(&self) -> Color;

    /// Set the color used by subsequent draws.
    fn set_color(&mut self, color: Color);

    /// Draw a single line segment.
    fn draw_line(&mut self, from: Vec3, to: Vec3);

    /// Draw a mesh at `position`, solid when the backend supports it.
    fn draw_mesh(&mut self, mesh: &DebugMesh, position: Vec3) {
        self.draw_wire_mesh(mesh, position);
    }

    /// Draw every triangle edge of a mesh, offset by `position`.
    fn draw_wire_mesh(&mut self, mesh: &DebugMesh, position: Vec3) {
        let vertices = mesh.vertices();
        for tri in mesh.triangles() {
            let v0 = vertices[tri[0] as usize] + position;
            let v1 = vertices[tri[1] as usize] + position;
            let v2 = vertices[tri[2] as usize] + position;

            self.draw_line(v0, v1);
            self.draw_line(v1, v2);
            self.draw_line(v2, v0);
        }
    }

    /// Draw a wireframe box (12 triangles, 36 edges).
    fn draw_wire_cube(&mut self, center: Vec3, size: Vec3) {
        self.draw_wire_mesh(&primitives::cube(size), center);
    }

    /// Draw a coarse wireframe sphere (24 triangles, 72 edges).
    fn draw_wire_sphere(&mut self, center: Vec3, radius: f32) {
        self.draw_wire_mesh(&primitives::sphere(radius), center);
    }

    /// Draw the XY outline of bounds as a quad in the z = 0 plane.
    fn draw_bounds(&mut self, bounds: &Bounds) {
        self.draw_wire_quad(
            bounds.top_left().push(0.0),
            bounds.top_right().push(0.0),
            bounds.bottom_right().push(0.0),
            bounds.bottom_left().push(0.0),
        );
    }

    /// Draw a closed quad through four points.
    fn draw_wire_quad(&mut self, v0: Vec3, v1: Vec3, v2: Vec3, v3: Vec3) {
        self.draw_line(v0, v1);
        self.draw_line(v1, v2);
        self.draw_line(v2, v3);
        self.draw_line(v3, v0);
    }

    /// Draw an isosceles triangle outline in the XY plane.
    ///
    /// `direction` points from the apex at `position` towards the base,
    /// `height` is the apex-to-base distance and `angle` the full apex
    /// angle in radians.
    fn draw_wire_triangle_2d(&mut self, position: Vec2, direction: Vec2, height: f32, angle: f32) {
        let [apex, p1, p2] = primitives::triangle_points(position, direction, height, angle);
        let apex = apex.push(0.0);
        let p1 = p1.push(0.0);
        let p2 = p2.push(0.0);

        self.draw_line(apex, p1);
        self.draw_line(p1, p2);
        self.draw_line(apex, p2);
    }

    /// Draw an isosceles triangle outline from a height vector and base
    /// length. Warns and draws nothing when `height` is zero.
    fn draw_wire_triangle_2d_from_height(
        &mut self,
        position: Vec2,
        height: Vec2,
        base_length: f32,
    ) {
        let height_value = height.norm();
        if height_value == 0.0 {
            log::warn!("draw_wire_triangle_2d_from_height: height is zero; skipping");
            return;
        }
        let angle = PI - 2.0 * (height_value / (base_length / 2.0)).atan();

        self.draw_wire_triangle_2d(position, height / height_value, height_value, angle);
    }

    /// Draw a circle outline around `axis`. Warns and draws nothing when
    /// `axis` is zero.
    fn draw_wire_circle(&mut self, position: Vec3, radius: f32, axis: Vec3, segments: u32) {
        let points = match primitives::circle_points(position, radius, axis, segments) {
            Some(points) => points,
            None => {
                log::warn!("draw_wire_circle: rotation axis is zero; skipping");
                return;
            }
        };
        for i in 0..points.len() {
            let next = (i + 1) % points.len();
            self.draw_line(points[i], points[next]);
        }
    }

    /// Draw a filled circle, fanned into triangles for solid backends.
    /// Warns and draws nothing when `axis` is zero.
    fn draw_solid_circle(&mut self, center: Vec3, radius: f32, axis: Vec3, segments: u32) {
        match primitives::solid_circle(radius, axis, segments) {
            Some(mesh) => self.draw_mesh(&mesh, center),
            None => log::warn!("draw_solid_circle: rotation axis is zero; skipping"),
        }
    }

    /// Draw a circle outline in the XZ plane.
    fn draw_wire_circle_xz(&mut self, position: Vec3, radius: f32, segments: u32) {
        self.draw_wire_circle(position, radius, Vec3::y(), segments);
    }

    /// Draw a circle outline in the XY plane.
    fn draw_wire_circle_xy(&mut self, position: Vec3, radius: f32, segments: u32) {
        self.draw_wire_circle(position, radius, -Vec3::z(), segments);
    }

    /// Draw a line with an arrow head at `end`.
    fn draw_arrow(&mut self, start: Vec3, end: Vec3) {
        let (left, right) = primitives::arrow_head(end - start);

        self.draw_line(start, end);
        self.draw_line(end, end + left);
        self.draw_line(end, end + right);
    }
}
