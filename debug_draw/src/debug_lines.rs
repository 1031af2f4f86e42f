use nightbloom_geometry::math::Vec3;

use crate::color::Color;
use crate::drawer::Drawer;
use crate::vertex::ColorVertex;

/// A line segment with a remaining lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
    /// Remaining lifetime in seconds.
    pub ttl: f32,
}

/// A line backend where every segment lives for a configurable time.
///
/// New lines take the drawer's current [`duration`](Self::duration).
/// [`advance`](Self::advance) ages the collection once per frame; lines
/// drawn with duration zero last until the next advance.
pub struct DebugLineDrawer {
    color: Color,
    /// Lifetime in seconds for newly drawn lines.
    pub duration: f32,
    lines: Vec<TimedLine>,
}

impl DebugLineDrawer {
    pub fn new() -> Self {
        Self {
            color: Color::WHITE,
            duration: 0.0,
            lines: Vec::new(),
        }
    }

    pub fn with_duration(duration: f32) -> Self {
        Self {
            duration,
            ..Self::new()
        }
    }

    /// Live line segments.
    pub fn lines(&self) -> &[TimedLine] {
        &self.lines
    }

    /// Age all lines by `dt` seconds and drop the expired ones.
    pub fn advance(&mut self, dt: f32) {
        self.lines.retain_mut(|line| {
            line.ttl -= dt;
            line.ttl > 0.0
        });
    }

    /// Flatten the live lines into renderable vertex pairs.
    pub fn vertices(&self) -> Vec<ColorVertex> {
        let mut vertices = Vec::with_capacity(self.lines.len() * 2);
        for line in &self.lines {
            vertices.push(ColorVertex::new(line.start, line.color));
            vertices.push(ColorVertex::new(line.end, line.color));
        }
        vertices
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Default for DebugLineDrawer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawer for DebugLineDrawer {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw_line(&mut self, from: Vec3, to: Vec3) {
        self.lines.push(TimedLine {
            start: from,
            end: to,
            color: self.color,
            ttl: self.duration,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_drawer() {
        let drawer = DebugLineDrawer::new();
        assert!(drawer.lines().is_empty());
        assert_eq!(drawer.duration, 0.0);
        assert_eq!(drawer.color(), Color::WHITE);
    }

    #[test]
    fn test_lines_take_current_duration() {
        let mut drawer = DebugLineDrawer::with_duration(1.5);
        drawer.draw_line(Vec3::zeros(), Vec3::x());
        drawer.duration = 0.25;
        drawer.draw_line(Vec3::zeros(), Vec3::y());

        assert_eq!(drawer.lines()[0].ttl, 1.5);
        assert_eq!(drawer.lines()[1].ttl, 0.25);
    }

    #[test]
    fn test_advance_expires_lines() {
        let mut drawer = DebugLineDrawer::with_duration(1.0);
        drawer.draw_line(Vec3::zeros(), Vec3::x());

        drawer.advance(0.5);
        assert_eq!(drawer.lines().len(), 1);
        drawer.advance(0.6);
        assert!(drawer.lines().is_empty());
    }

    #[test]
    fn test_zero_duration_lasts_one_frame() {
        let mut drawer = DebugLineDrawer::new();
        drawer.draw_line(Vec3::zeros(), Vec3::x());
        assert_eq!(drawer.lines().len(), 1);

        drawer.advance(0.0);
        assert!(drawer.lines().is_empty());
    }

    #[test]
    fn test_vertices_flatten_pairs() {
        let mut drawer = DebugLineDrawer::new();
        drawer.set_color(Color::BLUE);
        drawer.draw_line(Vec3::zeros(), Vec3::x());
        drawer.draw_line(Vec3::y(), Vec3::z());

        let vertices = drawer.vertices();
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(vertices[2].position, [0.0, 1.0, 0.0]);
        assert_eq!(vertices[0].color, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_shapes_accumulate_as_timed_lines() {
        let mut drawer = DebugLineDrawer::with_duration(2.0);
        drawer.draw_wire_cube(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        // 12 triangles * 3 edges = 36 lines
        assert_eq!(drawer.lines().len(), 36);
        assert!(drawer.lines().iter().all(|line| line.ttl == 2.0));
    }

    #[test]
    fn test_clear() {
        let mut drawer = DebugLineDrawer::with_duration(5.0);
        drawer.draw_line(Vec3::zeros(), Vec3::x());
        drawer.clear();
        assert!(drawer.lines().is_empty());
    }
}
