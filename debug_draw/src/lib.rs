//! Wireframe and gizmo drawing for Nightbloom tools.
//!
//! All shapes reduce to line segments through the [`Drawer`] trait, so
//! the same calls work against any backend.
//!
//! # Architecture
//!
//! - [`Drawer`] — The drawing surface; backends supply `draw_line` and
//!   the color pair, shapes come for free
//! - [`GizmoDrawer`] — Accumulates colored line and triangle vertices
//!   for a one-shot render
//! - [`DebugLineDrawer`] — Keeps lines alive for a configurable time
//!   across frames
//! - [`primitives`] — The pure shape generators behind the trait
//!
//! # Usage
//!
//! ```ignore
//! let mut gizmos = GizmoDrawer::new();
//!
//! gizmos.set_color(Color::GREEN);
//! gizmos.draw_wire_cube(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
//! gizmos.draw_arrow(Vec3::zeros(), Vec3::new(0.0, 2.0, 0.0));
//!
//! // At render time:
//! let line_vertices = gizmos.take_lines();
//! let triangle_vertices = gizmos.take_triangles();
//! ```

mod color;
mod debug_lines;
mod drawer;
mod gizmo;
mod mesh;
pub mod primitives;
mod vertex;

pub use color::Color;
pub use debug_lines::{DebugLineDrawer, TimedLine};
pub use drawer::{Drawer, DEFAULT_SOLID_CIRCLE_SEGMENTS, DEFAULT_WIRE_CIRCLE_SEGMENTS};
pub use gizmo::GizmoDrawer;
pub use mesh::{DebugMesh, MeshError, MeshResult};
pub use vertex::ColorVertex;
