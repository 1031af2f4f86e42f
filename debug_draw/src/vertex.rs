use nightbloom_geometry::math::Vec3;

use crate::color::Color;

/// A draw vertex: position + color.
///
/// Line backends emit these in pairs (one line segment per pair), solid
/// backends in triples (one triangle per triple).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl ColorVertex {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self {
            position: position.into(),
            color: color.to_array(),
        }
    }
}
