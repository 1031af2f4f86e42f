use nightbloom_geometry::math::Vec3;
use thiserror::Error;

/// Mesh construction error.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("triangle {triangle} references vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },
}

pub type MeshResult<T> = Result<T, MeshError>;

/// An indexed triangle mesh used as wireframe or solid draw input.
///
/// Construction validates that every index is in range, so drawing code
/// can index the vertex list directly.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugMesh {
    vertices: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
}

impl DebugMesh {
    /// Build a mesh from vertices and triangle index triples.
    pub fn new(vertices: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> MeshResult<Self> {
        for (t, tri) in triangles.iter().enumerate() {
            for &index in tri {
                if index as usize >= vertices.len() {
                    return Err(MeshError::IndexOutOfRange {
                        triangle: t,
                        index,
                        vertex_count: vertices.len(),
                    });
                }
            }
        }
        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// Build a mesh from indices that are known to be in range.
    pub(crate) fn from_raw(vertices: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Self {
        debug_assert!(triangles
            .iter()
            .all(|tri| tri.iter().all(|&i| (i as usize) < vertices.len())));
        Self {
            vertices,
            triangles,
        }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}
