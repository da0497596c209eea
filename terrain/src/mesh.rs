// src/mesh.rs

use bytemuck::{Pod, Zeroable};
use nalgebra::Vector3;

use crate::grid::Grid;

/// World-space vertex positions, one per grid point.
pub type VertexGrid = Grid<Vector3<f64>>;

/// Unit surface normals, one per grid point.
pub type NormalGrid = Grid<Vector3<f64>>;

/// One vertex of the uploaded terrain mesh.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
}

/// Flat list of quads, four vertices each, in the order they must be drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffer {
    vertices: Vec<MeshVertex>,
}

impl MeshBuffer {
    pub const VERTICES_PER_QUAD: usize = 4;

    pub(crate) fn with_quad_capacity(quads: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(quads * Self::VERTICES_PER_QUAD),
        }
    }

    pub(crate) fn push_quad(&mut self, quad: [MeshVertex; 4]) {
        self.vertices.extend_from_slice(&quad);
    }

    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / Self::VERTICES_PER_QUAD
    }

    pub fn quads(&self) -> impl Iterator<Item = &[MeshVertex]> + '_ {
        self.vertices.chunks_exact(Self::VERTICES_PER_QUAD)
    }

    /// Raw vertex bytes, laid out as `#[repr(C)]` [`MeshVertex`] records.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index list splitting every quad into two triangles `(0, 1, 2)` and
    /// `(0, 2, 3)`, which keeps the quad's winding.
    pub fn triangle_indices(&self) -> Vec<u32> {
        let mut indices = Vec::with_capacity(self.quad_count() * 6);
        for quad in 0..self.quad_count() as u32 {
            let base = quad * Self::VERTICES_PER_QUAD as u32;
            indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
        }
        indices
    }
}
