use nalgebra::Vector3;

use crate::{
    grid::Grid,
    heightmap::HeightField,
    mesh::{MeshBuffer, MeshVertex, NormalGrid, VertexGrid},
};

/// Texture coordinates by corner role within a quad, in emission order.
const QUAD_TEX_COORDS: [[f32; 2]; 4] = [[0.0, 1.0], [0.0, 0.0], [1.0, 0.0], [1.0, 1.0]];

pub struct MeshGenerator {
    spacing: f64,
}

impl MeshGenerator {
    pub fn new(spacing: f64) -> Self {
        Self { spacing }
    }

    /// Lays the heightfield out in world space, centred on the origin in the
    /// X/Z plane with the elevation as Y.
    pub fn place_vertices(&self, heights: &HeightField) -> VertexGrid {
        let half_extent = heights.size().quads_per_dimension() as f64 / 2.0;
        Grid::from_fn(heights.size(), |x, z| {
            Vector3::new(
                (x as f64 - half_extent) * self.spacing,
                heights[(x, z)],
                (z as f64 - half_extent) * self.spacing,
            )
        })
    }

    /// Emits one quad per cell, `x` outer and `z` inner. Each quad runs
    /// `(x, z) -> (x, z+1) -> (x+1, z+1) -> (x+1, z)`.
    pub fn pack(&self, vertices: &VertexGrid, normals: &NormalGrid) -> MeshBuffer {
        let quads = vertices.size().quads_per_dimension();
        let mut mesh = MeshBuffer::with_quad_capacity(quads * quads);

        let vertex = |x: usize, z: usize, corner: usize| MeshVertex {
            position: to_f32(&vertices[(x, z)]),
            normal: to_f32(&normals[(x, z)]),
            tex_coord: QUAD_TEX_COORDS[corner],
        };

        for x in 0..quads {
            for z in 0..quads {
                mesh.push_quad([
                    vertex(x, z, 0),
                    vertex(x, z + 1, 1),
                    vertex(x + 1, z + 1, 2),
                    vertex(x + 1, z, 3),
                ]);
            }
        }

        mesh
    }
}

fn to_f32(v: &Vector3<f64>) -> [f32; 3] {
    [v.x as f32, v.y as f32, v.z as f32]
}
