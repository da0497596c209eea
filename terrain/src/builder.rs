// src/builder.rs

//! Phase-by-phase terrain construction.
//!
//! Each phase consumes the previous one, so normals can only be estimated
//! from a complete heightfield and packing only happens once every normal
//! exists.

use log::{debug, info};

use crate::{
    config::TerrainConfig,
    error::TerrainError,
    generator::{estimate_normals, DisplacementSource, HeightmapGenerator, MeshGenerator},
    heightmap::HeightField,
    mesh::{MeshBuffer, NormalGrid, VertexGrid},
};

pub struct TerrainBuilder {
    config: TerrainConfig,
}

impl TerrainBuilder {
    pub fn new(config: TerrainConfig) -> Result<Self, TerrainError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    pub fn synthesize<S>(self, source: &mut S) -> SynthesizedTerrain
    where
        S: DisplacementSource + ?Sized,
    {
        let heights = HeightmapGenerator::new(&self.config).generate(source);
        debug!(
            "Synthesized {} heightfield over {} levels",
            self.config.grid_size,
            self.config.grid_size.levels()
        );
        SynthesizedTerrain {
            config: self.config,
            heights,
        }
    }
}

/// A finished heightfield, not yet placed in world space.
pub struct SynthesizedTerrain {
    config: TerrainConfig,
    heights: HeightField,
}

impl SynthesizedTerrain {
    pub fn heights(&self) -> &HeightField {
        &self.heights
    }

    pub fn estimate_normals(self) -> ShadedTerrain {
        let vertices = MeshGenerator::new(self.config.spacing).place_vertices(&self.heights);
        let normals = estimate_normals(&vertices);
        debug!("Estimated {} vertex normals", normals.size().point_count());
        ShadedTerrain {
            config: self.config,
            heights: self.heights,
            vertices,
            normals,
        }
    }
}

/// Positions and normals for every grid point.
pub struct ShadedTerrain {
    config: TerrainConfig,
    heights: HeightField,
    vertices: VertexGrid,
    normals: NormalGrid,
}

impl ShadedTerrain {
    pub fn heights(&self) -> &HeightField {
        &self.heights
    }

    pub fn vertices(&self) -> &VertexGrid {
        &self.vertices
    }

    pub fn normals(&self) -> &NormalGrid {
        &self.normals
    }

    pub fn pack(self) -> Terrain {
        let mesh = MeshGenerator::new(self.config.spacing).pack(&self.vertices, &self.normals);
        let (low, high) = self.heights.min_max();
        info!(
            "Generated {} terrain: {} quads, heights {:.2}..{:.2}",
            self.config.grid_size,
            mesh.quad_count(),
            low,
            high
        );
        Terrain {
            config: self.config,
            heights: self.heights,
            vertices: self.vertices,
            normals: self.normals,
            mesh,
        }
    }
}

/// Every artefact of one generation. Read-only once built; a new terrain
/// replaces it as a whole.
#[derive(Clone, Debug)]
pub struct Terrain {
    config: TerrainConfig,
    heights: HeightField,
    vertices: VertexGrid,
    normals: NormalGrid,
    mesh: MeshBuffer,
}

impl Terrain {
    pub fn generate<S>(config: TerrainConfig, source: &mut S) -> Result<Self, TerrainError>
    where
        S: DisplacementSource + ?Sized,
    {
        Ok(TerrainBuilder::new(config)?
            .synthesize(source)
            .estimate_normals()
            .pack())
    }

    /// Builds a fresh terrain from the same configuration and swaps it in.
    pub fn regenerate<S>(&mut self, source: &mut S)
    where
        S: DisplacementSource + ?Sized,
    {
        let builder = TerrainBuilder {
            config: self.config.clone(),
        };
        *self = builder.synthesize(source).estimate_normals().pack();
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    pub fn heights(&self) -> &HeightField {
        &self.heights
    }

    pub fn vertices(&self) -> &VertexGrid {
        &self.vertices
    }

    pub fn normals(&self) -> &NormalGrid {
        &self.normals
    }

    pub fn mesh(&self) -> &MeshBuffer {
        &self.mesh
    }

    pub fn into_mesh(self) -> MeshBuffer {
        self.mesh
    }

    pub fn height_at(&self, x: usize, z: usize) -> Option<f64> {
        self.heights.get(x, z).copied()
    }
}
