// src/prelude.rs
//! A convenient prelude re-exporting common terrain types.

pub use crate::builder::{ShadedTerrain, SynthesizedTerrain, Terrain, TerrainBuilder};
pub use crate::config::{CornerSeeds, TerrainConfig};
pub use crate::coords::GridSize;
pub use crate::error::TerrainError;
pub use crate::generator::{
    DisplacementSource, GlobalDisplacement, SeededDisplacement, ZeroDisplacement,
};
pub use crate::heightmap::HeightField;
pub use crate::mesh::{MeshBuffer, MeshVertex, NormalGrid, VertexGrid};
