// src/lib.rs

//! Procedural terrain for the outdoor scene.
//!
//! A heightfield is synthesized by midpoint displacement, per-vertex normals
//! are estimated from it, and the result is packed into a flat quad mesh
//! ready for upload. See [`builder::TerrainBuilder`] for the pipeline.

pub mod builder;
pub mod config;
pub mod coords;
pub mod error;
pub mod generator;
pub mod grid;
pub mod heightmap;
pub mod mesh;
pub mod prelude;

pub use builder::{Terrain, TerrainBuilder};
pub use config::{CornerSeeds, TerrainConfig};
pub use coords::GridSize;
pub use error::TerrainError;
