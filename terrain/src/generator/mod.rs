pub mod displacement;
mod heightmap;
mod mesh;
mod normals;

pub use displacement::{
    DisplacementSource,
    GlobalDisplacement,
    SeededDisplacement,
    ZeroDisplacement,
};
pub use heightmap::HeightmapGenerator;
pub use mesh::MeshGenerator;
pub use normals::estimate_normals;

#[cfg(test)]
mod tests;
