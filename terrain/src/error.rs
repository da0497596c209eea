// src/error.rs

/// Everything that can be rejected before terrain generation starts.
///
/// The generation passes themselves cannot fail once a configuration has
/// been accepted.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TerrainError {
    #[error("grid size {0} is not of the form 2^k + 1 with k >= 1")]
    InvalidGridSize(usize),

    #[error("maximum displacement must be finite and non-negative, got {0}")]
    InvalidDisplacement(f64),

    #[error("roughness must be finite, got {0}")]
    InvalidRoughness(f64),

    #[error("grid spacing must be finite and positive, got {0}")]
    InvalidSpacing(f64),

    #[error("displacement {max_displacement} with roughness {roughness} overflows f64 heights")]
    DisplacementOverflow {
        max_displacement: f64,
        roughness: f64,
    },

    #[error("corner seed elevations must be finite")]
    InvalidCorners,

    #[error("the global displacement source has already been seeded")]
    GlobalSourceAlreadySeeded,

    #[error("the global displacement source has not been seeded")]
    GlobalSourceNotSeeded,
}
