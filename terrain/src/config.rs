// src/config.rs

use serde::{Deserialize, Serialize};

use crate::coords::GridSize;
use crate::error::TerrainError;

/// Fixed elevations of the four grid corners.
///
/// Upper/lower refers to `z` (upper is `z = 0`), left/right to `x`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CornerSeeds {
    /// Elevation at `(0, 0)`.
    pub upper_left: f64,
    /// Elevation at `(0, N - 1)`.
    pub lower_left: f64,
    /// Elevation at `(N - 1, N - 1)`.
    pub lower_right: f64,
    /// Elevation at `(N - 1, 0)`.
    pub upper_right: f64,
}

impl CornerSeeds {
    pub fn uniform(height: f64) -> Self {
        Self {
            upper_left: height,
            lower_left: height,
            lower_right: height,
            upper_right: height,
        }
    }

    fn is_finite(&self) -> bool {
        self.as_array().iter().all(|h| h.is_finite())
    }

    fn max_abs(&self) -> f64 {
        self.as_array().iter().fold(0.0, |max, h| max.max(h.abs()))
    }

    fn as_array(&self) -> [f64; 4] {
        [self.upper_left, self.lower_left, self.lower_right, self.upper_right]
    }
}

impl Default for CornerSeeds {
    fn default() -> Self {
        Self::uniform(0.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Points along one edge of the heightfield.
    pub grid_size: GridSize,

    /// Displacement magnitude used at the coarsest level.
    /// Random offsets are drawn from `[-d, +d]`.
    pub max_displacement: f64,

    /// How fast the displacement shrinks per level: `d <- d * 2^-roughness`.
    /// The larger the value, the smoother the terrain.
    pub roughness: f64,

    /// Seed elevations of the four corners. Never perturbed.
    pub corners: CornerSeeds,

    /// Horizontal distance between neighbouring grid points in world units.
    pub spacing: f64,
}

impl TerrainConfig {
    /// The 33x33 terrain of the smaller scene variants.
    pub fn small() -> Self {
        Self {
            grid_size: GridSize::SMALL,
            max_displacement: 8.0,
            roughness: 1.0,
            corners: CornerSeeds::default(),
            spacing: 1.0,
        }
    }

    /// The 65x65 terrain of the larger scene variants.
    pub fn large() -> Self {
        Self {
            grid_size: GridSize::LARGE,
            max_displacement: 16.0,
            ..Self::small()
        }
    }

    /// The largest magnitude any level draws from. Negative roughness makes
    /// the finer levels displace more than the coarsest one.
    pub fn peak_displacement(&self) -> f64 {
        if self.max_displacement == 0.0 {
            return 0.0;
        }
        let finest = (self.grid_size.levels() - 1) as f64;
        self.max_displacement * 2.0_f64.powf(-self.roughness * finest).max(1.0)
    }

    pub fn validate(&self) -> Result<(), TerrainError> {
        if !self.max_displacement.is_finite() || self.max_displacement < 0.0 {
            return Err(TerrainError::InvalidDisplacement(self.max_displacement));
        }
        if !self.roughness.is_finite() {
            return Err(TerrainError::InvalidRoughness(self.roughness));
        }
        let extent = self.spacing * self.grid_size.quads_per_dimension() as f64;
        if !extent.is_finite() || self.spacing <= 0.0 {
            return Err(TerrainError::InvalidSpacing(self.spacing));
        }
        if !self.corners.is_finite() {
            return Err(TerrainError::InvalidCorners);
        }

        // Every height is an average of earlier heights plus at most one draw
        // per level. The square step sums four of them.
        let levels = self.grid_size.levels() as f64;
        let height_bound = self.corners.max_abs() + levels * self.peak_displacement();
        if !(4.0 * height_bound).is_finite() {
            return Err(TerrainError::DisplacementOverflow {
                max_displacement: self.max_displacement,
                roughness: self.roughness,
            });
        }
        Ok(())
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self::small()
    }
}
