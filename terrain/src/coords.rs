// src/coords.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TerrainError;

/// Number of points along one edge of a square terrain grid.
///
/// Always of the form `2^k + 1` with `k >= 1`, so the grid halves cleanly
/// at every level of the midpoint recursion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GridSize(usize);

impl GridSize {
    /// Grid used by the smaller outdoor scene variants.
    pub const SMALL: GridSize = GridSize(33);
    /// Grid used by the larger outdoor scene variants.
    pub const LARGE: GridSize = GridSize(65);

    pub fn new(points: usize) -> Result<Self, TerrainError> {
        if points >= 3 && (points - 1).is_power_of_two() {
            Ok(Self(points))
        } else {
            Err(TerrainError::InvalidGridSize(points))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Cells along one edge, `N - 1`.
    pub fn quads_per_dimension(self) -> usize {
        self.0 - 1
    }

    pub fn point_count(self) -> usize {
        self.0 * self.0
    }

    /// Number of halvings the recursion performs before the step reaches 1.
    pub fn levels(self) -> u32 {
        self.quads_per_dimension().trailing_zeros()
    }
}

impl TryFrom<usize> for GridSize {
    type Error = TerrainError;

    fn try_from(points: usize) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}
