// src/heightmap.rs

use crate::grid::Grid;

/// Scalar elevations, one per grid point.
pub type HeightField = Grid<f64>;

impl Grid<f64> {
    /// Lowest and highest elevation in the field.
    pub fn min_max(&self) -> (f64, f64) {
        self.as_slice()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &h| {
                (lo.min(h), hi.max(h))
            })
    }
}
