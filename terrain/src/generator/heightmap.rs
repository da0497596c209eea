use log::trace;

use crate::{
    config::{CornerSeeds, TerrainConfig},
    coords::GridSize,
    generator::DisplacementSource,
    grid::Grid,
    heightmap::HeightField,
};

/// Midpoint-displacement (diamond-square) heightfield synthesis.
pub struct HeightmapGenerator {
    size: GridSize,
    max_displacement: f64,
    roughness: f64,
    corners: CornerSeeds,
}

impl HeightmapGenerator {
    pub fn new(config: &TerrainConfig) -> Self {
        Self {
            size: config.grid_size,
            max_displacement: config.max_displacement,
            roughness: config.roughness,
            corners: config.corners,
        }
    }

    /// Runs the full recursion, drawing exactly `N^2 - 4` displacements.
    ///
    /// Cells are visited with `x` as the outer loop. Within a cell the
    /// centre is settled first, then the top, bottom, left and right edge
    /// midpoints. A midpoint shared with a cell visited earlier at the same
    /// level keeps the value that cell gave it.
    pub fn generate<S>(&self, source: &mut S) -> HeightField
    where
        S: DisplacementSource + ?Sized,
    {
        let n = self.size.get();
        let last = n - 1;
        let mut canvas = Canvas::new(self.size);

        canvas.seed(0, 0, self.corners.upper_left);
        canvas.seed(0, last, self.corners.lower_left);
        canvas.seed(last, last, self.corners.lower_right);
        canvas.seed(last, 0, self.corners.upper_right);

        let decay = 0.5_f64.powf(self.roughness);
        let mut magnitude = self.max_displacement;
        let mut step = last;

        while step > 1 {
            let half = step / 2;
            trace!("Midpoint level: step {step}, displacement {magnitude:.4}");

            for x in (0..last).step_by(step) {
                for z in (0..last).step_by(step) {
                    let ul = canvas.height(x, z);
                    let ur = canvas.height(x + step, z);
                    let ll = canvas.height(x, z + step);
                    let lr = canvas.height(x + step, z + step);

                    // square
                    let centre = canvas.settle(
                        x + half,
                        z + half,
                        (ul + ur + ll + lr) / 4.0,
                        magnitude,
                        source,
                    );

                    // diamonds
                    let edges = [
                        (x + half, z, ul, ur),
                        (x + half, z + step, ll, lr),
                        (x, z + half, ul, ll),
                        (x + step, z + half, ur, lr),
                    ];
                    for (ex, ez, a, b) in edges {
                        canvas.settle(ex, ez, (a + b + centre) / 3.0, magnitude, source);
                    }
                }
            }

            step = half;
            magnitude *= decay;
        }

        debug_assert!(canvas.is_complete());
        canvas.heights
    }
}

/// Heightfield under construction plus which points are final.
struct Canvas {
    heights: HeightField,
    settled: Grid<bool>,
}

impl Canvas {
    fn new(size: GridSize) -> Self {
        Self {
            heights: Grid::filled(size, 0.0),
            settled: Grid::filled(size, false),
        }
    }

    fn height(&self, x: usize, z: usize) -> f64 {
        self.heights[(x, z)]
    }

    fn seed(&mut self, x: usize, z: usize, height: f64) {
        self.heights.set(x, z, height);
        self.settled.set(x, z, true);
    }

    /// Writes `base` plus one displacement unless the point is already
    /// settled, and returns the point's final height either way.
    fn settle<S>(&mut self, x: usize, z: usize, base: f64, magnitude: f64, source: &mut S) -> f64
    where
        S: DisplacementSource + ?Sized,
    {
        if self.settled[(x, z)] {
            return self.heights[(x, z)];
        }
        let height = base + source.displace(magnitude);
        self.seed(x, z, height);
        height
    }

    fn is_complete(&self) -> bool {
        self.settled.as_slice().iter().all(|&done| done)
    }
}
