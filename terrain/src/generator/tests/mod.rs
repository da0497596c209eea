mod heightmap_tests;

use crate::generator::DisplacementSource;

/// Returns a constant offset and remembers every magnitude it was asked for.
struct RecordingDisplacement {
    offset: f64,
    magnitudes: Vec<f64>,
}

impl RecordingDisplacement {
    fn new(offset: f64) -> Self {
        Self { offset, magnitudes: Vec::new() }
    }
}

impl DisplacementSource for RecordingDisplacement {
    fn displace(&mut self, magnitude: f64) -> f64 {
        self.magnitudes.push(magnitude);
        self.offset
    }
}
