use anyhow::{Context, Result};
use colorgrad::{CustomGradient, Gradient};
use image::{ImageBuffer, Rgb, RgbImage};
use nalgebra::Vector3;
use outdoor_terrain::{heightmap::HeightField, Terrain};

/// Share of the light that reaches faces turned away from the sun.
const AMBIENT: f64 = 0.25;

pub struct TerrainVisualizer {
    gradient: Gradient,
}

impl TerrainVisualizer {
    pub fn new() -> Result<Self> {
        let gradient = CustomGradient::new()
            .colors(&[
                colorgrad::Color::new(0.0, 0.0, 0.5, 1.0),   // Deep water
                colorgrad::Color::new(0.0, 0.0, 1.0, 1.0),   // Shallow water
                colorgrad::Color::new(0.9, 0.9, 0.2, 1.0),   // Beach
                colorgrad::Color::new(0.0, 0.6, 0.0, 1.0),   // Grass
                colorgrad::Color::new(0.5, 0.3, 0.0, 1.0),   // Mountain
                colorgrad::Color::new(1.0, 1.0, 1.0, 1.0),   // Snow
            ])
            .domain(&[0.0, 0.3, 0.35, 0.4, 0.8, 1.0])
            .build()
            .context("failed to build terrain gradient")?;

        Ok(Self { gradient })
    }

    /// Colours every grid point by its elevation relative to the field's own
    /// range. Each point becomes a `scale x scale` block.
    pub fn heightmap_image(&self, heights: &HeightField, scale: u32) -> RgbImage {
        let normalize = normalizer(heights);
        let colors: Vec<Vec<[f64; 3]>> = heights
            .rows()
            .map(|row| {
                row.iter()
                    .map(|&h| {
                        let c = self.gradient.at(normalize(h));
                        [c.r, c.g, c.b]
                    })
                    .collect()
            })
            .collect();
        block_image(heights.dim(), scale, |x, z| colors[z][x])
    }

    /// Like [`Self::heightmap_image`] but lit by a directional light using
    /// the estimated normals. `sun` points from the terrain towards the light.
    pub fn shaded_image(&self, terrain: &Terrain, sun: &Vector3<f64>, scale: u32) -> RgbImage {
        let heights = terrain.heights();
        let normals = terrain.normals();
        let sun = sun.normalize();
        let normalize = normalizer(heights);

        block_image(heights.dim(), scale, |x, z| {
            let c = self.gradient.at(normalize(heights[(x, z)]));
            let lambert = normals[(x, z)].dot(&sun).max(0.0);
            let light = AMBIENT + (1.0 - AMBIENT) * lambert;
            [c.r * light, c.g * light, c.b * light]
        })
    }
}

fn normalizer(heights: &HeightField) -> impl Fn(f64) -> f64 {
    let (low, high) = heights.min_max();
    let range = high - low;
    move |h| {
        if range > f64::EPSILON {
            (h - low) / range
        } else {
            0.5
        }
    }
}

fn block_image(dim: usize, scale: u32, color: impl Fn(usize, usize) -> [f64; 3]) -> RgbImage {
    let scale = scale.max(1);
    let side = dim as u32 * scale;
    ImageBuffer::from_fn(side, side, |px, py| {
        let [r, g, b] = color((px / scale) as usize, (py / scale) as usize);
        Rgb([
            (r.clamp(0.0, 1.0) * 255.0) as u8,
            (g.clamp(0.0, 1.0) * 255.0) as u8,
            (b.clamp(0.0, 1.0) * 255.0) as u8,
        ])
    })
}
