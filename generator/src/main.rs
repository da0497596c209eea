use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use nalgebra::Vector3;
use outdoor_terrain::{
    generator::{displacement, GlobalDisplacement},
    CornerSeeds, GridSize, Terrain, TerrainConfig,
};

mod visualizer;

use visualizer::TerrainVisualizer;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    /// 33x33 grid
    Small,
    /// 65x65 grid
    Large,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON terrain configuration; the flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Configuration to start from when no file is given
    #[arg(long, value_enum, default_value_t = Preset::Small)]
    preset: Preset,

    /// The seed for terrain generation
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Points along one edge of the grid (2^k + 1)
    #[arg(long)]
    size: Option<usize>,

    /// Displacement magnitude at the coarsest level
    #[arg(long)]
    max_displacement: Option<f64>,

    /// Per-level displacement decay exponent
    #[arg(long)]
    roughness: Option<f64>,

    /// Corner seed elevations
    #[arg(
        long,
        num_args = 4,
        value_names = ["UL", "LL", "LR", "UR"],
        allow_negative_numbers = true
    )]
    corners: Option<Vec<f64>>,

    /// The output PNG file path
    #[arg(short, long, default_value = "target/terrain.png")]
    output: PathBuf,

    /// Light the preview with the scene's sun instead of flat colours
    #[arg(long)]
    shaded: bool,

    /// Sun azimuth in degrees, measured from +X towards +Z
    #[arg(long, default_value_t = 225.0)]
    sun_azimuth: f64,

    /// Sun elevation above the horizon in degrees
    #[arg(long, default_value_t = 45.0)]
    sun_elevation: f64,

    /// Pixels per grid point when rendering the image
    #[arg(long, default_value_t = 8)]
    scale: u32,
}

impl Args {
    fn terrain_config(&self) -> Result<TerrainConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            None => match self.preset {
                Preset::Small => TerrainConfig::small(),
                Preset::Large => TerrainConfig::large(),
            },
        };

        if let Some(size) = self.size {
            config.grid_size = GridSize::new(size)?;
        }
        if let Some(max_displacement) = self.max_displacement {
            config.max_displacement = max_displacement;
        }
        if let Some(roughness) = self.roughness {
            config.roughness = roughness;
        }
        if let Some(&[upper_left, lower_left, lower_right, upper_right]) = self.corners.as_deref()
        {
            config.corners = CornerSeeds {
                upper_left,
                lower_left,
                lower_right,
                upper_right,
            };
        }

        Ok(config)
    }

    fn sun_direction(&self) -> Vector3<f64> {
        let azimuth = self.sun_azimuth.to_radians();
        let elevation = self.sun_elevation.to_radians();
        Vector3::new(
            elevation.cos() * azimuth.cos(),
            elevation.sin(),
            elevation.cos() * azimuth.sin(),
        )
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.terrain_config()?;
    log::info!(
        "Generating {} terrain (seed {}, displacement {}, roughness {})",
        config.grid_size,
        args.seed,
        config.max_displacement,
        config.roughness
    );

    displacement::seed_global(args.seed)?;
    let mut source = GlobalDisplacement::acquire()?;
    let terrain = Terrain::generate(config, &mut source)?;

    let visualizer = TerrainVisualizer::new()?;
    let image = if args.shaded {
        visualizer.shaded_image(&terrain, &args.sun_direction(), args.scale)
    } else {
        visualizer.heightmap_image(terrain.heights(), args.scale)
    };

    let mesh = terrain.into_mesh();
    log::info!(
        "Mesh: {} quads, {} vertices, {} bytes",
        mesh.quad_count(),
        mesh.len(),
        mesh.as_bytes().len()
    );

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    log::info!("Saving terrain visualization to {}...", args.output.display());
    image
        .save(&args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    log::info!("Done!");

    Ok(())
}
