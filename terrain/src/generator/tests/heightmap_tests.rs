use approx::assert_relative_eq;
use log::info;
use test_case::test_case;

use super::RecordingDisplacement;
use crate::{
    config::{CornerSeeds, TerrainConfig},
    coords::GridSize,
    generator::{HeightmapGenerator, SeededDisplacement, ZeroDisplacement},
};

fn config(size: usize, max_displacement: f64, corners: CornerSeeds) -> TerrainConfig {
    TerrainConfig {
        grid_size: GridSize::new(size).unwrap(),
        max_displacement,
        corners,
        ..TerrainConfig::small()
    }
}

fn sloped_corners() -> CornerSeeds {
    CornerSeeds {
        upper_left: 4.0,
        lower_left: 0.0,
        lower_right: 0.0,
        upper_right: 0.0,
    }
}

#[test_case(3)]
#[test_case(5)]
#[test_case(9)]
#[test_case(33)]
#[test_case(65)]
fn test_corners_are_preserved(size: usize) {
    let corners = CornerSeeds {
        upper_left: 3.5,
        lower_left: -1.25,
        lower_right: 7.0,
        upper_right: 0.5,
    };
    let generator = HeightmapGenerator::new(&config(size, 10.0, corners));
    let heights = generator.generate(&mut SeededDisplacement::new(42));

    let last = size - 1;
    assert_eq!(heights[(0, 0)], corners.upper_left);
    assert_eq!(heights[(0, last)], corners.lower_left);
    assert_eq!(heights[(last, last)], corners.lower_right);
    assert_eq!(heights[(last, 0)], corners.upper_right);
}

#[test]
fn test_corners_ignore_displacement() {
    let generator = HeightmapGenerator::new(&config(9, 5.0, sloped_corners()));
    let heights = generator.generate(&mut RecordingDisplacement::new(1.0));

    assert_eq!(heights[(0, 0)], 4.0);
    assert_eq!(heights[(0, 8)], 0.0);
    assert_eq!(heights[(8, 8)], 0.0);
    assert_eq!(heights[(8, 0)], 0.0);
}

#[test_case(33)]
#[test_case(65)]
fn test_every_point_is_finite(size: usize) {
    let generator = HeightmapGenerator::new(&config(size, 16.0, CornerSeeds::uniform(2.0)));
    let heights = generator.generate(&mut SeededDisplacement::new(7));

    assert_eq!(heights.as_slice().len(), size * size);
    for (x, z, h) in heights.iter() {
        assert!(h.is_finite(), "height at ({x}, {z}) is {h}");
    }
}

#[test]
fn test_zero_displacement_scenario() {
    let generator = HeightmapGenerator::new(&config(5, 0.0, sloped_corners()));
    let heights = generator.generate(&mut ZeroDisplacement);

    // first level
    assert_relative_eq!(heights[(2, 2)], 1.0);
    assert_relative_eq!(heights[(0, 2)], 5.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(heights[(2, 0)], 5.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(heights[(4, 2)], 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(heights[(2, 4)], 1.0 / 3.0, epsilon = 1e-12);

    // second level, cell at the origin
    assert_relative_eq!(heights[(1, 1)], 25.0 / 12.0, epsilon = 1e-12);
    assert_relative_eq!(heights[(1, 0)], 31.0 / 12.0, epsilon = 1e-12);
}

#[test]
fn test_shared_midpoint_keeps_first_cell_value() {
    let generator = HeightmapGenerator::new(&config(5, 0.0, sloped_corners()));
    let heights = generator.generate(&mut ZeroDisplacement);

    // (2, 1) is the right edge of cell (0, 0) and the left edge of cell
    // (2, 0); the cell at the origin is visited first.
    assert_relative_eq!(heights[(2, 1)], 19.0 / 12.0, epsilon = 1e-12);
}

#[test_case(5)]
#[test_case(33)]
#[test_case(65)]
fn test_zero_displacement_of_equal_corners_is_flat(size: usize) {
    let generator = HeightmapGenerator::new(&config(size, 0.0, CornerSeeds::uniform(3.0)));
    let heights = generator.generate(&mut ZeroDisplacement);

    for (_, _, &h) in heights.iter() {
        assert_relative_eq!(h, 3.0, epsilon = 1e-12);
    }
}

#[test]
fn test_zero_displacement_centre_is_bilinear() {
    let corners = CornerSeeds {
        upper_left: 1.0,
        lower_left: 2.0,
        lower_right: 6.0,
        upper_right: -3.0,
    };
    let generator = HeightmapGenerator::new(&config(33, 0.0, corners));
    let heights = generator.generate(&mut ZeroDisplacement);

    assert_relative_eq!(heights[(16, 16)], (1.0 + 2.0 + 6.0 - 3.0) / 4.0);
}

#[test_case(3)]
#[test_case(5)]
#[test_case(33)]
fn test_one_draw_per_point(size: usize) {
    let generator = HeightmapGenerator::new(&config(size, 1.0, CornerSeeds::default()));
    let mut source = RecordingDisplacement::new(0.0);
    generator.generate(&mut source);

    assert_eq!(source.magnitudes.len(), size * size - 4);
}

#[test]
fn test_displacement_decays_per_level() {
    let mut cfg = config(5, 2.0, CornerSeeds::default());
    cfg.roughness = 1.0;
    let mut source = RecordingDisplacement::new(0.0);
    HeightmapGenerator::new(&cfg).generate(&mut source);

    let (first, second) = source.magnitudes.split_at(5);
    assert!(first.iter().all(|&d| d == 2.0));
    assert_eq!(second.len(), 16);
    assert!(second.iter().all(|&d| d == 1.0));
}

#[test_case(0.5)]
#[test_case(2.0)]
fn test_roughness_sets_decay_rate(roughness: f64) {
    let mut cfg = config(9, 1.0, CornerSeeds::default());
    cfg.roughness = roughness;
    let mut source = RecordingDisplacement::new(0.0);
    HeightmapGenerator::new(&cfg).generate(&mut source);

    let last = *source.magnitudes.last().unwrap();
    // three levels, so the finest uses d * 2^(-2R)
    assert_relative_eq!(last, 2.0_f64.powf(-2.0 * roughness), epsilon = 1e-12);
}

#[test]
fn test_heights_stay_within_displacement_bound() {
    let max_displacement = 4.0;
    let generator = HeightmapGenerator::new(&config(65, max_displacement, CornerSeeds::default()));
    let heights = generator.generate(&mut SeededDisplacement::new(1234));

    let (low, high) = heights.min_max();
    info!("Heights range {low:.3}..{high:.3}");
    assert!(low >= -3.0 * max_displacement);
    assert!(high <= 3.0 * max_displacement);
    assert!(high > low, "displaced terrain should not be flat");
}

#[test]
fn test_seed_determinism() {
    let generator = HeightmapGenerator::new(&TerrainConfig::small());

    let heights1 = generator.generate(&mut SeededDisplacement::new(42));
    let heights2 = generator.generate(&mut SeededDisplacement::new(42));
    let heights3 = generator.generate(&mut SeededDisplacement::new(43));

    assert_eq!(heights1, heights2, "Same seed should produce identical heights");
    assert_ne!(heights1, heights3, "Different seeds should produce different heights");
}

#[test]
#[should_panic(expected = "outside")]
fn test_out_of_bounds_access_panics() {
    let generator = HeightmapGenerator::new(&config(5, 1.0, CornerSeeds::default()));
    let heights = generator.generate(&mut ZeroDisplacement);
    let _height = heights[(5, 0)];
}
