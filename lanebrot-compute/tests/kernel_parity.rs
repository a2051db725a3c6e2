//! Vectorized kernels must reproduce the baseline counts pixel for pixel,
//! including rows whose width is not a multiple of the lane count.

use lanebrot_compute::{
    compute_baseline, compute_vectorized, compute_vectorized_with, create_kernel,
    get_region_preset, EscapeGrid, EscapeLanes, RegionConfig, KERNEL_IDS,
};
use wide::{f32x4, f32x8};

const ROWS: usize = 6;

fn baseline(config: &RegionConfig, rows: usize, cols: usize) -> EscapeGrid {
    let mut grid = EscapeGrid::new(rows, cols).expect("valid grid shape");
    compute_baseline(config, &mut grid);
    grid
}

fn assert_parity<V: EscapeLanes>(config: &RegionConfig, rows: usize, cols: usize) {
    let expected = baseline(config, rows, cols);

    let mut actual = EscapeGrid::new(rows, cols).expect("valid grid shape");
    compute_vectorized_with::<V>(config, &mut actual);

    let mismatch = expected.first_mismatch(&actual).expect("same shape");
    assert_eq!(
        mismatch,
        None,
        "{} lanes, {}x{} grid: first mismatch (row, col, baseline, vectorized)",
        V::WIDTH,
        rows,
        cols
    );
}

fn tail_widths(w: usize) -> [usize; 4] {
    [w - 1, w, w + 1, 2 * w + 1]
}

fn test_regions() -> Vec<RegionConfig> {
    let mut regions: Vec<RegionConfig> = ["canonical", "seahorse", "elephant"]
        .iter()
        .map(|id| {
            get_region_preset(id)
                .expect("preset exists")
                .region()
                .expect("preset is valid")
        })
        .collect();
    regions.push(RegionConfig::new(-2.0, 1.0, -1.5, 1.5, 250.0, 100.0).unwrap());
    regions.push(RegionConfig::new(-0.7454, -0.7452, 0.1130, 0.1132, 1000.0, 4.0).unwrap());
    regions
}

#[test]
fn four_lanes_match_baseline_for_tail_widths() {
    for config in test_regions() {
        for cols in tail_widths(f32x4::WIDTH) {
            assert_parity::<f32x4>(&config, ROWS, cols);
        }
    }
}

#[test]
fn eight_lanes_match_baseline_for_tail_widths() {
    for config in test_regions() {
        for cols in tail_widths(f32x8::WIDTH) {
            assert_parity::<f32x8>(&config, ROWS, cols);
        }
    }
}

#[test]
fn single_column_grid_is_all_tail() {
    let config = RegionConfig::default();
    assert_parity::<f32x8>(&config, 10, 1);
    assert_parity::<f32x4>(&config, 10, 1);
}

#[test]
fn larger_grid_matches_baseline() {
    let config = RegionConfig::new(-2.0, 1.0, -1.5, 1.5, 500.0, 4.0).unwrap();
    assert_parity::<f32x8>(&config, 48, 101);
    assert_parity::<f32x4>(&config, 48, 101);
}

#[test]
fn default_vectorized_entry_point_matches_baseline() {
    let config = RegionConfig::default();
    let expected = baseline(&config, 20, 29);

    let mut actual = EscapeGrid::new(20, 29).unwrap();
    compute_vectorized(&config, &mut actual);

    assert_eq!(actual, expected);
}

#[test]
fn every_registered_kernel_matches_baseline() {
    let config = get_region_preset("seahorse").unwrap().region().unwrap();
    let expected = baseline(&config, 7, 19);

    for id in KERNEL_IDS {
        let kernel = create_kernel(id).unwrap();
        let mut grid = EscapeGrid::new(7, 19).unwrap();
        kernel.compute(&config, &mut grid);
        assert_eq!(
            expected.first_mismatch(&grid).unwrap(),
            None,
            "kernel {id} differs from baseline"
        );
    }
}

#[test]
fn fractional_cap_matches_baseline() {
    let config = RegionConfig::new(-2.0, 1.0, -1.5, 1.5, 37.9, 4.0).unwrap();
    for cols in tail_widths(f32x8::WIDTH) {
        assert_parity::<f32x8>(&config, ROWS, cols);
    }
}

#[test]
fn vectorized_overwrites_stale_grid_contents() {
    let config = RegionConfig::default();
    let expected = baseline(&config, 4, 11);

    let mut grid = EscapeGrid::from_rows(vec![vec![u32::MAX; 11]; 4]).unwrap();
    compute_vectorized(&config, &mut grid);

    assert_eq!(grid, expected);
}
