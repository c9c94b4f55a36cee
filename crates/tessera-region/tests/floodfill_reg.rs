//! Scanner versus flood fill regression test
//!
//! Runs the single-pass scanner and the flood fill reference over seeded
//! random grids and checks that both agree, that every cell is accounted
//! for, and that the scanner never holds more than two rows' worth of live
//! regions.

use tessera_region::{flood_fill_largest_region, scan_regions};
use tessera_test::{GridGenOptions, RegParams, random_grid};

#[test]
fn floodfill_reg() {
    let mut rp = RegParams::new("floodfill");

    let mut checked = 0;
    for size in 1..=24usize {
        for colors in [1u32, 2, 3, 5] {
            for seed in 0..4u64 {
                let options = GridGenOptions::new(size)
                    .with_colors(colors)
                    .with_seed(seed * 1000 + size as u64);
                let grid = random_grid(&options).expect("random grid");
                let rows = grid.to_rows();

                let report = scan_regions(&rows).expect("scan");
                let expected = flood_fill_largest_region(&rows).expect("flood fill");

                if !rp.compare_regions(&expected, &(report.largest.color, report.largest.count)) {
                    eprintln!("mismatch for {:?}:\n{}", options, grid);
                }
                rp.compare_values((size * size) as f64, report.total_cells as f64, 0.0);
                rp.compare_values(
                    1.0,
                    if report.peak_live <= 2 * size { 1.0 } else { 0.0 },
                    0.0,
                );
                checked += 1;
            }
        }
    }
    eprintln!("Checked {} random grids", checked);

    // Large grid with few colors exercises long merge chains
    let options = GridGenOptions::new(96).with_colors(2).with_seed(7);
    let grid = random_grid(&options).expect("large random grid");
    let rows = grid.to_rows();
    let report = scan_regions(&rows).expect("scan large");
    let expected = flood_fill_largest_region(&rows).expect("flood fill large");
    eprintln!(
        "96x96: largest ({}, {}), {} components, {} merges, peak {} live",
        report.largest.color, report.largest.count, report.retired, report.merges, report.peak_live
    );
    rp.compare_regions(&expected, &(report.largest.color, report.largest.count));
    rp.compare_values((96 * 96) as f64, report.total_cells as f64, 0.0);

    assert!(rp.cleanup(), "floodfill regression test failed");
}
