//! Per-cell state and frequency-bin assignment.
//!
//! Each cell keeps a fixed base color and samples one randomly chosen analyzer
//! bin. The whole sequence is rebuilt on every layout change so no index ever
//! refers to the previous grid's dimensions.

use rand::Rng;

use super::grid::Grid;

/// Base color shared by every cell. Spectrum energy only ever brightens it.
pub const BASE_COLOR: [u8; 3] = [28, 28, 28];

/// One grid square: fixed base color plus the analyzer bin it samples.
#[derive(Debug, Clone)]
pub struct Cell {
    pub base_color: [u8; 3],
    pub bin: usize,
}

/// Build a fresh cell sequence for `grid`, one cell per grid square in
/// row-major order, each with an independent uniform bin in `[0, bin_range)`.
pub fn regenerate(grid: &Grid, bin_range: usize) -> Vec<Cell> {
    let mut rng = rand::rng();

    (0..grid.cell_count())
        .map(|_| Cell {
            base_color: BASE_COLOR,
            bin: rng.random_range(0..bin_range),
        })
        .collect()
}

/// Scale a base color by a byte magnitude: 0 is black, 255 is the base color.
pub fn shade(base: [u8; 3], magnitude: u8) -> [u8; 3] {
    let brightness = magnitude as f32 / 255.0;
    [
        (base[0] as f32 * brightness) as u8,
        (base[1] as f32 * brightness) as u8,
        (base[2] as f32 * brightness) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_count_matches_grid() {
        let grid = Grid::recompute(1920.0, 1080.0, 15);
        let cells = regenerate(&grid, 128);
        assert_eq!(cells.len(), 9216);
    }

    #[test]
    fn test_bins_within_range() {
        let grid = Grid::recompute(600.0, 400.0, 15);
        let cells = regenerate(&grid, 128);
        assert!(cells.iter().all(|c| c.bin < 128));
    }

    #[test]
    fn test_base_color_uniform() {
        let grid = Grid::recompute(300.0, 300.0, 15);
        for cell in regenerate(&grid, 64) {
            assert_eq!(cell.base_color, BASE_COLOR);
        }
    }

    #[test]
    fn test_empty_grid_yields_no_cells() {
        let grid = Grid::recompute(10.0, 10.0, 15);
        assert!(regenerate(&grid, 128).is_empty());
    }

    #[test]
    fn test_shade_silence_is_black() {
        assert_eq!(shade([28, 28, 28], 0), [0, 0, 0]);
        assert_eq!(shade([255, 120, 3], 0), [0, 0, 0]);
    }

    #[test]
    fn test_shade_full_magnitude_is_base() {
        assert_eq!(shade([28, 28, 28], 255), [28, 28, 28]);
        assert_eq!(shade([255, 120, 3], 255), [255, 120, 3]);
    }

    #[test]
    fn test_shade_scales_each_channel() {
        let shaded = shade([100, 200, 50], 128);
        let brightness = 128.0 / 255.0;
        assert_eq!(shaded[0], (100.0 * brightness) as u8);
        assert_eq!(shaded[1], (200.0 * brightness) as u8);
        assert_eq!(shaded[2], (50.0 * brightness) as u8);
    }

    #[test]
    fn test_shade_monotonic_in_magnitude() {
        let mut prev = 0u8;
        for v in [0u8, 60, 128, 200, 255] {
            let shaded = shade([200, 200, 200], v);
            assert!(shaded[0] >= prev);
            prev = shaded[0];
        }
    }
}
