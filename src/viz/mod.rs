//! Grid spectrum visualizer.
//!
//! A full-window grid of squares, each tied to one analyzer bin. Every frame
//! while running, each square is filled with its base color scaled by the
//! bin's byte magnitude, so quiet bins fade to black and loud bins light up.

pub mod cells;
pub mod grid;

use nannou::prelude::*;

use crate::audio::CELL_BIN_RANGE;
use cells::{shade, Cell};
use grid::Grid;

/// Frame-loop state. `Idle` means no per-frame work happens at all; the
/// original kept redrawing a near-black grid while paused, here pause really
/// stops the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VizState {
    Idle,
    Running,
}

pub struct Visualizer {
    grid: Grid,
    cells: Vec<Cell>,
    state: VizState,
}

impl Visualizer {
    pub fn new(viewport_width: f32, viewport_height: f32, cell_size: u32) -> Self {
        let grid = Grid::recompute(viewport_width, viewport_height, cell_size);
        let cells = cells::regenerate(&grid, CELL_BIN_RANGE);

        Self {
            grid,
            cells,
            state: VizState::Idle,
        }
    }

    /// Recompute the layout and replace the cell sequence wholesale.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.grid = Grid::recompute(viewport_width, viewport_height, self.grid.cell_size);
        self.cells = cells::regenerate(&self.grid, CELL_BIN_RANGE);
    }

    pub fn start(&mut self) {
        self.state = VizState::Running;
    }

    pub fn stop(&mut self) {
        self.state = VizState::Idle;
    }

    pub fn is_running(&self) -> bool {
        self.state == VizState::Running
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Fill every cell with its shaded color. Cells are laid out row-major
    /// from the top-left corner of the window.
    pub fn draw(&self, draw: &Draw, bounds: Rect, bins: &[u8]) {
        if !self.is_running() {
            return;
        }

        let cell = self.grid.cell_size as f32;

        for row in 0..self.grid.rows {
            for col in 0..self.grid.columns {
                let index = (row * self.grid.columns + col) as usize;
                let assigned = &self.cells[index];
                let value = bins.get(assigned.bin).copied().unwrap_or(0);
                let [r, g, b] = shade(assigned.base_color, value);

                let x = bounds.left() + col as f32 * cell + cell / 2.0;
                let y = bounds.top() - row as f32 * cell - cell / 2.0;

                draw.rect()
                    .x_y(x, y)
                    .w_h(cell, cell)
                    .color(srgba(r, g, b, 255u8));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let viz = Visualizer::new(800.0, 600.0, 15);
        assert!(!viz.is_running());
    }

    #[test]
    fn test_start_stop_lifecycle() {
        let mut viz = Visualizer::new(800.0, 600.0, 15);

        viz.start();
        assert!(viz.is_running());

        // Starting again is harmless; the loop is already running.
        viz.start();
        assert!(viz.is_running());

        viz.stop();
        assert!(!viz.is_running());
    }

    #[test]
    fn test_resize_replaces_cells() {
        let mut viz = Visualizer::new(1920.0, 1080.0, 15);
        assert_eq!(viz.cells().len(), 9216);

        viz.resize(600.0, 450.0);
        assert_eq!(viz.grid().columns, 40);
        assert_eq!(viz.grid().rows, 30);
        assert_eq!(viz.cells().len(), 1200);

        // A second resize replaces the sequence again; every bin index is
        // freshly drawn and in range, nothing stale survives.
        viz.resize(150.0, 150.0);
        assert_eq!(viz.cells().len(), 100);
        assert!(viz.cells().iter().all(|c| c.bin < CELL_BIN_RANGE));
    }

    #[test]
    fn test_resize_to_empty_viewport() {
        let mut viz = Visualizer::new(800.0, 600.0, 15);
        viz.resize(10.0, 10.0);
        assert!(viz.cells().is_empty());
    }
}
