//! Grid layout derived from the window size.
//!
//! The visualizer tiles the whole window with fixed-size square cells. The
//! layout is a pure function of the viewport: integer division truncates, so
//! any remainder at the right/bottom edge is simply left uncovered rather than
//! stretching cells to fit.

/// Side length of one visualizer cell, in pixels.
pub const CELL_SIZE: u32 = 15;

/// Cell grid dimensions for the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cell_size: u32,
    pub columns: u32,
    pub rows: u32,
}

impl Grid {
    /// Compute the grid for a viewport. Called at startup and on every resize.
    ///
    /// A viewport smaller than one cell in either dimension produces an empty
    /// grid, which is valid: the renderer just draws nothing.
    pub fn recompute(viewport_width: f32, viewport_height: f32, cell_size: u32) -> Self {
        let columns = viewport_width.max(0.0) as u32 / cell_size;
        let rows = viewport_height.max(0.0) as u32 / cell_size;

        Self {
            cell_size,
            columns,
            rows,
        }
    }

    /// Total number of cells, row-major.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}
