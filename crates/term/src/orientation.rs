//! Board coordinate to text-grid placement.
//!
//! Board rows count up from the first side's back rank; text rows count down
//! from the top of the output. The black view additionally mirrors both axes.

use crate::types::{Coordinate, Orientation};

/// Maps board coordinates to cell origins in the assembled grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationTransform {
    rows: usize,
    columns: usize,
    cell_rows: usize,
    cell_cols: usize,
    orientation: Orientation,
}

impl OrientationTransform {
    pub fn new(
        rows: usize,
        columns: usize,
        cell_rows: usize,
        cell_cols: usize,
        orientation: Orientation,
    ) -> Self {
        Self {
            rows,
            columns,
            cell_rows,
            cell_cols,
            orientation,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Coordinate as seen from the viewing side (identity for white).
    ///
    /// `coordinate` must lie on the board.
    #[inline]
    pub fn viewed(&self, coordinate: Coordinate) -> Coordinate {
        match self.orientation {
            Orientation::White => coordinate,
            Orientation::Black => Coordinate::new(
                self.rows - 1 - coordinate.row,
                self.columns - 1 - coordinate.column,
            ),
        }
    }

    /// Screen cell `(row, column)`: row 0 is the top line of cells.
    #[inline]
    pub fn screen_cell(&self, coordinate: Coordinate) -> (usize, usize) {
        let target = self.viewed(coordinate);
        (self.rows - 1 - target.row, target.column)
    }

    /// Top-left `(row, column)` text offset of the cell block for `coordinate`.
    #[inline]
    pub fn cell_origin(&self, coordinate: Coordinate) -> (usize, usize) {
        let (screen_row, screen_col) = self.screen_cell(coordinate);
        (screen_row * self.cell_rows, screen_col * self.cell_cols)
    }

    /// Grid size in characters as `(height, width)`.
    pub fn grid_size(&self) -> (usize, usize) {
        (self.rows * self.cell_rows, self.columns * self.cell_cols)
    }
}
