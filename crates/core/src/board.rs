//! Board module - read-only query traits and the standard board geometry
//!
//! Coordinates: `(row, column)` where row 0 is the first side's back rank and
//! column 0 is the a-file. Square (0, 0) is dark, colours alternate from there.

use crate::error::BoardError;
use crate::types::{Color, Coordinate, Piece, PieceKind, SquareColor};

/// Geometry and colouring source.
pub trait Board {
    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    /// Colour of the square at `coordinate`.
    ///
    /// Returns [`BoardError::OutOfBounds`] outside the board.
    fn square_color(&self, coordinate: Coordinate) -> Result<SquareColor, BoardError>;

    /// Check a coordinate against this board's dimensions
    fn check_bounds(&self, coordinate: Coordinate) -> Result<(), BoardError> {
        if coordinate.row < self.row_count() && coordinate.column < self.column_count() {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                coordinate,
                rows: self.row_count(),
                columns: self.column_count(),
            })
        }
    }
}

/// A piece-on-square view.
pub trait Occupant {
    fn color(&self) -> Color;

    fn kind(&self) -> PieceKind;
}

impl Occupant for Piece {
    fn color(&self) -> Color {
        self.color
    }

    fn kind(&self) -> PieceKind {
        self.kind
    }
}

/// Snapshot of a game state as seen by the renderer.
///
/// Implementations must stay unchanged for the duration of one render call.
pub trait Position {
    type Board: Board;
    type Occupant: Occupant;

    fn board(&self) -> &Self::Board;

    /// Occupant at `coordinate`, `None` for an empty square.
    fn occupant_at(&self, coordinate: Coordinate) -> Result<Option<Self::Occupant>, BoardError>;
}

/// Rectangular board with alternating square colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardBoard {
    rows: usize,
    columns: usize,
}

impl Default for StandardBoard {
    fn default() -> Self {
        Self {
            rows: crate::types::STANDARD_ROWS,
            columns: crate::types::STANDARD_COLUMNS,
        }
    }
}

impl StandardBoard {
    /// Create a board of `rows x columns` squares.
    ///
    /// Both dimensions must be non-zero.
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::InvalidDimensions { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    /// Iterate all coordinates, row-major from (0, 0)
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| Coordinate::new(row, column)))
    }

    #[inline(always)]
    pub(crate) fn index(&self, coordinate: Coordinate) -> usize {
        coordinate.row * self.columns + coordinate.column
    }

    pub(crate) fn area(&self) -> usize {
        self.rows * self.columns
    }
}

impl Board for StandardBoard {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        self.columns
    }

    fn square_color(&self, coordinate: Coordinate) -> Result<SquareColor, BoardError> {
        self.check_bounds(coordinate)?;
        if (coordinate.row + coordinate.column) % 2 == 0 {
            Ok(SquareColor::Dark)
        } else {
            Ok(SquareColor::Light)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_is_eight_by_eight() {
        let board = StandardBoard::default();
        assert_eq!(board.row_count(), 8);
        assert_eq!(board.column_count(), 8);
        assert_eq!(board.coordinates().count(), 64);
    }

    #[test]
    fn a1_is_dark_and_h1_is_light() {
        let board = StandardBoard::default();
        assert_eq!(board.square_color(Coordinate::new(0, 0)).unwrap(), SquareColor::Dark);
        assert_eq!(board.square_color(Coordinate::new(0, 7)).unwrap(), SquareColor::Light);
        assert_eq!(board.square_color(Coordinate::new(7, 7)).unwrap(), SquareColor::Dark);
    }

    #[test]
    fn square_color_rejects_out_of_bounds() {
        let board = StandardBoard::new(3, 5).unwrap();
        assert_eq!(
            board.square_color(Coordinate::new(3, 0)),
            Err(BoardError::OutOfBounds {
                coordinate: Coordinate::new(3, 0),
                rows: 3,
                columns: 5,
            })
        );
        assert!(board.square_color(Coordinate::new(2, 5)).is_err());
        assert!(board.square_color(Coordinate::new(2, 4)).is_ok());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            StandardBoard::new(0, 8),
            Err(BoardError::InvalidDimensions { rows: 0, columns: 8 })
        );
        assert!(StandardBoard::new(8, 0).is_err());
    }

    #[test]
    fn coordinates_are_row_major() {
        let board = StandardBoard::new(2, 3).unwrap();
        let coords: Vec<_> = board.coordinates().collect();
        assert_eq!(coords[0], Coordinate::new(0, 0));
        assert_eq!(coords[2], Coordinate::new(0, 2));
        assert_eq!(coords[3], Coordinate::new(1, 0));
        for (i, c) in coords.iter().enumerate() {
            assert_eq!(board.index(*c), i);
        }
    }
}
