use ascii_chess_types::Coordinate;

/// Errors raised by board queries and position construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A query addressed a square outside `[0, rows) x [0, columns)`.
    #[error("coordinate {coordinate:?} outside {rows}x{columns} board")]
    OutOfBounds {
        coordinate: Coordinate,
        rows: usize,
        columns: usize,
    },

    #[error("invalid board dimensions {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("invalid FEN placement {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },
}
