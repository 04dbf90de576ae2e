//! Placement - a flat occupant table implementing [`Position`].
//!
//! Built empty, piece by piece, or from the piece-placement field of a FEN
//! string. Ranks in FEN run from the last row down to row 0.

use crate::board::{Board, Position, StandardBoard};
use crate::error::BoardError;
use crate::types::{Coordinate, Piece};

/// Piece placement of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// A position snapshot: board geometry plus one optional piece per square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    board: StandardBoard,
    /// Row-major occupants (row * columns + column)
    squares: Vec<Option<Piece>>,
}

impl Default for Placement {
    fn default() -> Self {
        Self::empty(StandardBoard::default())
    }
}

impl Placement {
    /// Create a position with no pieces on `board`
    pub fn empty(board: StandardBoard) -> Self {
        Self {
            board,
            squares: vec![None; board.area()],
        }
    }

    pub fn starting_position() -> Self {
        // STARTING_FEN is a fixed, well-formed constant.
        match Self::from_fen(STARTING_FEN) {
            Ok(placement) => placement,
            Err(err) => unreachable!("starting position failed to parse: {err}"),
        }
    }

    /// Parse a FEN piece-placement field onto a standard 8x8 board.
    ///
    /// Only the first whitespace-separated field is read, so a full FEN record
    /// is accepted too.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        Self::from_fen_on(fen, StandardBoard::default())
    }

    /// Parse a FEN-style placement onto a board of any size.
    ///
    /// Empty-square runs may use multi-digit counts for boards wider than 9.
    pub fn from_fen_on(fen: &str, board: StandardBoard) -> Result<Self, BoardError> {
        let invalid = |reason: String| BoardError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };

        let field = fen
            .split_whitespace()
            .next()
            .ok_or_else(|| invalid("missing piece placement".to_string()))?;

        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != board.row_count() {
            return Err(invalid(format!(
                "expected {} ranks, found {}",
                board.row_count(),
                ranks.len()
            )));
        }

        let mut placement = Self::empty(board);
        for (i, rank) in ranks.iter().enumerate() {
            let row = board.row_count() - 1 - i;
            let mut column = 0usize;
            let mut run = 0usize;

            for ch in rank.chars() {
                if let Some(digit) = ch.to_digit(10) {
                    run = run
                        .checked_mul(10)
                        .and_then(|r| r.checked_add(digit as usize))
                        .filter(|&r| column + r <= board.column_count())
                        .ok_or_else(|| invalid(format!("rank {} has too many files", row + 1)))?;
                    continue;
                }
                if run > 0 {
                    column += run;
                    run = 0;
                }

                let piece = Piece::from_fen_char(ch)
                    .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
                if column >= board.column_count() {
                    return Err(invalid(format!("rank {} has too many files", row + 1)));
                }
                placement.put(Coordinate::new(row, column), Some(piece))?;
                column += 1;
            }
            column += run;

            if column != board.column_count() {
                return Err(invalid(format!(
                    "rank {} covers {} files, expected {}",
                    row + 1,
                    column,
                    board.column_count()
                )));
            }
        }

        Ok(placement)
    }

    /// Put (or clear, with `None`) the piece at `coordinate`.
    pub fn put(&mut self, coordinate: Coordinate, piece: Option<Piece>) -> Result<(), BoardError> {
        self.board.check_bounds(coordinate)?;
        let idx = self.board.index(coordinate);
        self.squares[idx] = piece;
        Ok(())
    }

    /// Builder-style [`Placement::put`].
    pub fn with_piece(mut self, coordinate: Coordinate, piece: Piece) -> Result<Self, BoardError> {
        self.put(coordinate, Some(piece))?;
        Ok(self)
    }

    /// FEN piece-placement field for this position.
    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for row in (0..self.board.row_count()).rev() {
            let mut empty = 0;
            for column in 0..self.board.column_count() {
                match self.squares[self.board.index(Coordinate::new(row, column))] {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row > 0 {
                out.push('/');
            }
        }
        out
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|sq| sq.is_some()).count()
    }
}

impl Position for Placement {
    type Board = StandardBoard;
    type Occupant = Piece;

    fn board(&self) -> &StandardBoard {
        &self.board
    }

    fn occupant_at(&self, coordinate: Coordinate) -> Result<Option<Piece>, BoardError> {
        self.board.check_bounds(coordinate)?;
        Ok(self.squares[self.board.index(coordinate)])
    }
}
