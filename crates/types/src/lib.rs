//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are pure data structures with no external dependencies, making them
//! usable by any board model, style, or output layer.
//!
//! # Board Coordinates
//!
//! A [`Coordinate`] is a zero-based `(row, column)` pair:
//!
//! - **Row 0** is the first side's back rank (rank 1 for white)
//! - **Column 0** is the a-file
//! - Standard boards are 8x8 (see [`STANDARD_ROWS`] / [`STANDARD_COLUMNS`])
//!
//! # Orientation
//!
//! | Orientation | Bottom-left square | Top-right square |
//! |-------------|--------------------|------------------|
//! | `White` | (0, 0) | (rows-1, cols-1) |
//! | `Black` | (rows-1, cols-1) | (0, 0) |
//!
//! # Examples
//!
//! ```
//! use ascii_chess_types::{Color, Coordinate, Orientation, Piece, PieceKind};
//!
//! let king = Piece::new(Color::White, PieceKind::King);
//! assert_eq!(king.fen_char(), 'K');
//! assert_eq!(Piece::from_fen_char('k'), Some(Piece::new(Color::Black, PieceKind::King)));
//!
//! let e4 = Coordinate::new(3, 4);
//! assert_eq!(e4.to_string(), "e4");
//!
//! assert_eq!(Orientation::from(Color::Black), Orientation::Black);
//! assert_eq!(Orientation::White.flipped(), Orientation::Black);
//! ```

use std::fmt;

/// Rows on a standard chess board.
pub const STANDARD_ROWS: usize = 8;

/// Columns on a standard chess board.
pub const STANDARD_COLUMNS: usize = 8;

/// Side colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// Piece kind (colour is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All kinds, in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase FEN letter.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse from a FEN letter (case-insensitive)
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A coloured piece standing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn fen_char(&self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, kind })
    }
}

/// Zero-based board address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Coordinate {
    /// Algebraic form for the first 26 columns (`a1`, `h8`), `(row,col)` beyond.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.column < 26 {
            let file = char::from(b'a' + self.column as u8);
            write!(f, "{}{}", file, self.row + 1)
        } else {
            write!(f, "({},{})", self.row, self.column)
        }
    }
}

/// Colour of a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareColor {
    Light,
    Dark,
}

/// Which side the board is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// First side at the bottom (white view).
    #[default]
    White,
    /// Second side at the bottom (black view), rows and columns mirrored.
    Black,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::White => Orientation::Black,
            Orientation::Black => Orientation::White,
        }
    }

    /// Parse orientation from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "white" | "w" => Some(Orientation::White),
            "black" | "b" => Some(Orientation::Black),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::White => "white",
            Orientation::Black => "black",
        }
    }
}

impl From<Color> for Orientation {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Orientation::White,
            Color::Black => Orientation::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_chars_map_both_ways() {
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                let piece = Piece::new(color, kind);
                assert_eq!(Piece::from_fen_char(piece.fen_char()), Some(piece));
            }
        }
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('3'), None);
    }

    #[test]
    fn kind_indices_follow_all_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn coordinate_display_uses_algebraic_names() {
        assert_eq!(Coordinate::new(0, 0).to_string(), "a1");
        assert_eq!(Coordinate::new(7, 7).to_string(), "h8");
        assert_eq!(Coordinate::new(2, 30).to_string(), "(2,30)");
    }

    #[test]
    fn orientation_parsing() {
        assert_eq!(Orientation::from_str("WHITE"), Some(Orientation::White));
        assert_eq!(Orientation::from_str(" black "), Some(Orientation::Black));
        assert_eq!(Orientation::from_str("b"), Some(Orientation::Black));
        assert_eq!(Orientation::from_str("red"), None);
        assert_eq!(Orientation::default(), Orientation::White);
        assert_eq!(Orientation::Black.flipped(), Orientation::White);
    }

    #[test]
    fn colors_are_opposites() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite().index(), 0);
    }
}
