//! Style contract: background fills, border fill, and piece glyph stamping.
//!
//! A style fixes the cell geometry (`CELL_ROWS x CELL_COLS`) for every render
//! it takes part in. The renderer only talks to the [`AsciiStyle`] trait, so
//! new artwork is a new implementation, not a renderer change.

use ascii_chess_core::Occupant;

use crate::fb::CellBlock;
use crate::types::{Color, Coordinate, PieceKind, SquareColor};

/// Pluggable rendering policy.
///
/// Implementations must be reentrant: the same style value may be shared by
/// renders running on several threads.
pub trait AsciiStyle {
    /// Text rows per board square.
    const CELL_ROWS: usize;
    /// Text columns per board square.
    const CELL_COLS: usize;

    fn light_background(&self) -> char;

    fn dark_background(&self) -> char;

    fn border(&self) -> char;

    /// Background fill for a square of the given colour.
    fn background(&self, color: SquareColor) -> char {
        match color {
            SquareColor::Light => self.light_background(),
            SquareColor::Dark => self.dark_background(),
        }
    }

    /// Overlay the glyph for `occupant` onto an already-filled `block`.
    ///
    /// Must not resize the block. `coordinate` is informational; a style that
    /// varies glyphs by square must say so.
    fn render_cell<O: Occupant>(&self, block: &mut CellBlock, coordinate: Coordinate, occupant: &O);
}

/// Glyph art rows per piece.
const GLYPH_ROWS: usize = 3;
/// Glyph art columns per piece.
const GLYPH_COLS: usize = 7;
/// Art character replaced by the side's body fill.
const BODY: char = '@';
/// Art character left as background.
const TRANSPARENT: char = ' ';

/// Piece art, indexed by `PieceKind::index()`.
const GLYPHS: [[&str; GLYPH_ROWS]; 6] = [
    // Pawn
    ["   _   ", "  (@)  ", "  /@\\  "],
    // Knight
    ["  ,^.  ", " (@@ o ", "  /@@\\ "],
    // Bishop
    ["   o   ", "  (@)  ", " /@@@\\ "],
    // Rook
    [" |_|_| ", "  |@|  ", " /@@@\\ "],
    // Queen
    [" \\^^^/ ", "  )@(  ", " /@@@\\ "],
    // King
    ["  _+_  ", "  )@(  ", " /@@@\\ "],
];

/// The stock style: 5x9 cells, `' '` light squares, `':'` dark squares, `'#'`
/// border. White pieces are drawn hollow, black pieces filled with `'#'`.
///
/// Glyphs do not depend on the square they are drawn on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultAsciiStyle;

impl DefaultAsciiStyle {
    pub fn new() -> Self {
        Self
    }

    fn body_fill(color: Color) -> char {
        match color {
            Color::White => ' ',
            Color::Black => '#',
        }
    }

    /// Art rows for one piece kind.
    pub fn glyph(kind: PieceKind) -> &'static [&'static str; GLYPH_ROWS] {
        &GLYPHS[kind.index()]
    }
}

impl AsciiStyle for DefaultAsciiStyle {
    const CELL_ROWS: usize = 5;
    const CELL_COLS: usize = 9;

    fn light_background(&self) -> char {
        ' '
    }

    fn dark_background(&self) -> char {
        ':'
    }

    fn border(&self) -> char {
        '#'
    }

    fn render_cell<O: Occupant>(&self, block: &mut CellBlock, _coordinate: Coordinate, occupant: &O) {
        // Centre the glyph inside the cell.
        let top = (block.height().saturating_sub(GLYPH_ROWS)) / 2;
        let left = (block.width().saturating_sub(GLYPH_COLS)) / 2;
        let body = Self::body_fill(occupant.color());

        for (dy, line) in Self::glyph(occupant.kind()).iter().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                match ch {
                    TRANSPARENT => {}
                    BODY => block.set(left + dx, top + dy, body),
                    _ => block.set(left + dx, top + dy, ch),
                }
            }
        }
    }
}
