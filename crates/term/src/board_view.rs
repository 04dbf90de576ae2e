//! BoardView: maps a [`Position`] into one character grid.
//!
//! This module is pure (no I/O). Each square becomes a `CELL_ROWS x CELL_COLS`
//! block; blocks tile the grid exactly, with no gaps and no overlap.

use ascii_chess_core::{Board, Occupant, Position};

use crate::error::RenderError;
use crate::fb::{CellBlock, CharGrid};
use crate::orientation::OrientationTransform;
use crate::style::AsciiStyle;
use crate::types::{Coordinate, Orientation, SquareColor};

/// Build one square's block: background fill, then the occupant's glyph.
///
/// The same inputs always produce the same block. The style must leave the
/// block at `CELL_ROWS x CELL_COLS` and must not write [`UNSET`](crate::fb::UNSET).
pub fn compose_cell<S, O>(
    style: &S,
    coordinate: Coordinate,
    color: SquareColor,
    occupant: Option<&O>,
) -> Result<CellBlock, RenderError>
where
    S: AsciiStyle,
    O: Occupant,
{
    let mut block = CharGrid::new(S::CELL_COLS, S::CELL_ROWS, style.background(color));
    if let Some(occupant) = occupant {
        style.render_cell(&mut block, coordinate, occupant);
    }

    if (block.height(), block.width()) != (S::CELL_ROWS, S::CELL_COLS) {
        return Err(RenderError::configuration(format!(
            "style resized the cell for {coordinate} to {}x{}, expected {}x{}",
            block.height(),
            block.width(),
            S::CELL_ROWS,
            S::CELL_COLS
        )));
    }
    if block.unset_count() != 0 {
        return Err(RenderError::configuration(format!(
            "style wrote the reserved NUL character into the cell for {coordinate}"
        )));
    }
    Ok(block)
}

/// Assembles the board grid for one style.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a, S> {
    style: &'a S,
}

impl<'a, S: AsciiStyle> BoardView<'a, S> {
    pub fn new(style: &'a S) -> Self {
        Self { style }
    }

    /// Placement transform for `board` drawn from `orientation`.
    pub fn transform<B: Board>(&self, board: &B, orientation: Orientation) -> OrientationTransform {
        OrientationTransform::new(
            board.row_count(),
            board.column_count(),
            S::CELL_ROWS,
            S::CELL_COLS,
            orientation,
        )
    }

    /// Render every square of `position` into a grid of
    /// `rows*CELL_ROWS` by `cols*CELL_COLS` characters.
    pub fn assemble<P: Position>(
        &self,
        position: &P,
        orientation: Orientation,
    ) -> Result<CharGrid, RenderError> {
        let board = position.board();
        let transform = self.transform(board, orientation);
        let (height, width) = transform.grid_size();
        let mut grid = CharGrid::blank(width, height);

        for row in 0..board.row_count() {
            for column in 0..board.column_count() {
                let coordinate = Coordinate::new(row, column);
                let color = board.square_color(coordinate)?;
                let occupant = position.occupant_at(coordinate)?;
                let block = compose_cell(self.style, coordinate, color, occupant.as_ref())?;

                let (y, x) = transform.cell_origin(coordinate);
                grid.blit(x, y, &block);
            }
        }

        let unset = grid.unset_count();
        if unset != 0 {
            return Err(RenderError::configuration(format!(
                "{unset} grid positions left unwritten; board geometry and placement disagree"
            )));
        }

        tracing::trace!(
            width,
            height,
            orientation = orientation.as_str(),
            "assembled board grid"
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::DefaultAsciiStyle;
    use crate::types::{Color, Piece, PieceKind};
    use ascii_chess_core::{BoardError, Placement, StandardBoard};

    #[test]
    fn empty_cell_is_pure_background() {
        let style = DefaultAsciiStyle;
        let light = compose_cell::<_, Piece>(&style, Coordinate::new(0, 1), SquareColor::Light, None)
            .unwrap();
        let dark = compose_cell::<_, Piece>(&style, Coordinate::new(0, 0), SquareColor::Dark, None)
            .unwrap();
        assert!(light.cells().iter().all(|&c| c == ' '));
        assert!(dark.cells().iter().all(|&c| c == ':'));
        assert_eq!((dark.width(), dark.height()), (9, 5));
    }

    #[test]
    fn composing_twice_is_stable() {
        let style = DefaultAsciiStyle;
        let knight = Piece::new(Color::Black, PieceKind::Knight);
        let a = compose_cell(&style, Coordinate::new(2, 2), SquareColor::Light, Some(&knight)).unwrap();
        let b = compose_cell(&style, Coordinate::new(2, 2), SquareColor::Light, Some(&knight)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn assembled_grid_has_no_unwritten_positions() {
        let style = DefaultAsciiStyle;
        let view = BoardView::new(&style);
        for orientation in [Orientation::White, Orientation::Black] {
            let grid = view
                .assemble(&Placement::starting_position(), orientation)
                .unwrap();
            assert_eq!(grid.width(), 72);
            assert_eq!(grid.height(), 40);
            assert_eq!(grid.unset_count(), 0);
        }
    }

    #[test]
    fn rectangular_boards_tile_exactly() {
        let style = DefaultAsciiStyle;
        let view = BoardView::new(&style);
        let pos = Placement::empty(StandardBoard::new(3, 5).unwrap());
        let grid = view.assemble(&pos, Orientation::Black).unwrap();
        assert_eq!((grid.width(), grid.height()), (45, 15));
        assert_eq!(grid.unset_count(), 0);
    }

    #[test]
    fn white_king_lands_on_e1_in_both_views() {
        let style = DefaultAsciiStyle;
        let view = BoardView::new(&style);
        let pos = Placement::default()
            .with_piece(Coordinate::new(0, 4), Piece::new(Color::White, PieceKind::King))
            .unwrap();

        // e1 bottom row, fifth column for white; top row, fourth column for black.
        let white = view.assemble(&pos, Orientation::White).unwrap();
        assert_eq!(white.get(4 * 9 + 4, 7 * 5 + 1), Some('+'));
        let black = view.assemble(&pos, Orientation::Black).unwrap();
        assert_eq!(black.get(3 * 9 + 4, 1), Some('+'));
    }

    struct ShrunkenPosition(Placement);

    impl Position for ShrunkenPosition {
        type Board = StandardBoard;
        type Occupant = Piece;

        fn board(&self) -> &StandardBoard {
            self.0.board()
        }

        fn occupant_at(&self, coordinate: Coordinate) -> Result<Option<Piece>, BoardError> {
            if coordinate.row == 7 {
                return Err(BoardError::OutOfBounds {
                    coordinate,
                    rows: 7,
                    columns: 8,
                });
            }
            self.0.occupant_at(coordinate)
        }
    }

    #[test]
    fn bounds_errors_from_the_position_propagate() {
        let style = DefaultAsciiStyle;
        let view = BoardView::new(&style);
        let err = view
            .assemble(&ShrunkenPosition(Placement::default()), Orientation::White)
            .unwrap_err();
        assert!(matches!(err, RenderError::Bounds(BoardError::OutOfBounds { .. })));
    }

    /// Swaps the block for a larger one, spilling into neighbouring squares.
    struct GrowingStyle;

    impl AsciiStyle for GrowingStyle {
        const CELL_ROWS: usize = 2;
        const CELL_COLS: usize = 2;

        fn light_background(&self) -> char {
            '.'
        }

        fn dark_background(&self) -> char {
            '='
        }

        fn border(&self) -> char {
            '|'
        }

        fn render_cell<O: Occupant>(&self, block: &mut CellBlock, _coordinate: Coordinate, _occupant: &O) {
            *block = CharGrid::new(2, 3, '!');
        }
    }

    #[test]
    fn resized_cell_blocks_are_rejected() {
        let style = GrowingStyle;
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let err = compose_cell(&style, Coordinate::new(1, 0), SquareColor::Light, Some(&pawn))
            .unwrap_err();
        match err {
            RenderError::Configuration { reason } => assert!(reason.contains("3x2"), "{reason}"),
            other => panic!("expected configuration error, got {other:?}"),
        }

        let err = BoardView::new(&style)
            .assemble(&Placement::starting_position(), Orientation::White)
            .unwrap_err();
        assert!(matches!(err, RenderError::Configuration { .. }));
    }

    /// Draws pieces with the grid's unwritten marker.
    struct NulGlyphStyle;

    impl AsciiStyle for NulGlyphStyle {
        const CELL_ROWS: usize = 1;
        const CELL_COLS: usize = 1;

        fn light_background(&self) -> char {
            '.'
        }

        fn dark_background(&self) -> char {
            '='
        }

        fn border(&self) -> char {
            '|'
        }

        fn render_cell<O: Occupant>(&self, block: &mut CellBlock, _coordinate: Coordinate, _occupant: &O) {
            block.set(0, 0, '\0');
        }
    }

    #[test]
    fn nul_glyphs_are_blamed_on_the_style() {
        let style = NulGlyphStyle;
        let king = Piece::new(Color::Black, PieceKind::King);
        let err = compose_cell(&style, Coordinate::new(0, 0), SquareColor::Dark, Some(&king))
            .unwrap_err();
        match err {
            RenderError::Configuration { reason } => assert!(reason.contains("style"), "{reason}"),
            other => panic!("expected configuration error, got {other:?}"),
        }

        // Empty squares never reach the glyph code.
        let empty = compose_cell::<_, Piece>(&style, Coordinate::new(0, 0), SquareColor::Dark, None);
        assert_eq!(empty.unwrap().cells(), &['=']);
    }
}
