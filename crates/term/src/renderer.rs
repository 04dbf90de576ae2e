//! Renderer: turns a position into finished board text.
//!
//! Rendering is a pure function of `(position, style, orientation)`; nothing is
//! retained between calls. Writing the text somewhere is a separate step, see
//! [`write_text`].

use std::io::Write;

use anyhow::Result;
use crossterm::{style::Print, QueueableCommand};

use ascii_chess_core::{Board, Position};

use crate::board_view::BoardView;
use crate::config::{LineEnding, RenderConfig};
use crate::error::RenderError;
use crate::fb::UNSET;
use crate::frame::{FrameArt, FrameDecorator};
use crate::style::{AsciiStyle, DefaultAsciiStyle};
use crate::types::Orientation;

/// Renders positions with one style, frame artwork, and configuration.
#[derive(Debug, Clone)]
pub struct Renderer<S> {
    style: S,
    art: FrameArt,
    config: RenderConfig,
}

impl Default for Renderer<DefaultAsciiStyle> {
    fn default() -> Self {
        Self::new(DefaultAsciiStyle)
    }
}

impl<S: AsciiStyle> Renderer<S> {
    /// Create a renderer with the default artwork and configuration.
    pub fn new(style: S) -> Self {
        Self {
            style,
            art: FrameArt::default(),
            config: RenderConfig::default(),
        }
    }

    pub fn builder() -> RendererBuilder<S> {
        RendererBuilder::default()
    }

    pub fn with_art(mut self, art: FrameArt) -> Self {
        self.art = art;
        self
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.config.line_ending = line_ending;
        self
    }

    pub fn style(&self) -> &S {
        &self.style
    }

    pub fn art(&self) -> &FrameArt {
        &self.art
    }

    pub fn config(&self) -> RenderConfig {
        self.config
    }

    /// Render `position` from the configured orientation.
    pub fn render<P: Position>(&self, position: &P) -> Result<String, RenderError> {
        self.render_oriented(position, self.config.orientation)
    }

    /// Render `position` from `orientation`, overriding the configured one.
    ///
    /// All geometry and artwork checks run before any text is built.
    pub fn render_oriented<P: Position>(
        &self,
        position: &P,
        orientation: Orientation,
    ) -> Result<String, RenderError> {
        let board = position.board();
        tracing::debug!(
            rows = board.row_count(),
            columns = board.column_count(),
            cell_rows = S::CELL_ROWS,
            cell_cols = S::CELL_COLS,
            orientation = orientation.as_str(),
            "rendering position"
        );

        self.validate(board).inspect_err(|err| {
            tracing::warn!(error = %err, "refusing to render");
        })?;

        let grid = BoardView::new(&self.style).assemble(position, orientation)?;
        FrameDecorator::new(&self.art, self.style.border(), self.config.line_ending)
            .decorate(&grid, orientation)
    }

    /// Check style geometry and frame artwork against `board`.
    pub fn validate<B: Board>(&self, board: &B) -> Result<(), RenderError> {
        if S::CELL_ROWS == 0 || S::CELL_COLS == 0 {
            return Err(RenderError::configuration(format!(
                "style cell size {}x{} must be positive",
                S::CELL_ROWS,
                S::CELL_COLS
            )));
        }
        let fills = [
            self.style.light_background(),
            self.style.dark_background(),
            self.style.border(),
        ];
        if fills.contains(&UNSET) {
            return Err(RenderError::configuration(
                "style fills must not use the NUL character",
            ));
        }
        self.art.validate(board.row_count() * S::CELL_ROWS)
    }
}

/// Step-by-step construction of a [`Renderer`].
///
/// The style is required; artwork and configuration default when unset.
#[derive(Debug, Clone)]
pub struct RendererBuilder<S> {
    style: Option<S>,
    art: Option<FrameArt>,
    config: RenderConfig,
}

impl<S> Default for RendererBuilder<S> {
    fn default() -> Self {
        Self {
            style: None,
            art: None,
            config: RenderConfig::default(),
        }
    }
}

impl<S: AsciiStyle> RendererBuilder<S> {
    pub fn style(mut self, style: S) -> Self {
        self.style = Some(style);
        self
    }

    pub fn art(mut self, art: FrameArt) -> Self {
        self.art = Some(art);
        self
    }

    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.config.line_ending = line_ending;
        self
    }

    pub fn build(self) -> Result<Renderer<S>, RenderError> {
        let style = self
            .style
            .ok_or(RenderError::MissingCollaborator { name: "style" })?;
        Ok(Renderer {
            style,
            art: self.art.unwrap_or_default(),
            config: self.config,
        })
    }
}

/// Render `position` with [`DefaultAsciiStyle`] and default artwork.
pub fn render_default<P: Position>(
    position: &P,
    orientation: Orientation,
) -> Result<String, RenderError> {
    Renderer::default().render_oriented(position, orientation)
}

/// Queue `text` on `out` and flush it.
pub fn write_text<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.queue(Print(text))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascii_chess_core::Placement;

    #[test]
    fn builder_requires_a_style() {
        let err = Renderer::<DefaultAsciiStyle>::builder().build().unwrap_err();
        assert_eq!(err, RenderError::MissingCollaborator { name: "style" });

        let renderer = Renderer::<DefaultAsciiStyle>::builder()
            .style(DefaultAsciiStyle)
            .orientation(Orientation::Black)
            .build()
            .unwrap();
        assert_eq!(renderer.config().orientation, Orientation::Black);
        assert_eq!(renderer.art(), &FrameArt::default());
    }

    #[test]
    fn configured_orientation_is_used_by_render() {
        let pos = Placement::starting_position();
        let black = Renderer::default().with_orientation(Orientation::Black);
        assert_eq!(
            black.render(&pos).unwrap(),
            render_default(&pos, Orientation::Black).unwrap()
        );
    }

    #[test]
    fn write_text_emits_the_text_verbatim() {
        let mut out: Vec<u8> = Vec::new();
        write_text(&mut out, "ab\ncd\n").unwrap();
        assert_eq!(out, b"ab\ncd\n");
    }

    struct ZeroHeightStyle;

    impl AsciiStyle for ZeroHeightStyle {
        const CELL_ROWS: usize = 0;
        const CELL_COLS: usize = 4;

        fn light_background(&self) -> char {
            ' '
        }

        fn dark_background(&self) -> char {
            '.'
        }

        fn border(&self) -> char {
            '+'
        }

        fn render_cell<O: ascii_chess_core::Occupant>(
            &self,
            _block: &mut crate::fb::CellBlock,
            _coordinate: crate::types::Coordinate,
            _occupant: &O,
        ) {
        }
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        let renderer = Renderer::new(ZeroHeightStyle).with_art(FrameArt::plain(0));
        let err = renderer.render(&Placement::default()).unwrap_err();
        assert!(matches!(err, RenderError::Configuration { .. }));
    }

    struct NulBorderStyle;

    impl AsciiStyle for NulBorderStyle {
        const CELL_ROWS: usize = 1;
        const CELL_COLS: usize = 1;

        fn light_background(&self) -> char {
            ' '
        }

        fn dark_background(&self) -> char {
            '.'
        }

        fn border(&self) -> char {
            '\0'
        }

        fn render_cell<O: ascii_chess_core::Occupant>(
            &self,
            _block: &mut crate::fb::CellBlock,
            _coordinate: crate::types::Coordinate,
            _occupant: &O,
        ) {
        }
    }

    #[test]
    fn nul_fills_are_rejected_up_front() {
        let renderer = Renderer::new(NulBorderStyle).with_art(FrameArt::plain(8));
        let err = renderer.render(&Placement::default()).unwrap_err();
        match err {
            RenderError::Configuration { reason } => assert!(reason.contains("NUL"), "{reason}"),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn renderer_can_be_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Renderer<DefaultAsciiStyle>>();
        assert_send_sync::<RendererBuilder<DefaultAsciiStyle>>();

        let renderer = Renderer::default();
        let pos = Placement::starting_position();
        let expected = renderer.render(&pos).unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| renderer.render(&pos))).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().unwrap(), expected);
            }
        });
    }
}
