//! Board printer (default binary).
//!
//! Renders one position to stdout. Configuration comes from the environment:
//! `ASCII_CHESS_FEN` (piece placement, default: starting position) plus the
//! variables read by [`RenderConfig::from_env`]. Log output is controlled by
//! `RUST_LOG`.

use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ascii_chess::core::{Board, Placement, Position, STARTING_FEN};
use ascii_chess::term::{
    write_text, AsciiStyle, DefaultAsciiStyle, FrameDecorator, RenderConfig, Renderer,
};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive("ascii_chess=info".parse()?))
        .init();

    let fen = std::env::var("ASCII_CHESS_FEN").unwrap_or_else(|_| STARTING_FEN.to_string());
    let position = Placement::from_fen(&fen).with_context(|| format!("parsing {fen:?}"))?;

    let config = RenderConfig::from_env();
    let renderer = Renderer::default().with_config(config);
    tracing::info!(
        fen = %position.to_fen(),
        orientation = config.orientation.as_str(),
        "rendering board"
    );

    warn_if_too_narrow(&position);

    let text = renderer.render(&position)?;
    write_text(&mut io::stdout(), &text)
}

fn warn_if_too_narrow(position: &Placement) {
    let grid_width = position.board().column_count() * DefaultAsciiStyle::CELL_COLS;
    let needed = FrameDecorator::line_width(grid_width);
    if let Ok((columns, _)) = crossterm::terminal::size() {
        if (columns as usize) < needed {
            tracing::warn!(
                terminal_columns = columns,
                needed,
                "terminal is narrower than the board; lines will wrap"
            );
        }
    }
}
