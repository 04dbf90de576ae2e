//! Terminal board renderer.
//!
//! Draws a chess position as fixed-geometry ASCII art: a bordered grid of
//! square blocks, a rank margin on the left, and a file banner underneath.
//! Everything here is pure and returns text; printing is left to the caller
//! ([`write_text`] is a thin helper for terminals).
//!
//! Pipeline:
//! - [`style`]: fill characters and piece glyphs ([`AsciiStyle`])
//! - [`board_view`]: one block per square, tiled into a [`CharGrid`]
//! - [`orientation`]: where each square's block goes for a given view
//! - [`frame`]: border, margin, and banner around the grid
//! - [`renderer`]: validation and orchestration
//!
//! # Example
//!
//! ```
//! use ascii_chess_core::Placement;
//! use ascii_chess_term::{render_default, Orientation};
//!
//! let text = render_default(&Placement::starting_position(), Orientation::White).unwrap();
//! let lines: Vec<&str> = text.lines().collect();
//! assert_eq!(lines.len(), 2 + 40 + 4);
//! assert_eq!(lines[0], format!("     {}", "#".repeat(74)));
//! ```

pub mod board_view;
pub mod config;
pub mod error;
pub mod fb;
pub mod frame;
pub mod orientation;
pub mod renderer;
pub mod style;

pub use ascii_chess_core as core;
pub use ascii_chess_types as types;

pub use board_view::{compose_cell, BoardView};
pub use config::{LineEnding, RenderConfig};
pub use error::RenderError;
pub use fb::{CellBlock, CharGrid};
pub use frame::{FrameArt, FrameDecorator, BORDER_PAD};
pub use orientation::OrientationTransform;
pub use renderer::{render_default, write_text, Renderer, RendererBuilder};
pub use style::{AsciiStyle, DefaultAsciiStyle};
pub use types::Orientation;
