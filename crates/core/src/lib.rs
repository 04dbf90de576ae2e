//! Board model module - the read-only collaborator contract for rendering
//!
//! The renderer never owns or mutates game state. It reads a position through
//! three small query traits defined here:
//!
//! - [`Board`]: geometry (row/column counts) and per-square colour
//! - [`Position`]: occupant lookup, delegating geometry to its [`Board`]
//! - [`Occupant`]: a piece's `(color, kind)` view
//!
//! Any chess engine can implement these over its own data structures. This
//! crate also ships one plain implementation used by the binary, benches, and
//! tests:
//!
//! - [`StandardBoard`]: any `R x C` board with the usual alternating colours
//! - [`Placement`]: a position backed by a flat occupant table, with FEN
//!   piece-placement parsing
//!
//! # Example
//!
//! ```
//! use ascii_chess_core::{Board, Placement, Position};
//! use ascii_chess_types::{Coordinate, PieceKind, SquareColor};
//!
//! let position = Placement::starting_position();
//! assert_eq!(position.board().row_count(), 8);
//!
//! let e1 = Coordinate::new(0, 4);
//! let king = position.occupant_at(e1).unwrap().unwrap();
//! assert_eq!(king.kind, PieceKind::King);
//! assert_eq!(position.board().square_color(e1).unwrap(), SquareColor::Dark);
//! ```

pub mod board;
pub mod error;
pub mod placement;

pub use ascii_chess_types as types;

pub use board::{Board, Occupant, Position, StandardBoard};
pub use error::BoardError;
pub use placement::{Placement, STARTING_FEN};
