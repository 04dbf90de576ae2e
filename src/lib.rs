//! ASCII chess board rendering (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them under stable `ascii_chess::{types,core,term}` paths.

pub use ascii_chess_core as core;
pub use ascii_chess_term as term;
pub use ascii_chess_types as types;
