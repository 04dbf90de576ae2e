//! Render configuration.
//!
//! # Environment Variables
//!
//! - `ASCII_CHESS_ORIENTATION`: `white` or `black` (default: `white`)
//! - `ASCII_CHESS_LINE_ENDING`: `lf` or `crlf` (default: `lf`)
//!
//! Unrecognised values fall back to the default.

use crate::types::Orientation;

/// Line terminator placed after every output line, the last one included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Parse line ending name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lf" | "unix" => Some(LineEnding::Lf),
            "crlf" | "windows" => Some(LineEnding::CrLf),
            _ => None,
        }
    }
}

/// Settings chosen once per render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub orientation: Orientation,
    pub line_ending: LineEnding,
}

impl RenderConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let orientation = env::var("ASCII_CHESS_ORIENTATION")
            .ok()
            .and_then(|s| Orientation::from_str(&s))
            .unwrap_or_default();

        let line_ending = env::var("ASCII_CHESS_LINE_ENDING")
            .ok()
            .and_then(|s| LineEnding::from_str(&s))
            .unwrap_or_default();

        Self {
            orientation,
            line_ending,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}
