//! Frame decoration: border, rank margin, and caption banner.
//!
//! Layout of the finished text (white view, default art):
//!
//! ```text
//! <pad>##########...##   top border, grid width + 2
//! <m0 >#<grid row 0>#    one line per grid row, m = margin fragment
//! ...
//! <pad>##########...##   bottom border
//! <banner line 0>        fixed caption, 4 lines
//! ...
//! ```
//!
//! Margins and banners are plain data in [`FrameArt`]. They are checked
//! against the grid before anything is written.

use crate::config::LineEnding;
use crate::error::RenderError;
use crate::fb::CharGrid;
use crate::types::Orientation;

/// Blank padding before the border lines.
pub const BORDER_PAD: &str = "     ";

/// Rank digits 8 down to 1, five text rows per rank.
#[rustfmt::skip]
const WHITE_MARGIN: [&str; 40] = [
    "     ", "  _  ", " (_) ", " (_) ", "     ",
    "     ", "  __ ", "   / ", "  /  ", "     ",
    "     ", "     ", "  /  ", " (_) ", "     ",
    "     ", "  _  ", " |_  ", "  _) ", "     ",
    "     ", "   . ", "  /| ", " '-| ", "     ",
    "     ", "  _  ", "  _) ", "  _) ", "     ",
    "     ", "  _  ", "   ) ", "  /_ ", "     ",
    "     ", "     ", "  /| ", "   | ", "     ",
];

/// Rank digits 1 up to 8, five text rows per rank.
#[rustfmt::skip]
const BLACK_MARGIN: [&str; 40] = [
    "     ", "     ", "  /| ", "   | ", "     ",
    "     ", "  _  ", "   ) ", "  /_ ", "     ",
    "     ", "  _  ", "  _) ", "  _) ", "     ",
    "     ", "   . ", "  /| ", " '-| ", "     ",
    "     ", "  _  ", " |_  ", "  _) ", "     ",
    "     ", "     ", "  /  ", " (_) ", "     ",
    "     ", "  __ ", "   / ", "  /  ", "     ",
    "     ", "  _  ", " (_) ", " (_) ", "     ",
];

/// Files a to h.
const WHITE_BANNER: [&str; 4] = [
    "                   _        _        _        __       __       _              ",
    "         /\\       |_)      /        | \\      |_       |_       /        |_|    ",
    "        /--\\      |_)      \\_       |_/      |__      |        \\_?      | |    ",
    "                                                                               ",
];

/// Files h to a.
const BLACK_BANNER: [&str; 4] = [
    "                 _        __        __        _         _        _             ",
    "       |_|      /        |_        |_        | \\       /        |_)      /\\    ",
    "       | |      \\_?      |         |__       |_/       \\_       |_)     /--\\   ",
    "                                                                               ",
];

/// Margin tables and banners, one of each per orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameArt {
    pub white_margin: Vec<String>,
    pub black_margin: Vec<String>,
    pub white_banner: Vec<String>,
    pub black_banner: Vec<String>,
}

impl Default for FrameArt {
    /// Artwork for an 8x8 board with 5-row cells.
    fn default() -> Self {
        Self {
            white_margin: to_owned_lines(&WHITE_MARGIN),
            black_margin: to_owned_lines(&BLACK_MARGIN),
            white_banner: to_owned_lines(&WHITE_BANNER),
            black_banner: to_owned_lines(&BLACK_BANNER),
        }
    }
}

impl FrameArt {
    /// Blank margins for a grid of `grid_height` rows and no banner.
    ///
    /// For board geometries the default artwork was not drawn for.
    pub fn plain(grid_height: usize) -> Self {
        let blank = vec![BORDER_PAD.to_string(); grid_height];
        Self {
            white_margin: blank.clone(),
            black_margin: blank,
            white_banner: Vec::new(),
            black_banner: Vec::new(),
        }
    }

    pub fn margin(&self, orientation: Orientation) -> &[String] {
        match orientation {
            Orientation::White => &self.white_margin,
            Orientation::Black => &self.black_margin,
        }
    }

    pub fn banner(&self, orientation: Orientation) -> &[String] {
        match orientation {
            Orientation::White => &self.white_banner,
            Orientation::Black => &self.black_banner,
        }
    }

    /// Check both margin tables against a grid of `grid_height` rows.
    ///
    /// Every table must have exactly one fragment per grid row, and every
    /// fragment must be as wide as [`BORDER_PAD`].
    pub fn validate(&self, grid_height: usize) -> Result<(), RenderError> {
        let pad_width = BORDER_PAD.chars().count();
        for orientation in [Orientation::White, Orientation::Black] {
            let margin = self.margin(orientation);
            if margin.len() != grid_height {
                return Err(RenderError::configuration(format!(
                    "{} margin has {} rows, grid has {}",
                    orientation.as_str(),
                    margin.len(),
                    grid_height
                )));
            }
            if let Some((row, fragment)) = margin
                .iter()
                .enumerate()
                .find(|(_, f)| f.chars().count() != pad_width)
            {
                return Err(RenderError::configuration(format!(
                    "{} margin row {} is {:?}, expected {} characters",
                    orientation.as_str(),
                    row,
                    fragment,
                    pad_width
                )));
            }
        }
        Ok(())
    }
}

fn to_owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

/// Wraps an assembled grid into the final text.
#[derive(Debug, Clone, Copy)]
pub struct FrameDecorator<'a> {
    art: &'a FrameArt,
    border: char,
    line_ending: LineEnding,
}

impl<'a> FrameDecorator<'a> {
    pub fn new(art: &'a FrameArt, border: char, line_ending: LineEnding) -> Self {
        Self {
            art,
            border,
            line_ending,
        }
    }

    /// Width of every border and grid line for a grid `grid_width` wide.
    pub fn line_width(grid_width: usize) -> usize {
        BORDER_PAD.chars().count() + grid_width + 2
    }

    /// Produce the framed text for `grid` seen from `orientation`.
    pub fn decorate(&self, grid: &CharGrid, orientation: Orientation) -> Result<String, RenderError> {
        self.art.validate(grid.height())?;

        let eol = self.line_ending.as_str();
        let margin = self.art.margin(orientation);
        let banner = self.art.banner(orientation);
        let line_width = Self::line_width(grid.width());
        let capacity = (line_width + eol.len()) * (grid.height() + 2)
            + banner.iter().map(|l| l.len() + eol.len()).sum::<usize>();
        let mut out = String::with_capacity(capacity);

        self.push_border_line(&mut out, grid.width());

        for (y, fragment) in margin.iter().enumerate() {
            out.push_str(fragment);
            out.push(self.border);
            if let Some(row) = grid.row(y) {
                out.extend(row.iter());
            }
            out.push(self.border);
            out.push_str(eol);
        }

        self.push_border_line(&mut out, grid.width());

        for line in banner {
            out.push_str(line);
            out.push_str(eol);
        }

        Ok(out)
    }

    fn push_border_line(&self, out: &mut String, grid_width: usize) {
        out.push_str(BORDER_PAD);
        push_repeated(out, grid_width + 2, |_| self.border);
        out.push_str(self.line_ending.as_str());
    }
}

fn push_repeated(out: &mut String, count: usize, content: impl Fn(usize) -> char) {
    for i in 0..count {
        out.push(content(i));
    }
}
