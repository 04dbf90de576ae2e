//! Character grid used for cell blocks and the assembled board.

/// Marker for positions nothing has written yet.
pub const UNSET: char = '\0';

/// 2D grid of plain characters, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

/// One square's rendered appearance. Same storage as the board grid.
pub type CellBlock = CharGrid;

impl CharGrid {
    /// Create a grid filled with `fill`.
    pub fn new(width: usize, height: usize, fill: char) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Create a grid where every position is [`UNSET`].
    pub fn blank(width: usize, height: usize) -> Self {
        Self::new(width, height, UNSET)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write `ch` at `(x, y)`; out-of-range writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Row `y` as a slice, `None` past the last row.
    pub fn row(&self, y: usize) -> Option<&[char]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Write a string left to right from `(x, y)`, clipped at the right edge.
    pub fn put_str(&mut self, x: usize, y: usize, s: &str) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, ch);
            cx += 1;
        }
    }

    /// Copy all of `src` into this grid with its top-left corner at `(x, y)`.
    ///
    /// Parts of `src` that fall outside this grid are clipped.
    pub fn blit(&mut self, x: usize, y: usize, src: &CharGrid) {
        if x >= self.width {
            return;
        }
        for sy in 0..src.height {
            let ty = y + sy;
            if ty >= self.height {
                break;
            }
            let Some(src_row) = src.row(sy) else {
                break;
            };
            let visible = src.width.min(self.width.saturating_sub(x));
            let start = ty * self.width + x;
            self.cells[start..start + visible].copy_from_slice(&src_row[..visible]);
        }
    }

    /// Count positions still holding [`UNSET`].
    pub fn unset_count(&self) -> usize {
        self.cells.iter().filter(|&&ch| ch == UNSET).count()
    }

    /// Rows joined with `\n`, for tests and debugging.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            if let Some(row) = self.row(y) {
                out.extend(row.iter());
            }
            if y + 1 < self.height {
                out.push('\n');
            }
        }
        out
    }
}
