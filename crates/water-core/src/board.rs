//! Board: a rectangular, row-major grid of wall heights.
//!
//! Heights are kept as signed integers so that malformed input survives
//! construction and is rejected by the solver instead.

use crate::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// A cell position on the board (column `x`, row `y`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Immutable height-map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    width: usize,
    height: usize,
    heights: Vec<i32>,
}

/// Unchecked wire form, validated on deserialization
#[derive(Deserialize)]
struct RawBoard {
    width: usize,
    height: usize,
    heights: Vec<i32>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        Board::new(raw.width, raw.height, raw.heights)
    }
}

impl Board {
    /// Create a board from row-major heights.
    pub fn new(width: usize, height: usize, heights: Vec<i32>) -> Result<Self> {
        if width.checked_mul(height) != Some(heights.len()) {
            return Err(BoardError::DimensionMismatch {
                width,
                height,
                cells: heights.len(),
            });
        }
        Ok(Self {
            width,
            height,
            heights,
        })
    }

    /// Build from heights already known to hold `width * height` cells.
    pub(crate) fn from_parts(width: usize, height: usize, heights: Vec<i32>) -> Self {
        debug_assert_eq!(heights.len(), width * height);
        Self {
            width,
            height,
            heights,
        }
    }

    /// Create a board from a row-major slice whose row length is `width`.
    /// The row count is derived from the slice length.
    pub fn from_slice(width: usize, heights: &[i32]) -> Result<Self> {
        let height = if width == 0 { 0 } else { heights.len() / width };
        Self::new(width, height, heights.to_vec())
    }

    /// Create a board from explicit rows. All rows must have the same length.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut heights = Vec::with_capacity(width * rows.len());
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(BoardError::DimensionMismatch {
                    width,
                    height: rows.len(),
                    cells: rows.iter().map(|r| r.as_ref().len()).sum(),
                });
            }
            heights.extend_from_slice(row);
        }
        Self::new(width, rows.len(), heights)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Row-major heights
    pub fn heights(&self) -> &[i32] {
        &self.heights
    }

    /// Height at a linear index
    #[inline]
    pub fn height_at(&self, index: usize) -> i32 {
        self.heights[index]
    }

    /// Linear index of `(x, y)`, or `None` when out of bounds
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Position of a linear index
    #[inline]
    pub fn position(&self, index: usize) -> Position {
        Position::new(index % self.width, index / self.width)
    }

    /// Height at `(x, y)`, or `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<i32> {
        self.index(x, y).map(|i| self.heights[i])
    }

    /// Whether the cell lies on the outer ring of the board
    #[inline]
    pub fn is_border(&self, index: usize) -> bool {
        let Position { x, y } = self.position(index);
        x == 0 || y == 0 || x + 1 >= self.width || y + 1 >= self.height
    }

    /// In-bounds 4-connected neighbours: left, right, up, down
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> {
        let Position { x, y } = self.position(index);
        let width = self.width;
        [
            (x > 0).then(|| index - 1),
            (x + 1 < width).then(|| index + 1),
            (y > 0).then(|| index - width),
            (y + 1 < self.height).then(|| index + width),
        ]
        .into_iter()
        .flatten()
    }

    /// Interior (non-border) cells in row-major order
    pub fn interior_indices(&self) -> impl Iterator<Item = usize> + '_ {
        let inner_rows = 1..self.height.saturating_sub(1);
        inner_rows.flat_map(move |y| {
            (1..self.width.saturating_sub(1)).map(move |x| y * self.width + x)
        })
    }

    /// Number of interior cells
    pub fn interior_count(&self) -> usize {
        self.width.saturating_sub(2) * self.height.saturating_sub(2)
    }

    /// Tallest wall, or `None` on an empty board
    pub fn max_height(&self) -> Option<i32> {
        self.heights.iter().copied().max()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.heights.chunks(self.width) {
            let line: Vec<String> = row.iter().map(|h| h.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
