//! Error type shared by board construction and the solver.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors raised while building or solving a board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A cell carries a negative wall height
    #[error("invalid board: cell ({x}, {y}) has negative height {height}")]
    InvalidBoard { x: usize, y: usize, height: i32 },

    /// The number of cells does not match `width * height`
    #[error("board of {width}x{height} expects {} cells, got {cells}", .width * .height)]
    DimensionMismatch {
        width: usize,
        height: usize,
        cells: usize,
    },
}

impl BoardError {
    /// Whether this error reports a negative height
    pub fn is_invalid_board(&self) -> bool {
        matches!(self, BoardError::InvalidBoard { .. })
    }
}
