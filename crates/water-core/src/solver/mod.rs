//! Layered containment solver.
//!
//! Water is poured one horizontal layer at a time, bottom to top. For each
//! layer every interior cell at or below the layer floods outward; if the
//! flood reaches the border, or a cell already known to leak, the cell can
//! never hold water again. Otherwise it holds one unit at this layer.

mod scratch;
mod search;

pub use scratch::{RetentionState, VisitedSet, VisitedStrategy};
pub use search::SearchOutcome;

use crate::{Board, BoardError, Result};
use search::EscapeSearch;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Solver tuning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// How visited marks are cleared between searches
    pub visited: VisitedStrategy,
}

/// Summary of one solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Retained water, one unit per (cell, layer) pair
    pub volume: u64,
    /// Tallest wall on the board
    pub max_height: i32,
    /// Escape searches performed
    pub searches: u64,
    /// Interior cells that ended up unable to hold water at some layer
    pub failed_cells: usize,
}

/// Stateless solver; all scratch state is per-call.
#[derive(Debug, Clone, Default)]
pub struct ContainmentSolver {
    config: SolverConfig,
}

impl ContainmentSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Total water the board retains.
    pub fn solve(&self, board: &Board) -> Result<u64> {
        self.solve_with_stats(board).map(|stats| stats.volume)
    }

    /// Solve and report search statistics alongside the volume.
    pub fn solve_with_stats(&self, board: &Board) -> Result<SolveStats> {
        if board.width() <= 2 || board.height() <= 2 {
            // No interior cell can be walled in
            return Ok(SolveStats::default());
        }

        let max_height = validate(board)?;
        let mut stats = SolveStats {
            max_height,
            ..SolveStats::default()
        };

        let mut retention = RetentionState::new(board.len());
        let visited = VisitedSet::new(board.len(), self.config.visited);
        let mut search = EscapeSearch::new(board, visited);

        for layer in 0..max_height {
            let mut layer_volume = 0u64;
            for cell in board.interior_indices() {
                if board.height_at(cell) > layer || !retention.holds(cell) {
                    continue;
                }

                stats.searches += 1;
                match search.run(cell, layer, &retention) {
                    SearchOutcome::FullyContained => layer_volume += 1,
                    SearchOutcome::Escaped | SearchOutcome::BlockedByFailedNeighbor => {
                        retention.mark_failed(cell)
                    }
                }
            }
            trace!(layer, layer_volume, failed = retention.failed_count(), "layer filled");
            stats.volume += layer_volume;
        }

        stats.failed_cells = retention.failed_count();
        debug!(
            width = board.width(),
            height = board.height(),
            max_height,
            volume = stats.volume,
            searches = stats.searches,
            failed_cells = stats.failed_cells,
            "board solved"
        );
        Ok(stats)
    }
}

/// Reject negative heights and find the tallest wall.
fn validate(board: &Board) -> Result<i32> {
    let mut max_height = 0;
    for (index, &height) in board.heights().iter().enumerate() {
        if height < 0 {
            let pos = board.position(index);
            warn!(x = pos.x, y = pos.y, height, "rejecting board with negative height");
            return Err(BoardError::InvalidBoard {
                x: pos.x,
                y: pos.y,
                height,
            });
        }
        max_height = max_height.max(height);
    }
    Ok(max_height)
}

/// Water retained by a row-major height slice of `width * height` cells.
pub fn contained_water(heights: &[i32], width: usize, height: usize) -> Result<u64> {
    if width <= 2 || height <= 2 {
        return Ok(0);
    }
    let board = Board::new(width, height, heights.to_vec())?;
    ContainmentSolver::new().solve(&board)
}
