//! Breadth-first escape search for a single cell at a single fill layer.

use super::scratch::{RetentionState, VisitedSet};
use crate::Board;
use std::collections::VecDeque;

/// Result of flooding outward from one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A path at or below the layer reaches the border
    Escaped,
    /// The flood reached a cell already known not to hold water
    BlockedByFailedNeighbor,
    /// Every path is walled in above the layer
    FullyContained,
}

impl SearchOutcome {
    pub fn retains(self) -> bool {
        self == SearchOutcome::FullyContained
    }
}

/// Reusable traversal state for escape searches over one board
pub(crate) struct EscapeSearch<'a> {
    board: &'a Board,
    visited: VisitedSet,
    queue: VecDeque<usize>,
}

impl<'a> EscapeSearch<'a> {
    pub(crate) fn new(board: &'a Board, visited: VisitedSet) -> Self {
        Self {
            board,
            visited,
            queue: VecDeque::new(),
        }
    }

    /// Flood from `start` through cells no higher than `layer`.
    ///
    /// The start cell is never treated as a wall. Any other cell above the
    /// layer blocks expansion on that path.
    pub(crate) fn run(&mut self, start: usize, layer: i32, retention: &RetentionState) -> SearchOutcome {
        let board = self.board;
        self.visited.begin();
        self.queue.clear();

        self.visited.visit(start);
        self.queue.push_back(start);

        while let Some(cell) = self.queue.pop_front() {
            if cell != start {
                if board.height_at(cell) > layer {
                    continue;
                }
                if !retention.holds(cell) {
                    return SearchOutcome::BlockedByFailedNeighbor;
                }
                if board.is_border(cell) {
                    return SearchOutcome::Escaped;
                }
            }

            for next in board.neighbors(cell) {
                if self.visited.visit(next) {
                    self.queue.push_back(next);
                }
            }
        }

        SearchOutcome::FullyContained
    }
}
