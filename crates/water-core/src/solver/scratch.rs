//! Per-solve scratch buffers.
//!
//! Both buffers are owned by a single `solve` call and dropped when it returns.

use serde::{Deserialize, Serialize};

/// How the visited marks are cleared between searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisitedStrategy {
    /// Clear the whole array before every search
    Reset,
    /// Stamp cells with a per-search counter; clear only when it wraps
    #[default]
    Generation,
}

/// Which cells can still hold water at the layers tested so far.
///
/// Entries only ever go from holding to failed.
#[derive(Debug, Clone)]
pub struct RetentionState {
    holds: Vec<bool>,
    failed: usize,
}

impl RetentionState {
    pub fn new(cells: usize) -> Self {
        Self {
            holds: vec![true; cells],
            failed: 0,
        }
    }

    #[inline]
    pub fn holds(&self, index: usize) -> bool {
        self.holds[index]
    }

    /// Permanently exclude a cell
    pub fn mark_failed(&mut self, index: usize) {
        if std::mem::replace(&mut self.holds[index], false) {
            self.failed += 1;
        }
    }

    /// Number of cells marked failed so far
    pub fn failed_count(&self) -> usize {
        self.failed
    }
}

/// Visited marks for one flood fill at a time
#[derive(Debug, Clone)]
pub struct VisitedSet {
    strategy: VisitedStrategy,
    marks: Vec<u32>,
    stamp: u32,
}

impl VisitedSet {
    pub fn new(cells: usize, strategy: VisitedStrategy) -> Self {
        Self {
            strategy,
            marks: vec![0; cells],
            stamp: 0,
        }
    }

    /// Start a new traversal; every cell becomes unvisited.
    pub fn begin(&mut self) {
        match self.strategy {
            VisitedStrategy::Reset => {
                self.marks.fill(0);
                self.stamp = 1;
            }
            VisitedStrategy::Generation => {
                self.stamp = self.stamp.wrapping_add(1);
                if self.stamp == 0 {
                    self.marks.fill(0);
                    self.stamp = 1;
                }
            }
        }
    }

    /// Mark a cell, returning `true` if it was not yet visited in this traversal.
    #[inline]
    pub fn visit(&mut self, index: usize) -> bool {
        if self.marks[index] == self.stamp {
            return false;
        }
        self.marks[index] = self.stamp;
        true
    }

    #[inline]
    pub fn is_visited(&self, index: usize) -> bool {
        self.marks[index] == self.stamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retention_is_one_way() {
        let mut state = RetentionState::new(4);
        assert!(state.holds(2));
        state.mark_failed(2);
        state.mark_failed(2);
        assert!(!state.holds(2));
        assert!(state.holds(1));
        assert_eq!(state.failed_count(), 1);
    }

    #[test]
    fn test_visit_within_traversal() {
        for strategy in [VisitedStrategy::Reset, VisitedStrategy::Generation] {
            let mut visited = VisitedSet::new(3, strategy);
            visited.begin();
            assert!(visited.visit(1));
            assert!(!visited.visit(1));
            assert!(visited.is_visited(1));
            assert!(!visited.is_visited(0));
        }
    }

    #[test]
    fn test_begin_clears_previous_traversal() {
        for strategy in [VisitedStrategy::Reset, VisitedStrategy::Generation] {
            let mut visited = VisitedSet::new(3, strategy);
            visited.begin();
            visited.visit(0);
            visited.visit(2);
            visited.begin();
            assert!(!visited.is_visited(0));
            assert!(!visited.is_visited(2));
            assert!(visited.visit(0));
        }
    }

    #[test]
    fn test_generation_wraparound() {
        let mut visited = VisitedSet::new(2, VisitedStrategy::Generation);
        visited.stamp = u32::MAX - 1;
        visited.begin();
        visited.visit(0);
        // Wraps to zero, must clear stale marks
        visited.begin();
        assert_eq!(visited.stamp, 1);
        assert!(!visited.is_visited(0));
        assert!(visited.visit(0));
    }
}
