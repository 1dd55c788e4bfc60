//! Water retention on height-map boards.
//!
//! A board is a rectangular grid of wall heights. The solver pours water one
//! layer at a time and counts every (cell, layer) pair that stays walled in.
//!
//! ```
//! use water_core::{Board, ContainmentSolver};
//!
//! let board = Board::from_rows(&[
//!     [1, 1, 1, 1, 1],
//!     [1, 0, 0, 0, 1],
//!     [1, 1, 1, 1, 1],
//! ])
//! .unwrap();
//! assert_eq!(ContainmentSolver::new().solve(&board), Ok(3));
//! ```

mod board;
mod error;
mod generator;
pub mod scenarios;
pub mod solver;

pub use board::{Board, Position};
pub use error::{BoardError, Result};
pub use generator::{Generator, GeneratorConfig};
pub use scenarios::{Expected, Scenario, ScenarioReport};
pub use solver::{contained_water, ContainmentSolver, SearchOutcome, SolveStats, SolverConfig, VisitedStrategy};
