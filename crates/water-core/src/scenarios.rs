//! Reference boards with known outcomes.

use crate::{Board, BoardError, ContainmentSolver, Result};
use serde::{Deserialize, Serialize};

/// Expected outcome of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expected {
    Volume(u64),
    Invalid,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Volume(v) => write!(f, "{}", v),
            Expected::Invalid => write!(f, "invalid board"),
        }
    }
}

/// A literal board and what solving it should produce
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub width: usize,
    pub heights: &'static [i32],
    pub expected: Expected,
}

/// Outcome of running one scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub board: Board,
    pub expected: Expected,
    /// Volume, or `None` when the board was rejected
    pub volume: Option<u64>,
    /// Rejection message for invalid boards
    pub error: Option<String>,
    pub passed: bool,
}

impl Scenario {
    pub fn board(&self) -> Result<Board> {
        Board::from_slice(self.width, self.heights)
    }

    /// Solve the board and compare against the expectation.
    pub fn check(&self, solver: &ContainmentSolver) -> Result<ScenarioReport> {
        let board = self.board()?;
        let (volume, error) = match solver.solve(&board) {
            Ok(volume) => (Some(volume), None),
            Err(err @ BoardError::InvalidBoard { .. }) => (None, Some(err.to_string())),
            Err(err) => return Err(err),
        };
        let passed = match self.expected {
            Expected::Volume(v) => volume == Some(v),
            Expected::Invalid => volume.is_none(),
        };
        Ok(ScenarioReport {
            name: self.name,
            board,
            expected: self.expected,
            volume,
            error,
            passed,
        })
    }
}

impl ScenarioReport {
    /// Text shown under the printed board: `= <volume>` or `= invalid board`
    pub fn outcome(&self) -> String {
        match self.volume {
            Some(v) => format!("= {}", v),
            None => "= invalid board".to_string(),
        }
    }
}

/// Look up a scenario by name
pub fn find(name: &str) -> Option<&'static Scenario> {
    CATALOG.iter().find(|s| s.name == name)
}

/// All reference scenarios
pub fn catalog() -> &'static [Scenario] {
    CATALOG
}

#[rustfmt::skip]
static CATALOG: &[Scenario] = &[
    Scenario {
        name: "sealed-channel",
        width: 5,
        heights: &[
            1, 1, 1, 1, 1,
            1, 0, 0, 0, 1,
            1, 1, 1, 1, 1,
        ],
        expected: Expected::Volume(3),
    },
    Scenario {
        name: "open-channel",
        width: 3,
        heights: &[
            1, 0, 1,
            1, 0, 1,
            1, 1, 1,
        ],
        expected: Expected::Volume(0),
    },
    Scenario {
        name: "diamond",
        width: 3,
        heights: &[
            0, 1, 0,
            1, 0, 1,
            0, 1, 0,
        ],
        expected: Expected::Volume(1),
    },
    Scenario {
        name: "negative-center",
        width: 3,
        heights: &[
            0, 1, 0,
            1, -1, 1,
            0, 1, 0,
        ],
        expected: Expected::Invalid,
    },
    Scenario {
        name: "winding-leak",
        width: 5,
        heights: &[
            1, 0, 1, 1, 1,
            1, 0, 1, 0, 1,
            1, 0, 0, 0, 1,
            1, 1, 1, 1, 1,
        ],
        expected: Expected::Volume(0),
    },
    Scenario {
        name: "shallow-basin",
        width: 5,
        heights: &[
            2, 1, 2, 2, 2,
            2, 1, 2, 0, 2,
            2, 1, 1, 1, 2,
            2, 2, 2, 2, 2,
        ],
        expected: Expected::Volume(1),
    },
    Scenario {
        name: "checkered-pockets",
        width: 5,
        heights: &[
            0, 2, 0, 2, 0,
            2, 0, 2, 0, 2,
            0, 2, 2, 1, 2,
            0, 0, 0, 2, 0,
        ],
        expected: Expected::Volume(5),
    },
    Scenario {
        name: "shared-pool",
        width: 5,
        heights: &[
            0, 2, 2, 2, 0,
            2, 0, 1, 0, 2,
            0, 2, 2, 1, 2,
            0, 0, 0, 2, 0,
        ],
        expected: Expected::Volume(6),
    },
    Scenario {
        name: "square-mixed",
        width: 4,
        heights: &[
            1, 2, 2, 2,
            2, 0, 1, 0,
            0, 1, 0, 1,
            2, 0, 1, 2,
        ],
        expected: Expected::Volume(2),
    },
    Scenario {
        name: "twin-pockets",
        width: 7,
        heights: &[
            2, 2, 2, 2, 2, 2, 2,
            2, 0, 2, 1, 1, 0, 2,
            2, 2, 2, 2, 2, 2, 2,
        ],
        expected: Expected::Volume(6),
    },
    Scenario {
        name: "partial-containment",
        width: 7,
        heights: &[
            2, 2, 2, 2, 2, 2, 2,
            2, 0, 2, 1, 1, 0, 1,
            2, 2, 2, 2, 2, 2, 2,
        ],
        expected: Expected::Volume(3),
    },
    Scenario {
        name: "staircase",
        width: 7,
        heights: &[
            0, 5, 5, 5, 5, 5, 0,
            9, 0, 1, 2, 3, 4, 5,
            0, 5, 5, 5, 5, 5, 0,
        ],
        expected: Expected::Volume(15),
    },
];
