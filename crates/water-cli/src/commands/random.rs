//! Generate a board and solve it.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::debug;
use water_core::{Board, ContainmentSolver, Generator, GeneratorConfig, SolveStats};

#[derive(Args)]
pub struct RandomArgs {
    /// Number of columns
    #[arg(long, default_value_t = 12)]
    pub width: usize,

    /// Number of rows
    #[arg(long, default_value_t = 9)]
    pub height: usize,

    /// Tallest wall to generate
    #[arg(long, default_value_t = 6)]
    pub max_height: i32,

    /// Seed for a reproducible board
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Leave border cells random instead of raising them to the max height
    #[arg(long)]
    pub open_border: bool,

    /// Print a JSON report instead of the board
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct RandomReport {
    board: Board,
    stats: SolveStats,
}

impl RandomArgs {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            width: self.width,
            height: self.height,
            max_height: self.max_height,
            wall_border: !self.open_border,
        }
    }
}

pub fn execute(args: RandomArgs) -> Result<()> {
    let config = args.config();
    debug!(?config, seed = ?args.seed, "generating board");
    let mut generator = match args.seed {
        Some(seed) => Generator::seeded(seed, config),
        None => Generator::with_config(config),
    };

    let board = generator.generate();
    let stats = ContainmentSolver::new().solve_with_stats(&board)?;

    if args.json {
        let report = RandomReport { board, stats };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", board);
        println!("= {}", stats.volume);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_args() {
        let args = RandomArgs {
            width: 6,
            height: 4,
            max_height: 2,
            seed: None,
            open_border: true,
            json: false,
        };
        let config = args.config();
        assert_eq!(config.width, 6);
        assert_eq!(config.height, 4);
        assert_eq!(config.max_height, 2);
        assert!(!config.wall_border);
    }

    #[test]
    fn test_report_serializes() {
        let board = Generator::seeded(1, GeneratorConfig::small()).generate();
        let stats = ContainmentSolver::new().solve_with_stats(&board).unwrap();
        let json = serde_json::to_value(RandomReport { board, stats }).unwrap();
        assert_eq!(json["board"]["width"], 5);
        assert_eq!(json["stats"]["max_height"], 3);
    }
}
