//! Run the reference scenarios.

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::{info, warn};
use water_core::{scenarios, ContainmentSolver, Scenario, ScenarioReport};

#[derive(Args)]
pub struct ScenariosArgs {
    /// Only run the scenario with this name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Print a JSON report instead of the boards
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ScenariosArgs) -> Result<()> {
    let selected: Vec<&Scenario> = match &args.name {
        Some(name) => {
            let scenario = scenarios::find(name).with_context(|| format!("unknown scenario '{}'", name))?;
            vec![scenario]
        }
        None => scenarios::catalog().iter().collect(),
    };

    let solver = ContainmentSolver::new();
    let reports = run(&solver, &selected)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print!("{}", render(report));
        }
    }

    let failed: Vec<&str> = reports.iter().filter(|r| !r.passed).map(|r| r.name).collect();
    if !failed.is_empty() {
        bail!("{} scenario(s) did not match: {}", failed.len(), failed.join(", "));
    }
    info!(count = reports.len(), "all scenarios matched");
    Ok(())
}

fn run(solver: &ContainmentSolver, selected: &[&Scenario]) -> Result<Vec<ScenarioReport>> {
    selected
        .iter()
        .map(|scenario| -> Result<ScenarioReport> {
            let report = scenario
                .check(solver)
                .with_context(|| format!("scenario '{}' has a malformed board", scenario.name))?;
            if !report.passed {
                warn!(name = scenario.name, expected = %scenario.expected, "scenario mismatch");
            }
            Ok(report)
        })
        .collect()
}

/// Board, then its outcome, then a blank line
fn render(report: &ScenarioReport) -> String {
    format!("{}{}\n\n", report.board, report.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_volume() {
        let scenario = scenarios::find("diamond").unwrap();
        let report = scenario.check(&ContainmentSolver::new()).unwrap();
        assert_eq!(render(&report), "0 1 0\n1 0 1\n0 1 0\n= 1\n\n");
    }

    #[test]
    fn test_render_invalid() {
        let scenario = scenarios::find("negative-center").unwrap();
        let report = scenario.check(&ContainmentSolver::new()).unwrap();
        assert!(render(&report).ends_with("= invalid board\n\n"));
    }

    #[test]
    fn test_run_all() {
        let selected: Vec<&Scenario> = scenarios::catalog().iter().collect();
        let reports = run(&ContainmentSolver::new(), &selected).unwrap();
        assert_eq!(reports.len(), selected.len());
        assert!(reports.iter().all(|r| r.passed));
    }

    #[test]
    fn test_unknown_scenario() {
        let args = ScenariosArgs {
            name: Some("nope".to_string()),
            json: false,
        };
        let err = execute(args).unwrap_err();
        assert!(err.to_string().contains("unknown scenario 'nope'"));
    }
}
