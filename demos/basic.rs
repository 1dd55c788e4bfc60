//! Basic example of using the water board solver

use water_core::{contained_water, scenarios, Board, ContainmentSolver, Generator, GeneratorConfig};

fn main() {
    // Build a board from rows
    let board = Board::from_rows(&[
        [2, 2, 2, 2, 2, 2, 2],
        [2, 0, 2, 1, 1, 0, 1],
        [2, 2, 2, 2, 2, 2, 2],
    ])
    .expect("rows are rectangular");

    println!("Board:");
    println!("{}", board);

    let solver = ContainmentSolver::new();
    match solver.solve_with_stats(&board) {
        Ok(stats) => {
            println!("Retained volume: {}", stats.volume);
            println!("Escape searches: {}", stats.searches);
            println!("Cells that leak: {}\n", stats.failed_cells);
        }
        Err(err) => println!("Error: {}\n", err),
    }

    // Flat slices work too, and negative heights are rejected
    let heights = [0, 1, 0, 1, -1, 1, 0, 1, 0];
    match contained_water(&heights, 3, 3) {
        Ok(volume) => println!("Volume: {}", volume),
        Err(err) => println!("Rejected: {}", err),
    }

    // Solve a random walled-in board
    println!("\n--- Random board ---\n");
    let mut generator = Generator::seeded(2024, GeneratorConfig::medium());
    let random = generator.generate();
    println!("{}", random);
    if let Ok(volume) = solver.solve(&random) {
        println!("= {}", volume);
    }

    // Run the reference scenarios
    println!("\n--- Reference scenarios ---\n");
    for scenario in scenarios::catalog() {
        if let Ok(report) = scenario.check(&solver) {
            let status = if report.passed { "ok" } else { "MISMATCH" };
            println!("{:<22} {:<18} {}", scenario.name, report.outcome(), status);
        }
    }
}
