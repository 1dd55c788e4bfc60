mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Water board solver
#[derive(Parser)]
#[command(name = "water-board")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Count the water a height-map board retains", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the reference scenarios and check their expected volumes
    Scenarios(commands::scenarios::ScenariosArgs),
    /// Generate a random board and solve it
    Random(commands::random::RandomArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Scenarios(args) => commands::scenarios::execute(args),
        Commands::Random(args) => commands::random::execute(args),
    }
}
