//! Swisspair CLI - Command-line interface
//!
//! Commands:
//! - run: Run a tournament, entering results at the terminal
//! - simulate: Run a tournament with random results
//! - recommend: Show recommended and maximum rounds for a roster size

mod prompt;
mod report;
mod roster;
mod run_cmd;
mod simulate_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use swisspair_tournament::{max_rounds, recommend_rounds};

#[derive(Parser)]
#[command(name = "swisspair")]
#[command(about = "Swiss-system tournament pairing and standings")]
struct Cli {
    /// Random seed for the first-round shuffle
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a tournament, entering results at the terminal
    Run(run_cmd::RunArgs),
    /// Run a tournament with random results
    Simulate(simulate_cmd::SimulateArgs),
    /// Show recommended and maximum rounds for a roster size
    Recommend {
        #[arg(long)]
        players: usize,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the reports
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run_cmd::run(args, cli.seed),
        Commands::Simulate(args) => simulate_cmd::run(args, cli.seed),
        Commands::Recommend { players } => {
            println!("Players:            {}", players);
            println!("Recommended rounds: {}", recommend_rounds(players));
            println!("Maximum rounds:     {}", max_rounds(players));
            Ok(())
        }
    }
}
