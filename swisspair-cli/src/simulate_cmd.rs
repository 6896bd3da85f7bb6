//! Simulate command - run a whole tournament with random results
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: (delegated to Tournament::run)
//! - Level 3: RandomResults result source
//! - Level 4: report formatting

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use swisspair_tournament::{check_draw_rate, RandomResults, Tournament};

use crate::report;
use crate::roster::load_roster;
use crate::run_cmd::build_config;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    /// Roster file (JSON or one name per line)
    #[arg(long, value_name = "FILE")]
    pub roster: PathBuf,

    /// Use only the first N players of the roster
    #[arg(long)]
    pub players: Option<usize>,

    /// Number of rounds (defaults to the recommendation for the roster)
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Probability that a game is drawn
    #[arg(long, default_value = "0.1", value_parser = parse_draw_rate)]
    pub draw_rate: f64,

    /// Allow any roster size and round count
    #[arg(long)]
    pub uncapped: bool,

    /// Print every round's pairings and results
    #[arg(long)]
    pub verbose: bool,

    /// Output the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parse `--draw-rate`, rejecting anything that is not a probability
fn parse_draw_rate(value: &str) -> Result<f64, String> {
    let rate: f64 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    check_draw_rate(rate).map_err(|e| e.to_string())
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run a simulated tournament
pub fn run(args: SimulateArgs, seed: Option<u64>) -> Result<()> {
    let names = load_roster(&args.roster, args.players)?;
    let config = build_config(names.len(), args.rounds, args.uncapped, seed);

    tracing::info!(
        "Simulating tournament: {} players, {} rounds, draw rate {:.2}",
        names.len(),
        config.rounds,
        args.draw_rate
    );

    // Results use a different stream than the shuffle so both stay reproducible
    let mut source = match seed {
        Some(s) => RandomResults::new(s.wrapping_add(1), args.draw_rate)?,
        None => RandomResults::from_entropy(args.draw_rate)?,
    };

    let mut tournament = Tournament::new(names, config).context("Failed to set up tournament")?;
    let summary = tournament.run(&mut source)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if args.verbose {
        for record in &summary.rounds {
            println!("{}", report::format_pairings(record.round, &record.matches));
            println!("{}", report::format_results(record));
        }
    }
    if tournament.ended_early() {
        println!(
            "Unable to create matches after round {}. The tournament ended early.",
            summary.rounds_played
        );
    }
    println!("{}", report::format_standings(&summary.standings));
    println!("{}", report::format_cross_table(&summary));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_draw_rate() {
        assert_eq!(parse_draw_rate("0.25"), Ok(0.25));
        assert_eq!(parse_draw_rate("1"), Ok(1.0));
        assert!(parse_draw_rate("NaN").is_err());
        assert!(parse_draw_rate("inf").is_err());
        assert!(parse_draw_rate("10").is_err());
        assert!(parse_draw_rate("-0.5").is_err());
        assert!(parse_draw_rate("often").is_err());
    }
}
