//! Run command - interactive tournament with results entered at the terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: setup_tournament(), play_round(), finish()
//! - Level 3: (delegated to swisspair-tournament and the prompt source)
//! - Level 4: report formatting

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use swisspair_core::SwissError;
use swisspair_tournament::{
    recommend_rounds, ResultSource, Tournament, TournamentConfig, TournamentError,
};

use crate::prompt::PromptResults;
use crate::report;
use crate::roster::load_roster;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct RunArgs {
    /// Roster file (JSON or one name per line)
    #[arg(long, value_name = "FILE")]
    pub roster: PathBuf,

    /// Use only the first N players of the roster
    #[arg(long)]
    pub players: Option<usize>,

    /// Number of rounds (defaults to the recommendation for the roster)
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Allow any roster size and round count
    #[arg(long)]
    pub uncapped: bool,

    /// Directory for the JSON summary
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Print the final summary as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run an interactive tournament
///
/// This function reads like a table of contents:
/// 1. Load roster and configure
/// 2. For each round: pair, collect results, score, report
/// 3. Report final standings and write the summary
pub fn run(args: RunArgs, seed: Option<u64>) -> Result<()> {
    let mut tournament = setup_tournament(&args, seed)?;

    let stdin = io::stdin();
    let mut source = PromptResults::new(stdin.lock(), io::stdout()).with_pause();

    while !tournament.is_complete() {
        if !play_round(&mut tournament, &mut source)? {
            println!("Unable to create matches. The tournament will end early.");
            break;
        }
    }

    finish(&tournament, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Load the roster and build the tournament
fn setup_tournament(args: &RunArgs, seed: Option<u64>) -> Result<Tournament> {
    let names = load_roster(&args.roster, args.players)?;
    let config = build_config(names.len(), args.rounds, args.uncapped, seed);

    tracing::info!(
        "Starting tournament: {} players, {} rounds",
        names.len(),
        config.rounds
    );

    Tournament::new(names, config).context("Failed to set up tournament")
}

/// Pair, collect and score one round; false if pairing ran dry
fn play_round<S: ResultSource>(tournament: &mut Tournament, source: &mut S) -> Result<bool> {
    let round = tournament.rounds_completed() + 1;
    let matches = match tournament.pair_next_round() {
        Ok(matches) => matches.to_vec(),
        Err(TournamentError::Core(SwissError::PairingExhausted { .. })) => return Ok(false),
        Err(e) => return Err(e.into()),
    };
    println!("{}", report::format_pairings(round, &matches));

    let outcomes = source.collect(round, &matches)?;
    tournament
        .submit_results(&outcomes)
        .with_context(|| format!("Failed to score round {}", round))?;

    if let Some(record) = tournament.history().last() {
        println!("{}", report::format_results(record));
    }
    println!("{}", report::format_standings(&tournament.standings()));
    Ok(true)
}

/// Print final standings, cross-table and write the summary file
fn finish(tournament: &Tournament, args: &RunArgs) -> Result<()> {
    let summary = tournament.summary();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("\nTournament completed. Final Standings:");
        println!("{}", report::format_standings(&summary.standings));
        println!("{}", report::format_cross_table(&summary));
    }

    if let Some(dir) = &args.output {
        let path = report::write_summary(&summary, dir)?;
        println!("Tournament summary written to {}", path.display());
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Build the configuration from command-line choices
pub(crate) fn build_config(
    player_count: usize,
    rounds: Option<u32>,
    uncapped: bool,
    seed: Option<u64>,
) -> TournamentConfig {
    let rounds = rounds.unwrap_or_else(|| {
        let recommended = recommend_rounds(player_count);
        // Uncapped rosters below the cap's minimum still get one round
        if uncapped {
            recommended.max(1)
        } else {
            recommended
        }
    });
    let mut config = TournamentConfig::new(rounds);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if uncapped {
        config = config.uncapped();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config_defaults_to_recommendation() {
        let config = build_config(16, None, false, None);
        assert_eq!(config.rounds, 5);
        assert_eq!(config.seed, None);
        assert!(config.enforce_round_cap);
    }

    #[test]
    fn test_build_config_overrides() {
        let config = build_config(16, Some(3), true, Some(9));
        assert_eq!(config.rounds, 3);
        assert_eq!(config.seed, Some(9));
        assert!(!config.enforce_round_cap);
    }

    #[test]
    fn test_build_config_uncapped_two_players_gets_a_round() {
        let config = build_config(2, None, true, Some(1));
        assert_eq!(config.rounds, 1);
        assert!(config.validate(2).is_ok());
        assert!(Tournament::new(["Ana", "Bo"], config).is_ok());
    }
}
