//! Report formatting - pairing sheets, result sheets, standings, summary
//!
//! Level 4 - Formatting utilities

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use swisspair_core::{Match, Outcome, Pairing, Standing};
use swisspair_tournament::{RoundRecord, TournamentSummary};

/// Pairing sheet for one round
pub fn format_pairings(round: u32, matches: &[Match]) -> String {
    let mut out = format!("\n=== Round {} Pairings ===\n", round);
    for m in matches {
        let line = match &m.pairing {
            Pairing::Game { white, black } => format!(
                "Table {}: {} (White) vs {} (Black)\n",
                m.table, white, black
            ),
            Pairing::Bye { player } => format!("Table {}: {} (White) has a bye\n", m.table, player),
        };
        out.push_str(&line);
    }
    out
}

/// Result sheet for one scored round
pub fn format_results(record: &RoundRecord) -> String {
    let mut out = format!("\n=== Round {} Results ===\n", record.round);
    for (m, outcome) in record.tables() {
        let (white_points, black_points) = outcome.points();
        let line = match &m.pairing {
            Pairing::Game { white, black } => format!(
                "Table {}: {} {}-{} {}{}\n",
                m.table,
                white,
                white_points,
                black_points,
                black,
                outcome_note(outcome)
            ),
            Pairing::Bye { player } => {
                format!("Table {}: {} bye (+{})\n", m.table, player, white_points)
            }
        };
        out.push_str(&line);
    }
    out
}

fn outcome_note(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Draw => " (draw)",
        _ => "",
    }
}

/// Standings table
pub fn format_standings(standings: &[Standing]) -> String {
    let mut out = String::from("\n=== Standings ===\n");
    out.push_str(&format!(
        "{:>4}  {:<20} {:>5} {:>8} {:>5} {:>6} {:>5}\n",
        "Rank", "Player", "Score", "Opp", "Wins", "BWins", "Byes"
    ));
    out.push_str(&"-".repeat(60));
    out.push('\n');

    for s in standings {
        out.push_str(&format!(
            "{:>4}  {:<20} {:>5} {:>8.2} {:>5} {:>6} {:>5}\n",
            s.rank, s.name, s.score, s.opponent_score_sum, s.wins, s.black_wins, s.byes
        ));
    }
    out
}

/// Cross-table: one row per player, one cell per round
pub fn format_cross_table(summary: &TournamentSummary) -> String {
    let mut out = String::from("\n=== Tournament Summary ===\n");
    for line in &summary.players {
        out.push_str(&format!(
            "{:>3}. {:<20}",
            line.standing.rank, line.standing.name
        ));
        for round in 1..=summary.rounds_played {
            let cell = match line.round(round) {
                Some(cell) => match &cell.opponent {
                    Some(opponent) => {
                        format!("{} vs {} ({})", cell.color.marker(), opponent, cell.points)
                    }
                    None => format!("bye ({})", cell.points),
                },
                None => "-".to_string(),
            };
            out.push_str(&format!(" | {:<18}", cell));
        }
        out.push_str(&format!(" | {} pts\n", line.standing.score));
    }
    out
}

/// Write the summary as pretty JSON into `dir`, named by timestamp
pub fn write_summary(summary: &TournamentSummary, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("tournament_{}.json", stamp));

    let json = serde_json::to_string_pretty(summary).context("Failed to serialize summary")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write summary: {}", path.display()))?;

    tracing::info!("Saved tournament summary to {}", path.display());
    Ok(path)
}
