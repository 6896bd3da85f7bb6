//! Tournament summary - standings plus a per-player cross-table
//!
//! Level 4 - Utilities

use serde::{Deserialize, Serialize};

use swisspair_core::{rank_players, Color, PlayerRegistry, Standing};

use crate::tournament::RoundRecord;

/// What one player did in one round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundCell {
    pub round: u32,
    pub color: Color,
    /// None for a bye
    pub opponent: Option<String>,
    pub points: u8,
}

/// One row of the cross-table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerLine {
    pub standing: Standing,
    pub rounds: Vec<RoundCell>,
}

impl PlayerLine {
    /// Cell for a 1-based round, if the player took part
    pub fn round(&self, round: u32) -> Option<&RoundCell> {
        self.rounds.iter().find(|c| c.round == round)
    }
}

/// Snapshot of a tournament for reporting
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub rounds_played: u32,
    pub standings: Vec<Standing>,
    pub rounds: Vec<RoundRecord>,
    /// Cross-table rows in standings order
    pub players: Vec<PlayerLine>,
}

impl TournamentSummary {
    /// Build from the registry and completed rounds
    pub fn build(registry: &PlayerRegistry, history: &[RoundRecord]) -> Self {
        let standings = rank_players(registry);
        let players = standings
            .iter()
            .map(|s| PlayerLine {
                standing: s.clone(),
                rounds: player_cells(&s.name, history),
            })
            .collect();

        Self {
            rounds_played: history.len() as u32,
            standings,
            rounds: history.to_vec(),
            players,
        }
    }

    /// Get winner (top standing)
    pub fn winner(&self) -> Option<&Standing> {
        self.standings.first()
    }

    /// Get top N performers
    pub fn top_n(&self, n: usize) -> &[Standing] {
        let n = n.min(self.standings.len());
        &self.standings[..n]
    }

    /// Cross-table row for a player
    pub fn player(&self, name: &str) -> Option<&PlayerLine> {
        self.players.iter().find(|p| p.standing.name == name)
    }
}

/// Collect one player's cells across all rounds
fn player_cells(name: &str, history: &[RoundRecord]) -> Vec<RoundCell> {
    history
        .iter()
        .flat_map(|record| record.tables())
        .filter_map(|(m, outcome)| {
            let color = m.color_of(name)?;
            let (white_points, black_points) = outcome.points();
            let points = match color {
                Color::White | Color::Bye => white_points,
                Color::Black => black_points,
            };
            Some(RoundCell {
                round: m.round,
                color,
                opponent: m.opponent_of(name).map(str::to_string),
                points,
            })
        })
        .collect()
}
