//! Configuration types for tournament play
//!
//! Level 4 - Utilities and configuration

use serde::{Deserialize, Serialize};

use crate::error::TournamentError;

/// Smallest roster accepted by the configuration layer
pub const MIN_PLAYERS: usize = 4;

/// Largest roster accepted by the configuration layer
pub const MAX_PLAYERS: usize = 60;

/// Hard ceiling on rounds regardless of roster size
pub const ROUND_CEILING: u32 = 12;

/// Maximum rounds for a roster: 40% of the player count, capped at 12
pub fn max_rounds(player_count: usize) -> u32 {
    let forty_percent = (player_count as u32).saturating_mul(2) / 5;
    forty_percent.min(ROUND_CEILING)
}

/// Recommended rounds for a roster, never above `max_rounds`
pub fn recommend_rounds(player_count: usize) -> u32 {
    let cap = max_rounds(player_count);
    let wanted = match player_count {
        0..=8 => (player_count as u32).saturating_sub(1),
        9..=16 => 5,
        17..=32 => 6,
        33..=64 => 7,
        _ => cap,
    };
    wanted.min(cap)
}

/// Tournament configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Number of rounds to play
    pub rounds: u32,
    /// Random seed for the first-round shuffle (None = entropy)
    pub seed: Option<u64>,
    /// Enforce roster bounds and the round cap
    pub enforce_round_cap: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            rounds: 5,
            seed: None,
            enforce_round_cap: true,
        }
    }
}

impl TournamentConfig {
    /// Create config for a given number of rounds
    pub fn new(rounds: u32) -> Self {
        Self {
            rounds,
            ..Default::default()
        }
    }

    /// Create config with the recommended round count for a roster
    pub fn recommended(player_count: usize) -> Self {
        Self::new(recommend_rounds(player_count))
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Disable roster bounds and the round cap
    pub fn uncapped(mut self) -> Self {
        self.enforce_round_cap = false;
        self
    }

    /// Check the configuration against a roster size
    pub fn validate(&self, player_count: usize) -> Result<(), TournamentError> {
        if self.rounds == 0 {
            return Err(TournamentError::InvalidConfig(
                "at least one round is required".to_string(),
            ));
        }
        if !self.enforce_round_cap {
            return Ok(());
        }

        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(TournamentError::InvalidConfig(format!(
                "player count {} outside {}-{}",
                player_count, MIN_PLAYERS, MAX_PLAYERS
            )));
        }
        let cap = max_rounds(player_count);
        if self.rounds > cap {
            return Err(TournamentError::InvalidConfig(format!(
                "{} rounds requested, at most {} allowed for {} players",
                self.rounds, cap, player_count
            )));
        }
        Ok(())
    }
}
