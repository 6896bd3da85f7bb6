//! Swisspair Core - Swiss-system pairing, scoring and ranking
//!
//! This crate provides the tournament core:
//! - Player registry (single owner of all player state)
//! - Greedy pairing with rematch avoidance and colour balancing
//! - Score tracking (points, wins, black wins, opponent score sum, head-to-head)
//! - Standings with a tie-break chain and head-to-head override
//!
//! Per round: `pair_round` -> results captured elsewhere -> `apply_results`
//! -> register pairs in `PlayedPairs` -> `rank_players`.

pub mod error;
pub mod player;
pub mod registry;
pub mod matches;
pub mod pairing;
pub mod scoring;
pub mod standings;

// Re-exports for convenient access
pub use error::{Result, SwissError};
pub use player::{Color, HeadToHead, Player, BYE_POINTS, DRAW_POINTS, WIN_POINTS};
pub use registry::{PlayedPairs, PlayerRegistry, MIN_ROSTER};
pub use matches::{Match, Outcome, Pairing, RoundResult};
pub use pairing::pair_round;
pub use scoring::apply_results;
pub use standings::{rank, rank_players, Standing};
