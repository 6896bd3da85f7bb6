//! Swisspair Tournament - Round orchestration over the Swiss core
//!
//! This crate provides tournament infrastructure:
//! - Round lifecycle (pair, collect results, score, archive)
//! - Configuration and round-count policy
//! - Result capture seam (random and scripted sources)
//! - Summary with standings and cross-table
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: Tournament::run (orchestration)
//! - Level 2: pair_next_round, submit_results (phases)
//! - Level 3: result sources, outcome conversion (steps)
//! - Level 4: configuration, summary

mod config;
mod error;
mod result_source;
mod summary;
mod tournament;

pub use config::{max_rounds, recommend_rounds, TournamentConfig, MAX_PLAYERS, MIN_PLAYERS, ROUND_CEILING};
pub use error::TournamentError;
pub use result_source::{check_draw_rate, RandomResults, ResultSource, ScriptedResults};
pub use summary::{PlayerLine, RoundCell, TournamentSummary};
pub use tournament::{RoundRecord, Tournament};
