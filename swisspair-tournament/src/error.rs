//! Error types for tournament orchestration

use swisspair_core::SwissError;

/// Errors raised while driving a tournament
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error(transparent)]
    Core(#[from] SwissError),

    #[error("Invalid tournament configuration: {0}")]
    InvalidConfig(String),

    #[error("No round is waiting for results")]
    NoPendingRound,

    #[error("Round {0} is still waiting for results")]
    RoundPending(u32),

    #[error("All configured rounds have been played")]
    TournamentComplete,

    #[error("Expected {expected} outcomes, got {actual}")]
    OutcomeCountMismatch { expected: usize, actual: usize },

    #[error("Outcome for table {table} does not fit its pairing")]
    OutcomeMismatch { table: usize },
}
