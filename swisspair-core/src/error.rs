//! Error types for pairing, scoring and registry operations

/// Errors raised by the tournament core
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SwissError {
    #[error("Duplicate player name: {0}")]
    DuplicatePlayer(String),

    #[error("Player name must not be empty")]
    EmptyName,

    #[error("At least 2 players are required, got {0}")]
    TooFewPlayers(usize),

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Invalid round number: {0} (rounds start at 1)")]
    InvalidRound(u32),

    #[error("Pairing exhausted in round {round}: no eligible opponents left for {}", unpaired.join(", "))]
    PairingExhausted { round: u32, unpaired: Vec<String> },

    #[error("Invalid points for {player}: {points}-{opponent_points} (each must be 0-2 and sum to 2)")]
    InvalidPoints {
        player: String,
        points: u8,
        opponent_points: u8,
    },

    #[error("Player cannot be paired against themselves: {0}")]
    SelfPairing(String),

    #[error("Player reported more than once in the same round: {0}")]
    DuplicateResult(String),

    #[error("Result already recorded between {first} and {second}")]
    Rematch { first: String, second: String },

    #[error("Pair already registered as played: {first} vs {second}")]
    PairAlreadyPlayed { first: String, second: String },
}

/// Convenience alias used throughout the core
pub type Result<T> = std::result::Result<T, SwissError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_exhausted_message_lists_players() {
        let err = SwissError::PairingExhausted {
            round: 3,
            unpaired: vec!["Ana".to_string(), "Bo".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Pairing exhausted in round 3: no eligible opponents left for Ana, Bo"
        );
    }

    #[test]
    fn test_invalid_points_message() {
        let err = SwissError::InvalidPoints {
            player: "Ana".to_string(),
            points: 2,
            opponent_points: 1,
        };
        assert!(err.to_string().contains("2-1"));
    }
}
