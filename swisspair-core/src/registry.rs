//! Player registry and played-pairs history
//!
//! The registry is the single owner of every player's mutable state. It is
//! handed by reference to the pairing engine and then to the score tracker,
//! one round at a time.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{Result, SwissError};
use crate::player::Player;

/// Minimum roster size the core can pair
pub const MIN_ROSTER: usize = 2;

/// Canonical store of all players, in current pairing order
#[derive(Clone, Debug, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    index: FxHashMap<String, usize>,
}

impl PlayerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from an ordered roster of names
    ///
    /// Fails on empty or duplicate names, and on rosters smaller than 2.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.register(name)?;
        }
        if registry.len() < MIN_ROSTER {
            return Err(SwissError::TooFewPlayers(registry.len()));
        }
        Ok(registry)
    }

    /// Register one player with zeroed state
    pub fn register(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SwissError::EmptyName);
        }
        if self.index.contains_key(&name) {
            return Err(SwissError::DuplicatePlayer(name));
        }
        self.index.insert(name.clone(), self.players.len());
        self.players.push(Player::new(name));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players in current pairing order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by name
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.index.get(name).map(|&i| &self.players[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Owned copy of every player, safe to hand to reporting code
    pub fn snapshot(&self) -> Vec<Player> {
        self.players.clone()
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub(crate) fn player_at_mut(&mut self, idx: usize) -> &mut Player {
        &mut self.players[idx]
    }

    pub(crate) fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Reorder players in place (shuffle or sort) and rebuild the name index
    pub(crate) fn reorder<F>(&mut self, f: F)
    where
        F: FnOnce(&mut [Player]),
    {
        f(&mut self.players);
        self.index.clear();
        for (i, p) in self.players.iter().enumerate() {
            self.index.insert(p.name.clone(), i);
        }
    }
}

/// Unordered player-name pairs that have already met
#[derive(Clone, Debug, Default)]
pub struct PlayedPairs {
    pairs: FxHashSet<(String, String)>,
}

impl PlayedPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `a` and `b` have met, in either order
    pub fn contains(&self, a: &str, b: &str) -> bool {
        let (lo, hi) = ordered(a, b);
        self.pairs.contains(&(lo.to_string(), hi.to_string()))
    }

    /// Record that `a` and `b` have met
    ///
    /// A pair can only be recorded once.
    pub fn insert(&mut self, a: &str, b: &str) -> Result<()> {
        if a == b {
            return Err(SwissError::SelfPairing(a.to_string()));
        }
        let (lo, hi) = ordered(a, b);
        if !self.pairs.insert((lo.to_string(), hi.to_string())) {
            return Err(SwissError::PairAlreadyPlayed {
                first: a.to_string(),
                second: b.to_string(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate recorded pairs (names in lexical order within each pair)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(a, b)| (a.as_str(), b.as_str()))
    }
}

fn ordered<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_names_preserves_order() {
        let reg = PlayerRegistry::from_names(["C", "A", "B"]).unwrap();
        let names: Vec<&str> = reg.players().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        assert_eq!(reg.len(), 3);
        assert!(reg.contains("A"));
        assert!(reg.get("Z").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = PlayerRegistry::from_names(["A", "B", "A"]).unwrap_err();
        assert_eq!(err, SwissError::DuplicatePlayer("A".to_string()));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = PlayerRegistry::from_names(["A", "  "]).unwrap_err();
        assert_eq!(err, SwissError::EmptyName);
    }

    #[test]
    fn test_too_few_players() {
        let err = PlayerRegistry::from_names(["Solo"]).unwrap_err();
        assert_eq!(err, SwissError::TooFewPlayers(1));
    }

    #[test]
    fn test_reorder_rebuilds_index() {
        let mut reg = PlayerRegistry::from_names(["A", "B", "C"]).unwrap();
        reg.reorder(|players| players.reverse());

        assert_eq!(reg.players()[0].name(), "C");
        assert_eq!(reg.index_of("C"), Some(0));
        assert_eq!(reg.index_of("A"), Some(2));
        assert_eq!(reg.get("B").map(|p| p.name()), Some("B"));
    }

    #[test]
    fn test_played_pairs_unordered() {
        let mut played = PlayedPairs::new();
        played.insert("B", "A").unwrap();

        assert!(played.contains("A", "B"));
        assert!(played.contains("B", "A"));
        assert!(!played.contains("A", "C"));
        assert_eq!(played.len(), 1);
    }

    #[test]
    fn test_played_pairs_rejects_repeat() {
        let mut played = PlayedPairs::new();
        played.insert("A", "B").unwrap();

        let err = played.insert("B", "A").unwrap_err();
        assert!(matches!(err, SwissError::PairAlreadyPlayed { .. }));
        assert_eq!(played.len(), 1);
    }

    #[test]
    fn test_played_pairs_rejects_self() {
        let mut played = PlayedPairs::new();
        assert_eq!(
            played.insert("A", "A").unwrap_err(),
            SwissError::SelfPairing("A".to_string())
        );
    }
}
