//! Standings ranker - tie-break chain with head-to-head override

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::player::{HeadToHead, Player};
use crate::registry::PlayerRegistry;

/// One line of the standings table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based position
    pub rank: usize,
    pub name: String,
    pub score: u32,
    /// Sum of opponents' scores (tie-break)
    pub opponent_score_sum: f64,
    pub wins: u32,
    pub black_wins: u32,
    pub byes: usize,
    pub rounds_played: usize,
}

/// Primary ranking key; larger is better
#[derive(Clone, Copy, Debug)]
struct TieBreakKey {
    score: u32,
    opponent_score_sum: f64,
    wins: u32,
    black_wins: u32,
    byes: usize,
}

impl TieBreakKey {
    fn of(player: &Player) -> Self {
        Self {
            score: player.score,
            opponent_score_sum: player.opponent_score_sum,
            wins: player.wins,
            black_wins: player.black_wins,
            byes: player.bye_count(),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.opponent_score_sum.total_cmp(&other.opponent_score_sum))
            .then_with(|| self.wins.cmp(&other.wins))
            .then_with(|| self.black_wins.cmp(&other.black_wins))
            // Fewer byes ranks higher
            .then_with(|| other.byes.cmp(&self.byes))
    }
}

/// Rank every player in the registry
pub fn rank_players(registry: &PlayerRegistry) -> Vec<Standing> {
    rank(registry.players())
}

/// Rank players into a total order
///
/// Players are sorted descending by `(score, opponent_score_sum, wins,
/// black_wins, -byes)`. Then, for each pair of positions `i < j` with equal
/// keys, they are swapped if the player at `j` beat the player at `i`.
/// This pass is a local correction; cyclic head-to-head results among
/// three or more tied players resolve in scan order.
pub fn rank(players: &[Player]) -> Vec<Standing> {
    let mut order: Vec<&Player> = players.iter().collect();
    order.sort_by(|a, b| TieBreakKey::of(b).compare(&TieBreakKey::of(a)));

    apply_head_to_head(&mut order);

    order
        .into_iter()
        .enumerate()
        .map(|(i, p)| Standing {
            rank: i + 1,
            name: p.name.clone(),
            score: p.score,
            opponent_score_sum: p.opponent_score_sum,
            wins: p.wins,
            black_wins: p.black_wins,
            byes: p.bye_count(),
            rounds_played: p.rounds_played(),
        })
        .collect()
}

fn apply_head_to_head(order: &mut [&Player]) {
    let n = order.len();
    for i in 0..n.saturating_sub(1) {
        for j in (i + 1)..n {
            let tied = TieBreakKey::of(order[i])
                .compare(&TieBreakKey::of(order[j]))
                .is_eq();
            if tied && order[i].result_against(&order[j].name) == Some(HeadToHead::Loss) {
                order.swap(i, j);
            }
        }
    }
}
