use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One player or goaltender row exactly as the upstream API returned it.
/// Field names vary across API revisions, so the record stays untyped and
/// the schema table decides which field carries a category's value.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// One ranked row of a leaderboard. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderEntry {
    /// 1-based position on the board
    pub rank: usize,
    pub name: String,
    pub team: String,
    /// Normalized numeric value of the ranked category
    pub value: f64,
    pub games: i64,
    pub position: String,
    pub jersey_number: String,
    pub player_id: String,
    pub image_url: String,
}

/// Ordered best-to-worst leaders for one category, at most `top_n` long.
pub type Leaderboard = Vec<LeaderEntry>;

/// The complete result of one refresh cycle. Built atomically and replaced
/// wholesale on the next cycle, never merged incrementally.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Snapshot {
    /// Leaderboards keyed by category. Goaltender categories carry the
    /// `goalie_` prefix, so `games` and `goalie_games` are distinct keys.
    pub leaderboards: HashMap<String, Leaderboard>,
    /// When an endpoint last delivered a parseable body. `None` when no
    /// endpoint has parsed yet in this snapshot's cycle.
    pub last_success: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Looks up the leaderboard for a namespaced category key.
    pub fn leaderboard(&self, category: &str) -> Option<&Leaderboard> {
        self.leaderboards.get(category)
    }

    /// True when the snapshot holds at least one non-empty leaderboard.
    pub fn has_leaders(&self) -> bool {
        self.leaderboards.values().any(|board| !board.is_empty())
    }
}
