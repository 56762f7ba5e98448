//! Presentation layer: turns a snapshot into per-category readings
//!
//! A reading is what a dashboard consumes: a headline state (the rank-1
//! player's name, or a placeholder) plus the ranked list with values
//! formatted per the category's precision and unit. The shapes here are
//! the outbound contract, so they serialize as-is in `--json` mode.

use crate::constants::display::{DEFAULT_ICON, NO_DATA_STATE, UNKNOWN_STATE};
use crate::constants::leaderboard::GOALIE_CATEGORY_PREFIX;
use crate::data_fetcher::models::{LeaderEntry, Snapshot};
use crate::data_fetcher::schema::{CategorySpec, SchemaTable, capitalize};
use serde::Serialize;

/// One ranked player with its value already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedLeader {
    pub rank: usize,
    pub name: String,
    pub team: String,
    pub value: String,
    pub games: i64,
    pub position: String,
    pub number: String,
    pub image_url: String,
}

/// Attribute block accompanying a reading's state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingAttributes {
    /// Namespaced snapshot key, e.g. `points` or `goalie_gaa`
    pub category: String,
    pub category_name: String,
    pub icon: String,
    pub leaders: Vec<FormattedLeader>,
    /// RFC 3339 stamp of the last successful parse, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub leader_image_url: String,
}

/// One category's complete reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReading {
    /// Rank-1 player name; "No data" for an empty board, "Unknown" when
    /// the category is absent from the snapshot or the leader is nameless
    pub state: String,
    pub attributes: ReadingAttributes,
}

/// Builds the reading for one snapshot key.
///
/// Works for keys the snapshot does not contain: the reading then carries
/// the "Unknown" state and an empty leaders list, so a configured category
/// keeps its place in the output even through endpoint failures.
pub fn category_reading(snapshot: &Snapshot, key: &str, schema: &SchemaTable) -> CategoryReading {
    let spec = schema.resolve_key(key);
    let (category_name, icon) = presentation(key, spec);
    let (precision, unit) = spec
        .map(|spec| (spec.precision, spec.unit.as_str()))
        .unwrap_or((0, ""));

    let board = snapshot.leaderboard(key);
    let leaders: Vec<FormattedLeader> = board
        .map(|board| {
            board
                .iter()
                .map(|entry| format_leader(entry, precision, unit))
                .collect()
        })
        .unwrap_or_default();

    let state = match board {
        None => UNKNOWN_STATE.to_string(),
        Some(board) => match board.first() {
            None => NO_DATA_STATE.to_string(),
            Some(leader) if leader.name.is_empty() => UNKNOWN_STATE.to_string(),
            Some(leader) => leader.name.clone(),
        },
    };
    let leader_image_url = board
        .and_then(|board| board.first())
        .map(|leader| leader.image_url.clone())
        .unwrap_or_default();

    CategoryReading {
        state,
        attributes: ReadingAttributes {
            category: key.to_string(),
            category_name,
            icon,
            leaders,
            last_updated: snapshot.last_success.map(|stamp| stamp.to_rfc3339()),
            leader_image_url,
        },
    }
}

/// Formats a stat value with fixed decimals and the category unit.
/// Precision 0 renders whole numbers without a decimal point.
pub fn format_stat_value(value: f64, precision: u8, unit: &str) -> String {
    format!("{value:.prec$}{unit}", prec = precision as usize)
}

fn format_leader(entry: &LeaderEntry, precision: u8, unit: &str) -> FormattedLeader {
    FormattedLeader {
        rank: entry.rank,
        name: entry.name.clone(),
        team: entry.team.clone(),
        value: format_stat_value(entry.value, precision, unit),
        games: entry.games,
        position: entry.position.clone(),
        number: entry.jersey_number.clone(),
        image_url: entry.image_url.clone(),
    }
}

/// Display name and icon for a key, falling back to a capitalized root
/// name when the schema has no entry or no display name for it.
fn presentation(key: &str, spec: Option<&CategorySpec>) -> (String, String) {
    let root = key.strip_prefix(GOALIE_CATEGORY_PREFIX).unwrap_or(key);
    match spec {
        Some(spec) if !spec.display_name.is_empty() => {
            (spec.display_name.clone(), spec.icon.clone())
        }
        Some(spec) => (capitalize(root), spec.icon.clone()),
        None => (capitalize(root), DEFAULT_ICON.to_string()),
    }
}
