use crate::constants::display::{PLAYER_IMAGE_BASE_URL, PLAYER_IMAGE_EXTENSION, UNKNOWN_TEAM};
use crate::constants::leaderboard::GOALIE_CATEGORY_PREFIX;
use crate::data_fetcher::models::{LeaderEntry, Leaderboard, RawRecord};
use crate::data_fetcher::processors::extract::is_goalkeeper;
use crate::data_fetcher::processors::normalize::normalize_stat;
use crate::data_fetcher::schema::{CategorySpec, Role, SchemaTable, SortDirection};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Builds one ranked leaderboard per configured category.
///
/// Categories that do not resolve against the schema table are skipped
/// with a warning and leave no key behind; a category that resolves but
/// has no qualifying records still produces an (empty) board. Goaltender
/// boards are namespaced with the `goalie_` prefix so `games` and
/// `goalie_games` can coexist in one snapshot.
pub fn build_leaderboards(
    records: &[RawRecord],
    categories: &[String],
    role: Role,
    schema: &SchemaTable,
    top_n: usize,
) -> HashMap<String, Leaderboard> {
    let mut boards = HashMap::with_capacity(categories.len());
    for category in categories {
        let Some(spec) = schema.resolve(role, category) else {
            warn!("Unknown {role} category '{category}', skipping");
            continue;
        };
        let board = build_category(records, spec, role, top_n);
        debug!(
            "Built {role} board '{category}' with {} leaders from {} records",
            board.len(),
            records.len()
        );
        boards.insert(snapshot_key(category, role), board);
    }
    boards
}

/// Snapshot key for a configured category. Goaltender boards carry the
/// `goalie_` prefix exactly once, whether or not the configured name
/// already had it.
pub fn snapshot_key(category: &str, role: Role) -> String {
    match role {
        Role::Skater => category.to_string(),
        Role::Goaltender => {
            let root = category
                .strip_prefix(GOALIE_CATEGORY_PREFIX)
                .unwrap_or(category);
            format!("{GOALIE_CATEGORY_PREFIX}{root}")
        }
    }
}

fn build_category(
    records: &[RawRecord],
    spec: &CategorySpec,
    role: Role,
    top_n: usize,
) -> Leaderboard {
    let mut ranked: Vec<(&RawRecord, f64)> = records
        .iter()
        .filter(|record| spec.role_agnostic || role_matches(record, role))
        .filter_map(|record| normalize_stat(record.get(&spec.field)).map(|value| (record, value)))
        .collect();

    // Stable sort: tied values keep their upstream order
    match spec.direction {
        SortDirection::HighestFirst => {
            ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        }
        SortDirection::LowestFirst => {
            ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        }
    }
    ranked.truncate(top_n);

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, (record, value))| build_entry(i + 1, record, value))
        .collect()
}

fn role_matches(record: &RawRecord, role: Role) -> bool {
    match role {
        Role::Skater => !is_goalkeeper(record),
        Role::Goaltender => is_goalkeeper(record),
    }
}

fn build_entry(rank: usize, record: &RawRecord, value: f64) -> LeaderEntry {
    let player_id = extract_player_id(record);
    LeaderEntry {
        rank,
        name: build_name(record),
        team: string_field(record, &["teamName", "teamShortName"])
            .unwrap_or_else(|| UNKNOWN_TEAM.to_string()),
        value,
        games: games_played(record),
        position: string_field(record, &["position", "current_position"]).unwrap_or_default(),
        jersey_number: scalar_field(record, &["jersey", "current_jersey"]),
        image_url: image_url(record, &player_id),
        player_id,
    }
}

/// Joins first and last name with a single space; either half may be
/// missing. A record with neither yields an empty name.
fn build_name(record: &RawRecord) -> String {
    ["firstName", "lastName"]
        .iter()
        .filter_map(|key| record.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// First non-blank string value found under the given keys.
fn string_field(record: &RawRecord, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        record
            .get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Like [`string_field`] but also accepts numbers, for fields the
/// upstream sends as either (`"37"` vs `37`). Empty string when absent.
fn scalar_field(record: &RawRecord, keys: &[&str]) -> String {
    for key in keys {
        match record.get(*key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return s.trim().to_string(),
            Some(Value::Number(n)) => return n.to_string(),
            _ => {}
        }
    }
    String::new()
}

fn games_played(record: &RawRecord) -> i64 {
    ["games", "gamesPlayed", "gp"]
        .iter()
        .find_map(|key| normalize_stat(record.get(*key)))
        .map(|games| games as i64)
        .unwrap_or(0)
}

/// Player identifier for profile and image URLs: an explicit id field
/// when present, otherwise the trailing numeric segment of the profile
/// link some revisions carry instead. Empty string when neither exists.
fn extract_player_id(record: &RawRecord) -> String {
    let id = scalar_field(record, &["fiha_id", "playerId", "id"]);
    if !id.is_empty() {
        return id;
    }
    if let Some(Value::Object(links)) = record.get("links")
        && let Some(Value::String(url)) = links.get("player")
    {
        let segment = url.trim_end_matches('/').rsplit('/').next().unwrap_or("");
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            return segment.to_string();
        }
    }
    String::new()
}

/// Explicit image field when the record has one, otherwise the
/// conventional liiga.fi portrait URL derived from the player id.
fn image_url(record: &RawRecord, player_id: &str) -> String {
    if let Some(url) = string_field(record, &["image", "imageUrl"]) {
        return url;
    }
    if player_id.is_empty() {
        String::new()
    } else {
        format!("{PLAYER_IMAGE_BASE_URL}{player_id}{PLAYER_IMAGE_EXTENSION}")
    }
}
