use crate::data_fetcher::models::RawRecord;
use serde_json::Value;
use tracing::{debug, warn};

/// Wrapper keys under which API revisions have nested the record list,
/// in precedence order.
const PLAYER_STATS_KEY: &str = "playerStats";
const PLAYERS_KEY: &str = "players";

/// Boolean-like field separating goaltenders from skaters.
const GOALKEEPER_KEY: &str = "goalkeeper";

/// Extracts the flat record list from a statistics payload.
///
/// Three top-level shapes have been observed across API revisions: a bare
/// array of records, an object wrapping the array under `playerStats`,
/// and an object wrapping it under `players`. `playerStats` wins when
/// both wrapper keys are present. Any other shape yields an empty list
/// with a warning, never an error; the refresh cycle degrades to empty
/// leaderboards instead of failing.
///
/// Non-object entries inside the chosen list are skipped.
pub fn unwrap_records(payload: &Value, url: &str) -> Vec<RawRecord> {
    let list = match payload {
        Value::Array(list) => list.as_slice(),
        Value::Object(map) => {
            if let Some(Value::Array(list)) = map.get(PLAYER_STATS_KEY) {
                list.as_slice()
            } else if let Some(Value::Array(list)) = map.get(PLAYERS_KEY) {
                list.as_slice()
            } else {
                warn!("No player data found in response from {url}: unrecognized object shape");
                return Vec::new();
            }
        }
        other => {
            warn!(
                "No player data found in response from {url}: payload is a {}",
                json_type(other)
            );
            return Vec::new();
        }
    };

    let mut records = Vec::with_capacity(list.len());
    for element in list {
        match element {
            Value::Object(record) => records.push(record.clone()),
            other => {
                debug!(
                    "Skipping {} entry in player list from {url}",
                    json_type(other)
                );
            }
        }
    }
    records
}

/// True when a record's `goalkeeper` marker identifies a goaltender.
///
/// The marker is boolean-like: JSON `true`, the string `"true"` in any
/// case, and the number `1` all count. Absent, null or ambiguous markers
/// default to skater.
pub fn is_goalkeeper(record: &RawRecord) -> bool {
    match record.get(GOALKEEPER_KEY) {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        Some(Value::Number(n)) => n.as_f64() == Some(1.0),
        _ => false,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
