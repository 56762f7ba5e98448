//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Polling cadence for the watch mode
pub mod polling {
    /// Default interval between refresh cycles (1 hour). The upstream
    /// statistics update at most a few times per day, so hourly polling
    /// is already generous.
    pub const DEFAULT_INTERVAL_SECONDS: u64 = 3600;

    /// Minimum accepted interval between refresh cycles. Anything shorter
    /// hammers the API for data that cannot have changed.
    pub const MIN_INTERVAL_SECONDS: u64 = 60;
}

/// Leaderboard sizing and keying
pub mod leaderboard {
    /// Default number of leaders kept per category
    pub const DEFAULT_TOP_N: usize = 10;

    /// Maximum accepted leaderboard length
    pub const MAX_TOP_N: usize = 100;

    /// Prefix that namespaces goaltender category keys so `games` and
    /// `goalie_games` never collide in one snapshot
    pub const GOALIE_CATEGORY_PREFIX: &str = "goalie_";

    /// Categories requested when the config does not list any
    pub const DEFAULT_CATEGORIES: [&str; 3] = ["points", "goals", "assists"];

    /// Goaltender categories requested when the config does not list any
    pub const DEFAULT_GOALIE_CATEGORIES: [&str; 4] = ["wins", "savepct", "gaa", "shutouts"];
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the skater statistics URL override
    pub const STATS_URL: &str = "LIIGA_LEADERS_URL";

    /// Environment variable for the goaltender statistics URL override
    pub const GOALIE_STATS_URL: &str = "LIIGA_LEADERS_GOALIE_URL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "LIIGA_LEADERS_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "LIIGA_LEADERS_HTTP_TIMEOUT";
}

/// Reading presentation fallbacks
pub mod display {
    /// Headline state when a category produced an empty leaderboard
    pub const NO_DATA_STATE: &str = "No data";

    /// Headline state when a category is absent from the snapshot
    pub const UNKNOWN_STATE: &str = "Unknown";

    /// Team name used when the record carries no team fields
    pub const UNKNOWN_TEAM: &str = "Unknown";

    /// Icon hint used for categories without a configured icon
    pub const DEFAULT_ICON: &str = "mdi:hockey-sticks";

    /// Base URL for player portrait images keyed by player id
    pub const PLAYER_IMAGE_BASE_URL: &str = "https://liiga.fi/static/media/players/";

    /// File extension of player portrait images
    pub const PLAYER_IMAGE_EXTENSION: &str = ".jpg";
}
