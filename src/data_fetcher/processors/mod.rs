pub mod extract;
pub mod leaderboard;
pub mod normalize;

// Re-export the pipeline stages callers actually compose
pub use extract::{is_goalkeeper, unwrap_records};
pub use leaderboard::{build_leaderboards, snapshot_key};
pub use normalize::normalize_stat;
