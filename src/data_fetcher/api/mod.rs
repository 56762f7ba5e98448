pub mod http_client;
mod fetch_utils;
mod orchestrator;

// Re-export HTTP client utilities
#[allow(unused_imports)]
pub use http_client::*;
// Re-export the refresh orchestration entry point
pub use orchestrator::LeaderboardFetcher;
