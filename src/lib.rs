//! Finnish Hockey League (Liiga) Player Statistics Leaderboards
//!
//! This library fetches skater and goaltender statistics from the Liiga
//! API, computes ranked top-N leaderboards per category, and exposes the
//! results as display-ready readings.
//!
//! # Examples
//!
//! ```rust,no_run
//! use liiga_leaders::config::Config;
//! use liiga_leaders::data_fetcher::LeaderboardFetcher;
//! use liiga_leaders::error::AppError;
//! use liiga_leaders::sensor::category_reading;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let fetcher = LeaderboardFetcher::new(&config).await?;
//!
//!     // One refresh cycle: fetch, rank, snapshot
//!     let snapshot = fetcher.refresh().await?;
//!
//!     for key in fetcher.configured_keys() {
//!         let reading = category_reading(&snapshot, &key, fetcher.schema());
//!         println!("{}: {}", reading.attributes.category_name, reading.state);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod sensor;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::LeaderboardFetcher;
pub use data_fetcher::models::{LeaderEntry, Leaderboard, RawRecord, Snapshot};
pub use data_fetcher::schema::{ApiVersion, CategorySpec, Role, SchemaTable, SortDirection};
pub use error::AppError;
pub use sensor::{CategoryReading, FormattedLeader, ReadingAttributes};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
