pub mod api;
pub mod models;
pub mod processors;
pub mod schema;

pub use api::LeaderboardFetcher;
pub use models::{LeaderEntry, Leaderboard, RawRecord, Snapshot};
pub use schema::{ApiVersion, CategorySpec, Role, SchemaTable, SortDirection};
