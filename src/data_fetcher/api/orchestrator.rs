//! Refresh-cycle orchestration: fetch both statistics endpoints and fold
//! the results into one snapshot

use crate::config::Config;
use crate::data_fetcher::models::{Leaderboard, Snapshot};
use crate::data_fetcher::processors::{build_leaderboards, snapshot_key, unwrap_records};
use crate::data_fetcher::schema::{Role, SchemaTable};
use crate::error::AppError;
use chrono::Utc;
use reqwest::Client;
use std::collections::HashMap;
use tracing::{info, instrument, warn};

use super::fetch_utils::fetch_json;
use super::http_client::create_http_client_with_timeout;

/// What one endpoint contributed to the refresh cycle.
struct EndpointOutcome {
    boards: HashMap<String, Leaderboard>,
    /// Body parsed as JSON; eligible to stamp `last_success`
    parsed: bool,
    /// Transport or status failure description, when the endpoint
    /// produced nothing at all
    failed: Option<String>,
}

/// Owns the HTTP client, the schema table and the resolved endpoint
/// configuration, and turns one round of fetches into a [`Snapshot`].
///
/// Construct once, call [`refresh`](LeaderboardFetcher::refresh) per poll
/// cycle. There is no background task and no shared state; the caller
/// decides the cadence.
#[derive(Debug)]
pub struct LeaderboardFetcher {
    client: Client,
    schema: SchemaTable,
    url: String,
    goalie_url: Option<String>,
    categories: Vec<String>,
    goalie_categories: Vec<String>,
    top_n: usize,
}

impl LeaderboardFetcher {
    /// Builds a fetcher from resolved configuration.
    ///
    /// The schema table comes from `schema_file` when configured,
    /// otherwise from the built-in table for `api_version`.
    ///
    /// # Returns
    /// * `Ok(LeaderboardFetcher)` - Ready to refresh
    /// * `Err(AppError)` - HTTP client construction or schema file failure
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        let schema = match &config.schema_file {
            Some(path) => {
                info!("Loading schema table from {path}");
                SchemaTable::load_from_path(path).await?
            }
            None => SchemaTable::for_version(config.api_version),
        };
        Ok(LeaderboardFetcher {
            client,
            schema,
            url: config.url.clone(),
            goalie_url: config.goalie_url.clone(),
            categories: config.categories.clone(),
            goalie_categories: config.goalie_categories.clone(),
            top_n: config.top_n,
        })
    }

    /// The schema table readings are formatted against.
    pub fn schema(&self) -> &SchemaTable {
        &self.schema
    }

    /// Snapshot keys this configuration can ever produce, in configured
    /// order: skater categories as-is, then goalie categories namespaced
    /// with the `goalie_` prefix when a goalie endpoint is configured.
    pub fn configured_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .categories
            .iter()
            .map(|category| snapshot_key(category, Role::Skater))
            .collect();
        if self.goalie_url.is_some() {
            keys.extend(
                self.goalie_categories
                    .iter()
                    .map(|category| snapshot_key(category, Role::Goaltender)),
            );
        }
        keys
    }

    /// Runs one refresh cycle: fetch every configured endpoint
    /// concurrently and fold the leaderboards into a fresh snapshot.
    ///
    /// Endpoints fail independently. A transport or status failure drops
    /// that endpoint's categories from the snapshot; an endpoint that
    /// answered 200 with an unusable body keeps its categories present
    /// but empty. `last_success` is stamped only when at least one body
    /// parsed as JSON.
    ///
    /// # Returns
    /// * `Ok(Snapshot)` - At least one endpoint was reachable
    /// * `Err(AppError)` - Every configured endpoint failed outright
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Snapshot, AppError> {
        info!("Starting leaderboard refresh");

        let outcomes = match &self.goalie_url {
            Some(goalie_url) => {
                let (skaters, goalies) = futures::join!(
                    self.fetch_endpoint(&self.url, &self.categories, Role::Skater),
                    self.fetch_endpoint(goalie_url, &self.goalie_categories, Role::Goaltender),
                );
                vec![skaters, goalies]
            }
            None => {
                vec![
                    self.fetch_endpoint(&self.url, &self.categories, Role::Skater)
                        .await,
                ]
            }
        };

        let endpoint_count = outcomes.len();
        let mut leaderboards = HashMap::new();
        let mut parsed_any = false;
        let mut failures = Vec::new();
        for outcome in outcomes {
            leaderboards.extend(outcome.boards);
            parsed_any |= outcome.parsed;
            if let Some(failure) = outcome.failed {
                failures.push(failure);
            }
        }

        if failures.len() == endpoint_count {
            return Err(AppError::all_endpoints_failed(failures.join("; ")));
        }

        let snapshot = Snapshot {
            leaderboards,
            last_success: parsed_any.then(Utc::now),
        };
        info!(
            "Refresh complete: {} leaderboards from {} endpoint(s)",
            snapshot.leaderboards.len(),
            endpoint_count - failures.len()
        );
        Ok(snapshot)
    }

    async fn fetch_endpoint(
        &self,
        url: &str,
        categories: &[String],
        role: Role,
    ) -> EndpointOutcome {
        match fetch_json(&self.client, url).await {
            Ok(payload) => {
                let records = unwrap_records(&payload, url);
                EndpointOutcome {
                    boards: build_leaderboards(
                        &records,
                        categories,
                        role,
                        &self.schema,
                        self.top_n,
                    ),
                    parsed: true,
                    failed: None,
                }
            }
            // The endpoint answered but the body was unusable: its
            // categories stay present with empty boards
            Err(e) if e.is_payload_issue() => {
                warn!("{role} statistics endpoint returned an unusable body: {e}");
                EndpointOutcome {
                    boards: build_leaderboards(&[], categories, role, &self.schema, self.top_n),
                    parsed: false,
                    failed: None,
                }
            }
            Err(e) => {
                warn!("{role} statistics endpoint failed: {e}");
                EndpointOutcome {
                    boards: HashMap::new(),
                    parsed: false,
                    failed: Some(e.to_string()),
                }
            }
        }
    }
}
