use crate::cli::Args;
use crate::commands::render_snapshot;
use crate::config::Config;
use crate::constants::polling::MIN_INTERVAL_SECONDS;
use crate::data_fetcher::LeaderboardFetcher;
use crate::data_fetcher::models::Snapshot;
use crate::error::AppError;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

/// Run the polling watch flow.
///
/// - Refreshes the leaderboards on the configured interval (CLI override
///   wins, floored to the minimum interval)
/// - Re-renders the readings after every successful cycle
/// - A failed cycle keeps the previous snapshot and the loop alive; the
///   next tick tries again
///
/// Runs until the process is terminated.
pub async fn run_watch(
    args: &Args,
    config: &Config,
    fetcher: &LeaderboardFetcher,
) -> Result<(), AppError> {
    let interval_seconds = args
        .interval
        .unwrap_or(config.poll_interval_seconds)
        .max(MIN_INTERVAL_SECONDS);
    info!("Refreshing leaderboards every {interval_seconds} seconds");

    let mut interval = tokio::time::interval(Duration::from_secs(interval_seconds));
    // A cycle slower than the interval delays the next tick instead of
    // letting ticks bunch up
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut last_good: Option<Snapshot> = None;
    loop {
        interval.tick().await;
        match fetcher.refresh().await {
            Ok(snapshot) => {
                render_snapshot(&snapshot, fetcher, args.json)?;
                last_good = Some(snapshot);
            }
            Err(e) => match &last_good {
                Some(snapshot) => {
                    warn!("Refresh cycle failed, keeping previous leaderboards: {e}");
                    if !args.json
                        && let Some(stamp) = snapshot.last_success
                    {
                        println!("Refresh failed, showing data from {}", stamp.to_rfc3339());
                    }
                }
                None => warn!("Refresh cycle failed before any data was fetched: {e}"),
            },
        }
    }
}
