use crate::cli::Args;
use crate::config::Config;
use crate::config::user_prompts::prompt_for_stats_url;
use crate::data_fetcher::LeaderboardFetcher;
use crate::data_fetcher::models::Snapshot;
use crate::error::AppError;
use crate::sensor::{CategoryReading, category_reading};

/// Handles the --list-config command.
///
/// Displays current configuration settings.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-goalie-url,
/// --clear-goalie-url, --set-log-file, --clear-log-file).
///
/// Updates configuration based on the provided arguments, validates the
/// result and saves it. Nothing is written when validation fails.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_url) = &args.new_stats_url {
        config.url = if new_url.is_empty() {
            prompt_for_stats_url().await?
        } else {
            new_url.clone()
        };
    }

    if let Some(new_goalie_url) = &args.new_goalie_url {
        config.goalie_url = Some(new_goalie_url.clone());
    } else if args.clear_goalie_url {
        config.goalie_url = None;
        println!("Goaltender statistics URL cleared.");
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles the --once command (single fetch mode).
///
/// Runs one refresh cycle, renders every configured category and exits.
/// A refresh where every endpoint failed propagates as an error so
/// scripted callers see a non-zero exit code.
pub async fn handle_once_command(
    args: &Args,
    fetcher: &LeaderboardFetcher,
) -> Result<(), AppError> {
    let snapshot = fetcher.refresh().await?;
    render_snapshot(&snapshot, fetcher, args.json)
}

/// Renders the readings for every configured category, as pretty JSON or
/// as aligned text. Categories the snapshot lacks still appear with the
/// "Unknown" placeholder state.
pub fn render_snapshot(
    snapshot: &Snapshot,
    fetcher: &LeaderboardFetcher,
    json: bool,
) -> Result<(), AppError> {
    let readings: Vec<CategoryReading> = fetcher
        .configured_keys()
        .iter()
        .map(|key| category_reading(snapshot, key, fetcher.schema()))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&readings)?);
        return Ok(());
    }

    for reading in &readings {
        println!("{}: {}", reading.attributes.category_name, reading.state);
        for leader in &reading.attributes.leaders {
            println!(
                "  {:>2}. {:<24} {:<10} {:>8}",
                leader.rank, leader.name, leader.team, leader.value
            );
        }
        println!();
    }
    if let Some(stamp) = snapshot.last_success {
        println!("Updated: {}", stamp.to_rfc3339());
    }

    Ok(())
}
