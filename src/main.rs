// src/main.rs
mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod data_fetcher;
mod error;
mod logging;
mod sensor;

use clap::Parser;
use cli::Args;
use config::Config;
use data_fetcher::LeaderboardFetcher;
use error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Configuration operations run and exit before logging is set up;
    // their output is for the user, not the log
    if args.list_config {
        return commands::handle_list_config_command().await;
    }
    if cli::is_config_operation(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;
    let fetcher = LeaderboardFetcher::new(&config).await?;

    if args.once {
        return commands::handle_once_command(&args, &fetcher).await;
    }

    app::run_watch(&args, &config, &fetcher).await
}
