use crate::constants::{self, env_vars, leaderboard, polling};
use crate::data_fetcher::schema::ApiVersion;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_stats_url;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// URL of the skater statistics endpoint. Should include https:// prefix.
    pub url: String,
    /// URL of the goaltender statistics endpoint. When absent, no
    /// goaltender leaderboards are built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goalie_url: Option<String>,
    /// Skater categories to build leaderboards for, by root name.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    /// Goaltender categories to build leaderboards for, by root name.
    /// Snapshot keys for these are prefixed so they never collide with
    /// skater categories.
    #[serde(default = "default_goalie_categories")]
    pub goalie_categories: Vec<String>,
    /// Number of leaders kept per category. Defaults to 10 if not specified.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Seconds between refresh cycles in watch mode. Defaults to one hour.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Upstream field-naming revision used to resolve category names.
    #[serde(default)]
    pub api_version: ApiVersion,
    /// Optional TOML file replacing the built-in category tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_file: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

/// Default leaderboard length
fn default_top_n() -> usize {
    leaderboard::DEFAULT_TOP_N
}

/// Default seconds between refresh cycles
fn default_poll_interval() -> u64 {
    polling::DEFAULT_INTERVAL_SECONDS
}

/// Default skater categories
fn default_categories() -> Vec<String> {
    leaderboard::DEFAULT_CATEGORIES
        .iter()
        .map(|c| c.to_string())
        .collect()
}

/// Default goaltender categories
fn default_goalie_categories() -> Vec<String> {
    leaderboard::DEFAULT_GOALIE_CATEGORIES
        .iter()
        .map(|c| c.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: String::new(),
            goalie_url: None,
            categories: default_categories(),
            goalie_categories: default_goalie_categories(),
            top_n: default_top_n(),
            poll_interval_seconds: default_poll_interval(),
            http_timeout_seconds: default_http_timeout(),
            api_version: ApiVersion::default(),
            schema_file: None,
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts user for the statistics URL and
    /// creates one. Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `LIIGA_LEADERS_URL` - Override skater statistics URL
    /// - `LIIGA_LEADERS_GOALIE_URL` - Override goaltender statistics URL
    /// - `LIIGA_LEADERS_LOG_FILE` - Override log file path
    /// - `LIIGA_LEADERS_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or created configuration
    /// * `Err(AppError)` - Error occurred during load/create
    ///
    /// # Notes
    /// - Config file is stored in platform-specific config directory
    /// - Handles first-time setup with user prompts
    /// - Environment variables take precedence over config file
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            // Check if the statistics URL is provided via environment variable
            if let Ok(url) = std::env::var(env_vars::STATS_URL) {
                Config {
                    url,
                    ..Default::default()
                }
            } else {
                let url = prompt_for_stats_url().await?;

                let config = Config {
                    url,
                    ..Default::default()
                };

                config.save().await?;
                config
            }
        };

        // Override with environment variables if present
        if let Ok(url) = std::env::var(env_vars::STATS_URL) {
            config.url = url;
        }

        if let Ok(goalie_url) = std::env::var(env_vars::GOALIE_STATS_URL) {
            config.goalie_url = Some(goalie_url);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred during save
    ///
    /// # Notes
    /// - Creates config directory if it doesn't exist
    /// - Ensures endpoint URLs have the https:// prefix
    /// - Uses TOML format for storage
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    ///
    /// # Returns
    /// String containing the absolute path to the config file
    ///
    /// # Notes
    /// - Uses platform-specific config directory (e.g., ~/.config on Linux)
    /// - Falls back to current directory if config directory is unavailable
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    ///
    /// # Returns
    /// String containing the absolute path to the log directory
    ///
    /// # Notes
    /// - Uses platform-specific config directory (e.g., ~/.config on Linux)
    /// - Falls back to current directory if config directory is unavailable
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully displayed configuration
    /// * `Err(AppError)` - Error occurred while reading config
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Statistics URL:");
            println!("{}", config.url);
            println!("────────────────────────────────────");
            println!("Goaltender Statistics URL:");
            if let Some(goalie_url) = &config.goalie_url {
                println!("{goalie_url}");
            } else {
                println!("(not configured)");
            }
            println!("────────────────────────────────────");
            println!("Categories:");
            println!("{}", config.categories.join(", "));
            println!("────────────────────────────────────");
            println!("Goaltender Categories:");
            println!("{}", config.goalie_categories.join(", "));
            println!("────────────────────────────────────");
            println!("Leaders Per Category:");
            println!("{}", config.top_n);
            println!("────────────────────────────────────");
            println!("Poll Interval:");
            println!("{} seconds", config.poll_interval_seconds);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("API Version:");
            println!("{}", config.api_version);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/liiga_leaders.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// This method can be used for general configuration saving to any location,
    /// not just for testing purposes. It creates the parent directory if it doesn't exist
    /// and ensures endpoint URLs have the proper https:// prefix.
    ///
    /// # Arguments
    /// * `path` - The file path where the configuration should be saved
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred while saving (e.g., invalid path, I/O error)
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            url: ensure_https(&self.url),
            goalie_url: self.goalie_url.as_deref().map(ensure_https),
            categories: self.categories.clone(),
            goalie_categories: self.goalie_categories.clone(),
            top_n: self.top_n,
            poll_interval_seconds: self.poll_interval_seconds,
            http_timeout_seconds: self.http_timeout_seconds,
            api_version: self.api_version,
            schema_file: self.schema_file.clone(),
            log_file_path: self.log_file_path.clone(),
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    #[allow(dead_code)] // Used in tests
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Rewrites an endpoint URL to use the https:// scheme
fn ensure_https(url: &str) -> String {
    if url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url.trim_start_matches("http://"))
    }
}
