use crate::config::Config;
use crate::constants::{leaderboard, polling};
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `config` - The configuration to validate
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(AppError)` - Configuration validation failed
///
/// # Validation Rules
/// - Statistics URL cannot be empty and must be a valid URL or domain name
/// - The goaltender URL, when present, follows the same rules
/// - At least one category must be requested across both roles
/// - Category names cannot be empty or contain whitespace
/// - `top_n` must be positive and within the accepted maximum
/// - The polling interval must not fall below the accepted minimum
/// - If a log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_endpoint_url(&config.url, "Statistics URL")?;

    if let Some(goalie_url) = &config.goalie_url {
        validate_endpoint_url(goalie_url, "Goaltender statistics URL")?;
    }

    if config.categories.is_empty() && config.goalie_categories.is_empty() {
        return Err(AppError::config_error(
            "At least one category must be configured",
        ));
    }

    for category in config.categories.iter().chain(config.goalie_categories.iter()) {
        if category.is_empty() {
            return Err(AppError::config_error("Category names cannot be empty"));
        }
        if category.chars().any(char::is_whitespace) {
            return Err(AppError::config_error(format!(
                "Category name '{category}' cannot contain whitespace"
            )));
        }
    }

    if config.top_n == 0 {
        return Err(AppError::config_error("top_n must be at least 1"));
    }
    if config.top_n > leaderboard::MAX_TOP_N {
        return Err(AppError::config_error(format!(
            "top_n cannot exceed {}",
            leaderboard::MAX_TOP_N
        )));
    }

    if config.poll_interval_seconds < polling::MIN_INTERVAL_SECONDS {
        return Err(AppError::config_error(format!(
            "Poll interval must be at least {} seconds",
            polling::MIN_INTERVAL_SECONDS
        )));
    }

    // Validate log file path if provided
    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    if let Some(schema_file) = &config.schema_file
        && schema_file.is_empty()
    {
        return Err(AppError::config_error("Schema file path cannot be empty"));
    }

    Ok(())
}

fn validate_endpoint_url(url: &str, label: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::config_error(format!("{label} cannot be empty")));
    }

    // Check if the URL looks like a valid URL or domain
    if !url.starts_with("http://") && !url.starts_with("https://") {
        // If it doesn't start with protocol, it should at least look like a domain
        if !url.contains('.') && !url.starts_with("localhost") {
            return Err(AppError::config_error(format!(
                "{label} must be a valid URL or domain name"
            )));
        }
    }

    Ok(())
}
