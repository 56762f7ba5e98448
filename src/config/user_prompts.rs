//! User interaction and prompts for configuration setup
//!
//! This module handles user prompts and input collection for configuration
//! initialization when config files don't exist or need user input.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for the player statistics URL and returns the trimmed
/// input.
///
/// This function displays a prompt asking for the statistics endpoint URL
/// and waits for user input from stdin. It handles the asynchronous input
/// reading and returns the trimmed input string.
///
/// # Returns
/// * `Ok(String)` - The trimmed user input
/// * `Err(AppError)` - Error reading from stdin
///
/// # Example
/// ```no_run
/// use liiga_leaders::config::user_prompts::prompt_for_stats_url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let url = prompt_for_stats_url().await?;
/// println!("Got statistics URL: {}", url);
/// # Ok(())
/// # }
/// ```
pub async fn prompt_for_stats_url() -> Result<String, AppError> {
    println!("Please enter the player statistics URL: ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
