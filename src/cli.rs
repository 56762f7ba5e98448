use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True when the invocation only changes configuration and should exit
/// without fetching anything.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_stats_url.is_some()
        || args.new_goalie_url.is_some()
        || args.clear_goalie_url
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Determines whether log lines may go to stdout.
/// Plain `--once` and `--json` runs keep stdout clean for the rendered
/// output; watch mode and `--debug` log to both stdout and the file.
pub fn logs_to_stdout(args: &Args) -> bool {
    args.debug || (!args.once && !args.json)
}

/// Finnish Hockey League (Liiga) Player Statistics Leaderboards
///
/// Fetches player and goaltender statistics from the Liiga API, ranks the
/// top players per configured category, and prints the leaderboards.
///
/// By default the tool keeps running and refreshes the leaderboards on the
/// configured polling interval. Use --once for a single fetch, --json for
/// machine-readable output.
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Fetch statistics once, print the leaderboards and exit immediately.
    /// Useful for scripts or quick checks.
    #[arg(short, long)]
    pub once: bool,

    /// Print readings as JSON instead of formatted text.
    /// In watch mode one JSON document is printed per refresh cycle.
    #[arg(short = 'j', long = "json", help_heading = "Display Options")]
    pub json: bool,

    /// Override the polling interval in seconds for watch mode.
    #[arg(
        long = "interval",
        help_heading = "Display Options",
        value_name = "SECONDS"
    )]
    pub interval: Option<u64>,

    /// Update the player statistics URL in config. Will prompt for the URL if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "URL",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_stats_url: Option<String>,

    /// Update the goaltender statistics URL in config.
    #[arg(
        long = "set-goalie-url",
        help_heading = "Configuration",
        value_name = "URL"
    )]
    pub new_goalie_url: Option<String>,

    /// Remove the goaltender statistics URL from config. Goaltender
    /// categories are not fetched without one.
    #[arg(long = "clear-goalie-url", help_heading = "Configuration")]
    pub clear_goalie_url: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode which logs to stdout in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
