//! Eventboard - Entry Point

use clap::Parser;
use eventboard::model::Route;
use std::path::PathBuf;
use tracing::info;

/// Eventboard - browse community events in the terminal
#[derive(Parser, Debug)]
#[command(name = "eventboard")]
#[command(version)]
#[command(about = "Terminal browser for community event listings")]
pub struct Args {
    /// Path to the event data file (JSON array or JSON Lines)
    pub file: Option<PathBuf>,

    /// Screen to open, as a page location (e.g. "events.html?search=jazz")
    #[arg(short, long, default_value = "index.html")]
    pub open: String,

    /// Default listing sort (date-asc, date-desc, title-asc, title-desc)
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Artificial delay before the event data is read, in milliseconds
    #[arg(long)]
    pub load_delay_ms: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = eventboard::config::load_config_with_precedence(args.config.clone())?;
        let merged = eventboard::config::merge_config(config_file);
        let with_env = eventboard::config::apply_env_overrides(merged);
        eventboard::config::apply_cli_overrides(
            with_env,
            args.file.clone(),
            args.sort.clone(),
            args.load_delay_ms,
        )
    };

    eventboard::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let start = Route::parse(&args.open)?;

    eventboard::view::run_with_config(&config, start, args.no_color)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["eventboard", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["eventboard", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["eventboard"]);
        assert_eq!(args.file, None);
        assert_eq!(args.open, "index.html");
        assert_eq!(args.sort, None);
        assert_eq!(args.load_delay_ms, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["eventboard", "events.json"]);
        assert_eq!(args.file, Some(PathBuf::from("events.json")));
    }

    #[test]
    fn test_open_and_sort_flags() {
        let args = Args::parse_from([
            "eventboard",
            "-o",
            "landingpage.html?id=3",
            "--sort",
            "title-desc",
        ]);
        assert_eq!(args.open, "landingpage.html?id=3");
        assert_eq!(args.sort.as_deref(), Some("title-desc"));
        assert_eq!(
            Route::parse(&args.open).unwrap(),
            Route::Detail {
                id: Some("3".to_string())
            }
        );
    }

    #[test]
    fn test_load_delay_rejects_negative() {
        let result = Args::try_parse_from(["eventboard", "--load-delay-ms", "-5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["eventboard", "--no-color"]);
        assert!(args.no_color);
    }
}
