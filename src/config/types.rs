//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::NAVIGATION_SETTLE_DELAY;
use crate::error_handling::CliError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// What the CLI prints once the last pass has rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Overlay markup
    Html,
    /// Analysis report as JSON
    Json,
}

/// A simulated single-page-application navigation: the document at `file`
/// becomes current under `url`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationStep {
    pub url: String,
    pub file: PathBuf,
}

/// Parses a `URL=FILE` navigation argument.
///
/// The split happens at the last `=` so query strings in the URL survive.
pub fn parse_navigation_step(value: &str) -> Result<NavigationStep, CliError> {
    let Some((url, file)) = value.rsplit_once('=') else {
        return Err(CliError::InvalidNavigationStep(value.to_string()));
    };
    let (url, file) = (url.trim(), file.trim());
    if url.is_empty() || file.is_empty() {
        return Err(CliError::InvalidNavigationStep(value.to_string()));
    }
    Ok(NavigationStep {
        url: url.to_string(),
        file: PathBuf::from(file),
    })
}

/// Command-line options for the `metascope` binary.
#[derive(Debug, Parser)]
#[command(
    name = "metascope",
    about = "Analyzes a page's SEO metadata and renders the MetaScope overlay."
)]
pub struct Opt {
    /// HTML file of the page to analyze
    #[arg(value_parser)]
    pub file: PathBuf,

    /// URL the page was loaded from
    #[arg(long)]
    pub url: String,

    /// JSON file holding the persisted overlay state
    #[arg(long, default_value = "./metascope_state.json")]
    pub state_file: PathBuf,

    /// Replay a navigation after the first pass (URL=FILE, repeatable)
    #[arg(long = "navigate", value_parser = parse_navigation_step)]
    pub navigations: Vec<NavigationStep>,

    /// Settling delay before re-analysis after a navigation, in milliseconds
    #[arg(long, default_value_t = NAVIGATION_SETTLE_DELAY.as_millis() as u64)]
    pub settle_delay_ms: u64,

    /// Output format
    #[arg(long, value_enum, default_value = "html")]
    pub format: OutputFormat,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use metascope::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("page.html"),
///     url: "https://example.com/".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTML file of the initial page
    pub file: PathBuf,

    /// URL of the initial page
    pub url: String,

    /// Overlay state file
    pub state_file: PathBuf,

    /// Navigations replayed after the first pass
    pub navigations: Vec<NavigationStep>,

    /// Settling delay before re-analysis
    pub settle_delay: Duration,

    /// Output format
    pub format: OutputFormat,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("index.html"),
            url: String::new(),
            state_file: PathBuf::from("./metascope_state.json"),
            navigations: Vec::new(),
            settle_delay: NAVIGATION_SETTLE_DELAY,
            format: OutputFormat::Html,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            file: opt.file,
            url: opt.url,
            state_file: opt.state_file,
            navigations: opt.navigations,
            settle_delay: Duration::from_millis(opt.settle_delay_ms),
            format: opt.format,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
