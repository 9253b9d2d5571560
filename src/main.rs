//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `metascope` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the overlay markup or the JSON report
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use metascope::config::Opt;
use metascope::initialization::init_logger_with;
use metascope::{run_overlay, Config, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let format = config.format;
    match run_overlay(config).await {
        Ok(report) => {
            match format {
                OutputFormat::Html => match &report.overlay_html {
                    Some(html) => println!("{}", html),
                    None => eprintln!("No overlay was rendered"),
                },
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&report.analysis)
                        .context("Failed to serialize analysis report")?;
                    println!("{}", json);
                }
            }
            log::info!(
                "Rendered {} pass{} in {:.2}s",
                report.passes,
                if report.passes == 1 { "" } else { "es" },
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("metascope error: {:#}", e);
            process::exit(1);
        }
    }
}
