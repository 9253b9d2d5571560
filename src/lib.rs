//! metascope library: on-page SEO analysis and overlay rendering
//!
//! This library reads a document's SEO metadata, structured data and hreflang
//! declarations, scores them, and renders the result as an overlay whose
//! display state (pinned, minimized, position) persists across runs.
//! Client-side navigations are detected and trigger a re-analysis that updates
//! the existing overlay in place.
//!
//! # Example
//!
//! ```no_run
//! use metascope::{run_overlay, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("page.html"),
//!     url: "https://example.com/".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_overlay(config).await?;
//! println!("{} pass(es), final score {:?}", report.passes, report.score());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. [`state::UiStateStore`] spawns its
//! writer task on creation.

pub mod analysis;
pub mod config;
pub mod document;
pub mod error_handling;
pub mod initialization;
pub mod navigation;
pub mod overlay;
pub mod parse;
pub mod render;
pub mod session;
pub mod state;
mod utils;

// Re-export public API
pub use analysis::{analyze_document, PageAnalysis};
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use document::{DocumentAccessor, HtmlDocument};
pub use run::{run_overlay, RunReport};

mod run {
    use std::sync::Arc;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{info, warn};
    use tokio::sync::mpsc;

    use crate::analysis::PageAnalysis;
    use crate::config::Config;
    use crate::error_handling::ProcessingStats;
    use crate::navigation::{DocumentMutation, NavigationWatcher};
    use crate::session::{HtmlPages, Session};
    use crate::state::{FileStore, UiStateStore};

    /// Outcome of [`run_overlay`].
    #[derive(Debug)]
    pub struct RunReport {
        /// Analysis of the last rendered pass
        pub analysis: Option<PageAnalysis>,
        /// Overlay markup after the last pass, `None` if no overlay was rendered
        pub overlay_html: Option<String>,
        /// Number of analysis passes that ran
        pub passes: usize,
        /// Wall-clock duration of the run
        pub elapsed_seconds: f64,
    }

    impl RunReport {
        /// Score of the last pass.
        pub fn score(&self) -> Option<u32> {
            self.analysis.as_ref().map(|a| a.score.score)
        }
    }

    /// Analyzes the configured page, replays its navigations, and returns the
    /// final overlay.
    ///
    /// UI state is loaded from and written back to `config.state_file`. Each
    /// navigation is fed to a [`NavigationWatcher`] as a document mutation and
    /// re-analyzed once it settles.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTML file cannot be read. Storage failures are
    /// logged and never abort the run.
    pub async fn run_overlay(config: Config) -> Result<RunReport> {
        let start = Instant::now();

        let html = tokio::fs::read_to_string(&config.file)
            .await
            .with_context(|| format!("Failed to read {}", config.file.display()))?;
        let mut steps = Vec::with_capacity(config.navigations.len());
        for step in &config.navigations {
            let html = tokio::fs::read_to_string(&step.file)
                .await
                .with_context(|| format!("Failed to read {}", step.file.display()))?;
            steps.push((step.url.clone(), html));
        }
        info!(
            "Loaded {} page(s), state file {}",
            steps.len() + 1,
            config.state_file.display()
        );

        // Only the initial page is shown at first; each step swaps in its own
        // document when it is replayed.
        let mut pages = HtmlPages::new();
        pages.insert(config.url.clone(), html);

        let stats = Arc::new(ProcessingStats::new());
        let store = UiStateStore::new(
            Arc::new(FileStore::new(&config.state_file)),
            Arc::clone(&stats),
        );
        let mut session =
            Session::start(pages, config.url.clone(), store.clone(), Arc::clone(&stats)).await;
        let mut passes = usize::from(session.analysis().is_some());

        let (events, event_rx) = mpsc::channel(16);
        let (request_tx, mut requests) = mpsc::channel(16);
        let watcher = NavigationWatcher::new(config.url.clone(), config.settle_delay)
            .spawn(event_rx, request_tx);

        let mut last_url = config.url.clone();
        for (url, html) in steps {
            session.source_mut().insert(url.clone(), html);
            if url == last_url {
                info!("Skipping navigation to the current URL {}", url);
                continue;
            }
            last_url.clone_from(&url);
            events
                .send(DocumentMutation::new(url.clone()))
                .await
                .context("Navigation watcher stopped unexpectedly")?;
            match requests.recv().await {
                Some(request) => {
                    if session.handle(&request).is_some() {
                        passes += 1;
                    }
                }
                None => {
                    warn!("Navigation watcher closed before {} settled", url);
                    break;
                }
            }
        }
        drop(events);
        if let Err(e) = watcher.await {
            warn!("Navigation watcher task failed: {}", e);
        }

        store.flush().await;
        stats.log_summary();

        Ok(RunReport {
            overlay_html: session.renderer().overlay().map(|o| o.to_html()),
            analysis: session.analysis().cloned(),
            passes,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }
}
