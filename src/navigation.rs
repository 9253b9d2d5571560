//! Detection of client-side navigations.
//!
//! Single-page applications change the URL without reloading the document.
//! The [`NavigationWatcher`] observes document mutations, notices when the URL
//! has changed, and asks for a re-analysis once the page had time to settle.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// A change to the observed document subtree, carrying the URL at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMutation {
    pub url: String,
}

impl DocumentMutation {
    pub fn new(url: impl Into<String>) -> Self {
        DocumentMutation { url: url.into() }
    }
}

/// Request for a full analysis and render pass of the document at `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReanalysisRequest {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct NavigationWatcher {
    last_url: String,
    settle_delay: Duration,
}

impl NavigationWatcher {
    pub fn new(initial_url: impl Into<String>, settle_delay: Duration) -> Self {
        NavigationWatcher {
            last_url: initial_url.into(),
            settle_delay,
        }
    }

    /// Records the mutation's URL. Returns `true` when it differs from the last one seen.
    pub fn observe(&mut self, mutation: &DocumentMutation) -> bool {
        if mutation.url == self.last_url {
            return false;
        }
        log::debug!("URL changed: {} -> {}", self.last_url, mutation.url);
        self.last_url.clone_from(&mutation.url);
        true
    }

    pub fn last_url(&self) -> &str {
        &self.last_url
    }

    /// Consumes mutations until `events` closes, emitting one request per
    /// settled URL change.
    ///
    /// A URL change arriving while a request is pending restarts the settling
    /// delay, so only the final URL is requested. A request still pending when
    /// `events` closes is delivered after its delay. Returns early if the
    /// receiver of `requests` is gone.
    pub async fn run(
        mut self,
        mut events: mpsc::Receiver<DocumentMutation>,
        requests: mpsc::Sender<ReanalysisRequest>,
    ) {
        let mut deadline: Option<Instant> = None;

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(mutation) => {
                        if self.observe(&mutation) {
                            deadline = Some(Instant::now() + self.settle_delay);
                        }
                    }
                    None => break,
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    deadline = None;
                    if !self.request(&requests).await {
                        return;
                    }
                }
            }
        }

        if let Some(deadline) = deadline {
            sleep_until(deadline).await;
            self.request(&requests).await;
        }
        log::trace!("Navigation watcher stopped at {}", self.last_url);
    }

    async fn request(&self, requests: &mpsc::Sender<ReanalysisRequest>) -> bool {
        log::info!("Navigation settled on {}", self.last_url);
        let request = ReanalysisRequest {
            url: self.last_url.clone(),
        };
        if requests.send(request).await.is_err() {
            log::debug!("Re-analysis receiver dropped, stopping navigation watcher");
            return false;
        }
        true
    }

    /// Runs the watcher on its own task.
    pub fn spawn(
        self,
        events: mpsc::Receiver<DocumentMutation>,
        requests: mpsc::Sender<ReanalysisRequest>,
    ) -> JoinHandle<()> {
        tokio::spawn(self.run(events, requests))
    }
}
