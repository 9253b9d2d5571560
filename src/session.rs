//! One overlay session over a document that may navigate.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::analysis::{analyze_document, PageAnalysis};
use crate::document::{DocumentAccessor, HtmlDocument};
use crate::error_handling::{ErrorType, InfoType, ProcessingStats};
use crate::navigation::ReanalysisRequest;
use crate::render::{ReconciliationRenderer, RenderOutcome};
use crate::state::UiStateStore;

/// Resolves the document currently shown at a URL.
pub trait DocumentSource {
    fn document_for(&self, url: &str) -> Option<Box<dyn DocumentAccessor>>;
}

/// In-memory pages keyed by URL, parsed on demand.
///
/// Holds the document currently shown at each URL; inserting for a URL that
/// is already present replaces what it shows.
#[derive(Debug, Clone, Default)]
pub struct HtmlPages {
    pages: HashMap<String, String>,
}

impl HtmlPages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, url: impl Into<String>, html: impl Into<String>) {
        self.pages.insert(url.into(), html.into());
    }
}

impl DocumentSource for HtmlPages {
    fn document_for(&self, url: &str) -> Option<Box<dyn DocumentAccessor>> {
        self.pages
            .get(url)
            .map(|html| Box::new(HtmlDocument::parse(html, url)) as Box<dyn DocumentAccessor>)
    }
}

/// Ties a document source to the renderer.
///
/// The first pass runs as soon as the persisted display state is loaded;
/// further passes run for each [`ReanalysisRequest`].
pub struct Session<S> {
    source: S,
    renderer: ReconciliationRenderer,
    stats: Arc<ProcessingStats>,
    current_url: String,
    analysis: Option<PageAnalysis>,
}

impl<S: DocumentSource> Session<S> {
    pub async fn start(
        source: S,
        url: impl Into<String>,
        store: UiStateStore,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        let renderer = ReconciliationRenderer::bootstrap(store, Arc::clone(&stats)).await;
        let url = url.into();
        let mut session = Session {
            source,
            renderer,
            stats,
            current_url: url.clone(),
            analysis: None,
        };
        session.run_pass(&url);
        session
    }

    /// Analyzes the document at `url` and renders the result.
    ///
    /// Returns `None`, leaving the overlay as it was, when the source has no
    /// document for `url`. The current URL and analysis only move forward when
    /// the pass reached the overlay.
    pub fn run_pass(&mut self, url: &str) -> Option<RenderOutcome> {
        let Some(document) = self.source.document_for(url) else {
            log::warn!("No document available for {}", url);
            self.stats.increment_error(ErrorType::DocumentUnavailable);
            return None;
        };
        let analysis = analyze_document(document.as_ref(), &self.stats);
        let outcome = self.renderer.render(&analysis);
        if outcome != RenderOutcome::Aborted {
            self.current_url = url.to_string();
            self.analysis = Some(analysis);
        }
        Some(outcome)
    }

    /// Re-analyzes after a settled navigation.
    pub fn handle(&mut self, request: &ReanalysisRequest) -> Option<RenderOutcome> {
        log::info!("Re-analyzing after navigation to {}", request.url);
        self.stats.increment_info(InfoType::NavigationDetected);
        self.run_pass(&request.url)
    }

    /// Handles every request until the channel closes.
    pub async fn run(&mut self, mut requests: mpsc::Receiver<ReanalysisRequest>) {
        while let Some(request) = requests.recv().await {
            self.handle(&request);
        }
    }

    /// The document source, for hosts whose documents change between passes.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn renderer(&self) -> &ReconciliationRenderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut ReconciliationRenderer {
        &mut self.renderer
    }

    /// Result of the most recent pass that reached the overlay.
    pub fn analysis(&self) -> Option<&PageAnalysis> {
        self.analysis.as_ref()
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }
}
