//! Watcher and session wired together the way a host page would run them.

use std::sync::Arc;
use std::time::Duration;

use metascope::error_handling::{InfoType, ProcessingStats};
use metascope::navigation::{DocumentMutation, NavigationWatcher};
use metascope::render::{OverlayButton, OverlayState, PointerTarget};
use metascope::session::{HtmlPages, Session};
use metascope::state::{MemoryStore, UiStateStore};
use tokio::sync::mpsc;

fn pages() -> HtmlPages {
    let mut pages = HtmlPages::new();
    pages.insert("https://spa.example.com/", "<title>Home</title><h1>Home</h1>");
    pages.insert(
        "https://spa.example.com/products",
        r#"<title>Products</title><script type="application/ld+json">{"@type": "ItemList"}</script>"#,
    );
    pages.insert("https://spa.example.com/contact", "<title>Contact</title>");
    pages
}

#[tokio::test(start_paused = true)]
async fn test_spa_navigation_updates_overlay_once_settled() {
    let stats = Arc::new(ProcessingStats::new());
    let store = UiStateStore::new(Arc::new(MemoryStore::new()), Arc::clone(&stats));
    let mut session = Session::start(
        pages(),
        "https://spa.example.com/",
        store,
        Arc::clone(&stats),
    )
    .await;
    let id = session.renderer().overlay().unwrap().id();

    // The user minimizes the overlay before navigating
    session
        .renderer_mut()
        .click(PointerTarget::Button(OverlayButton::Toggle));

    let (events, event_rx) = mpsc::channel(16);
    let (request_tx, requests) = mpsc::channel(16);
    let watcher = NavigationWatcher::new("https://spa.example.com/", Duration::from_millis(500))
        .spawn(event_rx, request_tx);

    events
        .send(DocumentMutation::new("https://spa.example.com/"))
        .await
        .unwrap();
    events
        .send(DocumentMutation::new("https://spa.example.com/products"))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    events
        .send(DocumentMutation::new("https://spa.example.com/contact"))
        .await
        .unwrap();
    drop(events);

    session.run(requests).await;
    watcher.await.unwrap();

    assert_eq!(session.current_url(), "https://spa.example.com/contact");
    assert_eq!(stats.get_info_count(InfoType::NavigationDetected), 1);
    assert_eq!(stats.get_info_count(InfoType::OverlayUpdated), 1);

    let overlay = session.renderer().overlay().unwrap();
    assert_eq!(overlay.id(), id);
    assert_eq!(session.renderer().state(), OverlayState::Minimized);
    assert_eq!(
        overlay.header().score.value,
        session.analysis().unwrap().score.score
    );
}
