//! Common test utilities for integration tests.
//!
//! Reusable fixtures and helpers: photo/batch builders, scripted sources,
//! and tracing setup for `RUST_LOG`-filtered test output.

use std::sync::Arc;
use std::sync::Once;

use photofeed::adapters::MockFeedSource;
use photofeed::engine::FeedEngine;
use photofeed::models::Photo;

static INIT_TRACING: Once = Once::new();

/// Install a test subscriber once per process, honoring `RUST_LOG`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Create a photo with a derived preview URL.
pub fn photo(id: &str) -> Photo {
    Photo::new(id, format!("https://img.example.com/{}-small.jpg", id))
}

/// Create a batch of photos from ids.
pub fn batch(ids: &[&str]) -> Vec<Photo> {
    ids.iter().map(|id| photo(id)).collect()
}

/// Create a batch of `count` photos with ids `prefix0..prefixN`.
pub fn numbered_batch(prefix: &str, start: usize, count: usize) -> Vec<Photo> {
    (start..start + count)
        .map(|n| photo(&format!("{}{}", prefix, n)))
        .collect()
}

/// Ids of the loaded items, for assertions.
pub fn loaded_ids(engine: &FeedEngine) -> Vec<String> {
    engine.state().items.iter().map(|p| p.id.clone()).collect()
}

/// Engine over a fresh mock source; returns both for scripting and asserting.
pub fn engine_with_mock() -> (FeedEngine, MockFeedSource) {
    init_tracing();
    let source = MockFeedSource::new();
    let engine = FeedEngine::new(Arc::new(source.clone()));
    (engine, source)
}
