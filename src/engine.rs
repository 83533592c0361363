//! Feed engine: wires the state machine, pagination policy, and remote
//! source together.
//!
//! Network-triggering intents are split into a pure decision (`begin_*`,
//! returning a [`PageRequest`] or refusing) and an async effect runner
//! ([`execute`](FeedEngine::execute)) whose outcome is fed back through
//! [`apply`](FeedEngine::apply). Callers that do not need the split can use
//! the `on_*` drivers, which compose all three steps.
//!
//! Every request carries the engine's generation counter at issue time. A
//! query change bumps the generation, so a response that was issued for an
//! abandoned mode is recognized as stale in `apply` and discarded instead of
//! corrupting the reset feed.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::FeedConfig;
use crate::domain::PaginationController;
use crate::error::ReorderError;
use crate::events::{FeedEvent, PageRequest};
use crate::state::FeedState;
use crate::traits::FeedSource;

/// Owns the feed state and runs page requests against a [`FeedSource`].
pub struct FeedEngine {
    state: FeedState,
    paginator: PaginationController,
    source: Arc<dyn FeedSource>,
    generation: u64,
}

impl FeedEngine {
    /// Create an engine with the default pagination threshold.
    pub fn new(source: Arc<dyn FeedSource>) -> Self {
        Self {
            state: FeedState::new(),
            paginator: PaginationController::new(),
            source,
            generation: 0,
        }
    }

    /// Create an engine with the pagination threshold from a config.
    pub fn with_config(source: Arc<dyn FeedSource>, config: &FeedConfig) -> Self {
        Self {
            state: FeedState::new(),
            paginator: PaginationController::with_threshold(config.near_bottom_threshold),
            source,
            generation: 0,
        }
    }

    /// The current feed state, for rendering.
    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Decide whether a scroll signal should issue a page request.
    ///
    /// On a positive decision the state is marked `Loading` before this
    /// returns, so repeated scroll signals in the same tick are no-ops.
    pub fn begin_scroll(&mut self, distance_from_bottom: u32) -> Option<PageRequest> {
        if !self.paginator.should_request(distance_from_bottom, &self.state) {
            return None;
        }
        Some(self.issue_request())
    }

    /// Issue the first page request for a feed that has nothing loaded yet.
    ///
    /// Mirrors the screen-entry behavior: an empty, unexhausted, non-loading
    /// feed loads its first page without waiting for a scroll signal.
    pub fn begin_initial_load(&mut self) -> Option<PageRequest> {
        if !self.state.items.is_empty() || self.state.is_loading() || !self.state.has_more {
            return None;
        }
        Some(self.issue_request())
    }

    /// Switch to a new query and issue its first page request.
    ///
    /// Refused while a request is in flight, to avoid racing a stale
    /// response against the reset state. An empty query switches back to the
    /// default feed. The returned request targets the search source iff the
    /// new query is non-empty.
    pub fn begin_search(&mut self, text: &str) -> Option<PageRequest> {
        if self.state.is_loading() {
            debug!(query = %text, "search submit ignored, request in flight");
            return None;
        }

        self.generation += 1;
        self.state.set_query(text);
        info!(query = %text, is_searching = self.state.is_searching, "query changed");
        Some(self.issue_request())
    }

    /// Run a page request against the source and wrap the outcome.
    pub async fn execute(&self, request: &PageRequest) -> FeedEvent {
        debug!(
            page = request.page,
            search = request.is_search(),
            "executing page request"
        );
        let result = match &request.query {
            Some(query) => self.source.search_page(query, request.page).await,
            None => self.source.fetch_page(request.page).await,
        };

        match result {
            Ok(batch) => FeedEvent::PageLoaded {
                request: request.clone(),
                batch,
            },
            Err(error) => FeedEvent::PageFailed {
                request: request.clone(),
                error,
            },
        }
    }

    /// Feed an executed request's outcome back into the state machine.
    ///
    /// An event whose generation does not match the engine's current
    /// generation answers a request from an abandoned mode; applying it
    /// would mix that mode's photos into the reset feed, so it is dropped.
    pub fn apply(&mut self, event: FeedEvent) {
        if event.request().generation != self.generation {
            debug!(
                page = event.request().page,
                "discarding stale response from superseded mode"
            );
            return;
        }

        match event {
            FeedEvent::PageLoaded { batch, .. } => {
                let before = self.state.items.len();
                self.state.receive_page(batch);
                debug!(
                    appended = self.state.items.len() - before,
                    page = self.state.page,
                    has_more = self.state.has_more,
                    "page applied"
                );
            }
            FeedEvent::PageFailed { error, .. } => {
                warn!(error = %error, "page request failed, pagination halted");
                self.state.receive_error(error);
            }
        }
    }

    /// Scroll driver: decision, execution, and application in one call.
    ///
    /// Returns true if a request was issued.
    pub async fn on_scroll(&mut self, distance_from_bottom: u32) -> bool {
        match self.begin_scroll(distance_from_bottom) {
            Some(request) => {
                let event = self.execute(&request).await;
                self.apply(event);
                true
            }
            None => false,
        }
    }

    /// Search-submit driver. Returns true if the query was applied.
    pub async fn on_search_submit(&mut self, text: &str) -> bool {
        match self.begin_search(text) {
            Some(request) => {
                let event = self.execute(&request).await;
                self.apply(event);
                true
            }
            None => false,
        }
    }

    /// Initial-load driver. Returns true if a request was issued.
    pub async fn ensure_initial_load(&mut self) -> bool {
        match self.begin_initial_load() {
            Some(request) => {
                let event = self.execute(&request).await;
                self.apply(event);
                true
            }
            None => false,
        }
    }

    /// Apply a user-supplied reordering of the loaded items.
    ///
    /// Pass-through to the state machine's permutation check; on error the
    /// feed is untouched and the error is reported to the caller.
    pub fn apply_reorder(&mut self, new_order: &[String]) -> Result<(), ReorderError> {
        self.state.reorder(new_order)
    }

    fn issue_request(&mut self) -> PageRequest {
        self.state.request_page();
        PageRequest {
            generation: self.generation,
            page: self.state.page,
            query: self
                .state
                .is_searching
                .then(|| self.state.query.clone()),
        }
    }
}

impl std::fmt::Debug for FeedEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedEngine")
            .field("state", &self.state)
            .field("generation", &self.generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockFeedSource;
    use crate::models::Photo;
    use crate::state::FeedStatus;

    fn engine_with(source: MockFeedSource) -> FeedEngine {
        FeedEngine::new(Arc::new(source))
    }

    fn photos(ids: &[&str]) -> Vec<Photo> {
        ids.iter()
            .map(|id| Photo::new(*id, format!("https://img.example.com/{}.jpg", id)))
            .collect()
    }

    #[test]
    fn test_begin_scroll_marks_loading() {
        let mut engine = engine_with(MockFeedSource::new());
        let request = engine.begin_scroll(0).unwrap();

        assert_eq!(request.page, 1);
        assert_eq!(request.generation, 0);
        assert!(request.query.is_none());
        assert!(engine.state().is_loading());
    }

    #[test]
    fn test_begin_scroll_coalesces_while_loading() {
        let mut engine = engine_with(MockFeedSource::new());
        assert!(engine.begin_scroll(0).is_some());
        assert!(engine.begin_scroll(0).is_none());
        assert!(engine.begin_scroll(5).is_none());
    }

    #[test]
    fn test_begin_scroll_respects_threshold() {
        let mut engine = engine_with(MockFeedSource::new());
        assert!(engine.begin_scroll(300).is_none());
        assert!(!engine.state().is_loading());
    }

    #[test]
    fn test_begin_search_refused_while_loading() {
        let mut engine = engine_with(MockFeedSource::new());
        engine.begin_scroll(0).unwrap();

        assert!(engine.begin_search("cats").is_none());
        // The refusal must not have reset anything
        assert!(engine.state().query.is_empty());
        assert!(engine.state().is_loading());
    }

    #[test]
    fn test_begin_search_bumps_generation_and_targets_search() {
        let mut engine = engine_with(MockFeedSource::new());
        let request = engine.begin_search("cats").unwrap();

        assert_eq!(request.generation, 1);
        assert_eq!(request.page, 1);
        assert_eq!(request.query.as_deref(), Some("cats"));
        assert!(engine.state().is_searching);
    }

    #[test]
    fn test_begin_search_empty_targets_default_feed() {
        let mut engine = engine_with(MockFeedSource::new());
        engine.begin_search("cats").unwrap();
        engine.apply(FeedEvent::PageLoaded {
            request: PageRequest {
                generation: 1,
                page: 1,
                query: Some("cats".to_string()),
            },
            batch: photos(&["c1"]),
        });

        let request = engine.begin_search("").unwrap();
        assert!(request.query.is_none());
        assert_eq!(request.generation, 2);
        assert!(engine.state().items.is_empty());
    }

    #[test]
    fn test_apply_discards_stale_generation() {
        let mut engine = engine_with(MockFeedSource::new());
        let old_request = engine.begin_scroll(0).unwrap();

        // Response comes back only after the user switched modes
        engine.apply(FeedEvent::PageLoaded {
            request: old_request.clone(),
            batch: photos(&["stale1", "stale2"]),
        });
        assert_eq!(engine.state().items.len(), 2);

        let _search = engine.begin_search("cats").unwrap();
        engine.apply(FeedEvent::PageLoaded {
            request: old_request,
            batch: photos(&["stale3"]),
        });

        // The stale event must not have touched the reset-and-loading state
        assert!(engine.state().items.is_empty());
        assert!(engine.state().is_loading());
        assert_eq!(engine.state().page, 1);
    }

    #[test]
    fn test_apply_stale_error_is_discarded() {
        let mut engine = engine_with(MockFeedSource::new());
        let old_request = engine.begin_scroll(0).unwrap();
        engine.apply(FeedEvent::PageLoaded {
            request: old_request,
            batch: photos(&["a"]),
        });

        let stale = PageRequest {
            generation: 99,
            page: 7,
            query: None,
        };
        engine.apply(FeedEvent::PageFailed {
            request: stale,
            error: crate::error::NetworkError::Other {
                message: "late failure".to_string(),
            },
        });

        assert_eq!(engine.state().status, FeedStatus::Succeeded);
        assert!(engine.state().has_more);
        assert!(engine.state().error.is_none());
    }

    #[test]
    fn test_begin_initial_load_only_on_empty_feed() {
        let mut engine = engine_with(MockFeedSource::new());
        let request = engine.begin_initial_load().unwrap();
        assert_eq!(request.page, 1);

        engine.apply(FeedEvent::PageLoaded {
            request,
            batch: photos(&["a"]),
        });
        assert!(engine.begin_initial_load().is_none());
    }

    #[tokio::test]
    async fn test_on_scroll_full_cycle() {
        let source = MockFeedSource::new();
        source.set_feed_page(1, Ok(photos(&["a", "b"])));
        let mut engine = engine_with(source);

        assert!(engine.on_scroll(0).await);
        assert_eq!(engine.state().items.len(), 2);
        assert_eq!(engine.state().page, 2);
        assert_eq!(engine.state().status, FeedStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_on_search_submit_uses_search_source() {
        let source = MockFeedSource::new();
        source.set_search_page("cats", 1, Ok(photos(&["c1", "c2"])));
        let mut engine = engine_with(source.clone());

        assert!(engine.on_search_submit("cats").await);
        assert_eq!(engine.state().items.len(), 2);
        assert!(engine.state().is_searching);

        let requests = source.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query.as_deref(), Some("cats"));
        assert_eq!(requests[0].page, 1);
    }

    #[test]
    fn test_apply_reorder_passes_through() {
        let mut engine = engine_with(MockFeedSource::new());
        engine.apply(FeedEvent::PageLoaded {
            request: PageRequest {
                generation: 0,
                page: 1,
                query: None,
            },
            batch: photos(&["a", "b"]),
        });

        engine
            .apply_reorder(&["b".to_string(), "a".to_string()])
            .unwrap();
        assert_eq!(engine.state().items[0].id, "b");

        let err = engine.apply_reorder(&["b".to_string()]).unwrap_err();
        assert!(matches!(err, ReorderError::NotAPermutation { .. }));
    }
}
