//! Mock feed source for testing.
//!
//! A configurable [`FeedSource`] that returns scripted batches or errors per
//! page and records every request for verification, without network access.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::NetworkError;
use crate::models::Photo;
use crate::traits::FeedSource;

/// A recorded page request for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFeedRequest {
    /// `Some` for search requests, `None` for the default feed
    pub query: Option<String>,
    /// Requested page number
    pub page: u32,
}

type PageResult = Result<Vec<Photo>, NetworkError>;

/// Mock feed source with scripted responses.
///
/// Responses are keyed by page (default feed) or by query and page (search).
/// Unscripted requests get the default response, an empty page. Clones share
/// the same script and request log.
///
/// # Example
///
/// ```ignore
/// use photofeed::adapters::MockFeedSource;
///
/// let source = MockFeedSource::new();
/// source.set_feed_page(1, Ok(vec![photo]));
/// source.set_search_page("cats", 1, Err(NetworkError::Other { message: "down".into() }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockFeedSource {
    feed_pages: Arc<Mutex<HashMap<u32, PageResult>>>,
    search_pages: Arc<Mutex<HashMap<(String, u32), PageResult>>>,
    requests: Arc<Mutex<Vec<RecordedFeedRequest>>>,
}

impl MockFeedSource {
    /// Create a mock source with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the response for a default-feed page.
    pub fn set_feed_page(&self, page: u32, result: PageResult) {
        self.feed_pages.lock().unwrap().insert(page, result);
    }

    /// Script the response for a search page.
    pub fn set_search_page(&self, query: &str, page: u32, result: PageResult) {
        self.search_pages
            .lock()
            .unwrap()
            .insert((query.to_string(), page), result);
    }

    /// All requests made so far, in order.
    pub fn requests(&self) -> Vec<RecordedFeedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn record(&self, query: Option<&str>, page: u32) {
        self.requests.lock().unwrap().push(RecordedFeedRequest {
            query: query.map(|q| q.to_string()),
            page,
        });
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Photo>, NetworkError> {
        self.record(None, page);
        self.feed_pages
            .lock()
            .unwrap()
            .get(&page)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn search_page(&self, query: &str, page: u32) -> Result<Vec<Photo>, NetworkError> {
        self.record(Some(query), page);
        self.search_pages
            .lock()
            .unwrap()
            .get(&(query.to_string(), page))
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str) -> Photo {
        Photo::new(id, format!("https://img.example.com/{}.jpg", id))
    }

    #[tokio::test]
    async fn test_scripted_feed_page() {
        let source = MockFeedSource::new();
        source.set_feed_page(2, Ok(vec![photo("a")]));

        let batch = source.fetch_page(2).await.unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].id, "a");
    }

    #[tokio::test]
    async fn test_unscripted_page_is_empty() {
        let source = MockFeedSource::new();
        assert!(source.fetch_page(1).await.unwrap().is_empty());
        assert!(source.search_page("cats", 1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scripted_error() {
        let source = MockFeedSource::new();
        source.set_feed_page(
            1,
            Err(NetworkError::HttpStatus {
                status: 500,
                message: "internal".to_string(),
            }),
        );

        let err = source.fetch_page(1).await.unwrap_err();
        assert!(matches!(err, NetworkError::HttpStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_requests_are_recorded_in_order() {
        let source = MockFeedSource::new();
        source.fetch_page(1).await.unwrap();
        source.search_page("cats", 1).await.unwrap();
        source.fetch_page(2).await.unwrap();

        let requests = source.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0], RecordedFeedRequest { query: None, page: 1 });
        assert_eq!(
            requests[1],
            RecordedFeedRequest {
                query: Some("cats".to_string()),
                page: 1
            }
        );
        assert_eq!(requests[2], RecordedFeedRequest { query: None, page: 2 });
    }

    #[tokio::test]
    async fn test_clones_share_script_and_log() {
        let source = MockFeedSource::new();
        let cloned = source.clone();
        cloned.set_feed_page(1, Ok(vec![photo("a")]));

        assert_eq!(source.fetch_page(1).await.unwrap().len(), 1);
        assert_eq!(cloned.request_count(), 1);
    }
}
