//! Remote photo source trait abstraction.

use async_trait::async_trait;

use crate::error::NetworkError;
use crate::models::Photo;

/// Trait for the remote, paginated photo source.
///
/// Two operations, both returning an ordered (possibly empty) batch of
/// photos. Page numbering starts at 1. The core treats an empty successful
/// batch the same as a batch of only already-seen photos: the mode is
/// exhausted.
///
/// Implementations include the production Unsplash-shaped client and a
/// scripted mock for tests.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch a page of the default feed.
    async fn fetch_page(&self, page: u32) -> Result<Vec<Photo>, NetworkError>;

    /// Fetch a page of search results for a query.
    async fn search_page(&self, query: &str, page: u32) -> Result<Vec<Photo>, NetworkError>;
}
