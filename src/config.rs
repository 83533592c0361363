//! Feed configuration.
//!
//! Collects the knobs that belong to the remote-source adapter rather than
//! the sync core: endpoint, credential, page size, and the pagination
//! trigger threshold.

use crate::domain::DEFAULT_NEAR_BOTTOM_THRESHOLD;

/// Default base URL of the photo API.
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Default number of photos requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Configuration for a feed session.
///
/// # Example
///
/// ```ignore
/// use photofeed::config::FeedConfig;
///
/// let config = FeedConfig::new("my-access-key")
///     .with_page_size(30)
///     .with_near_bottom_threshold(50);
/// ```
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL of the photo API
    pub base_url: String,
    /// Access key sent as the `client_id` request parameter
    pub access_key: String,
    /// Photos requested per page
    pub page_size: u32,
    /// Near-bottom threshold for the pagination trigger, in scroll units
    pub near_bottom_threshold: u32,
}

impl FeedConfig {
    /// Create a configuration with the given access key and defaults for
    /// everything else.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_key: access_key.into(),
            page_size: DEFAULT_PAGE_SIZE,
            near_bottom_threshold: DEFAULT_NEAR_BOTTOM_THRESHOLD,
        }
    }

    /// Override the API base URL (tests point this at a local stub server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Override the pagination trigger threshold.
    pub fn with_near_bottom_threshold(mut self, threshold: u32) -> Self {
        self.near_bottom_threshold = threshold;
        self
    }
}
