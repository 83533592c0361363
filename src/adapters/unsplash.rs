//! Unsplash-shaped feed source adapter.
//!
//! Production [`FeedSource`] implementation over the photo API's two
//! endpoints: `GET /photos` for the default feed and `GET /search/photos`
//! for search. Authentication is the `client_id` request parameter.
//!
//! Decoding is deliberately forgiving: a 2xx response whose body does not
//! have the expected shape is treated as an empty page, which the state
//! machine then reads as exhaustion. Only transport and HTTP-status failures
//! surface as errors.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::config::FeedConfig;
use crate::error::{classify_reqwest_error, NetworkError};
use crate::models::Photo;
use crate::traits::FeedSource;

/// Photo object as the API returns it; only the fields the core consumes.
#[derive(Debug, Deserialize)]
struct WirePhoto {
    id: String,
    urls: WireUrls,
}

#[derive(Debug, Deserialize)]
struct WireUrls {
    small: String,
}

impl From<WirePhoto> for Photo {
    fn from(wire: WirePhoto) -> Self {
        Photo {
            id: wire.id,
            preview_url: wire.urls.small,
        }
    }
}

/// Envelope of a search response. A missing `results` array decodes as
/// empty rather than failing.
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    results: Vec<WirePhoto>,
}

/// Feed source implementation over the Unsplash-shaped HTTP API.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    client: reqwest::Client,
    base_url: String,
    access_key: String,
    page_size: u32,
}

impl UnsplashClient {
    /// Create a client from a [`FeedConfig`].
    pub fn from_config(config: &FeedConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            access_key: config.access_key.clone(),
            page_size: config.page_size,
        }
    }

    /// Create a client from a config with a custom `reqwest::Client`, for
    /// callers that need timeouts or connection-pool settings.
    pub fn with_client(client: reqwest::Client, config: &FeedConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            access_key: config.access_key.clone(),
            page_size: config.page_size,
        }
    }

    fn feed_url(&self, page: u32) -> String {
        format!(
            "{}/photos?client_id={}&page={}&per_page={}",
            self.base_url, self.access_key, page, self.page_size
        )
    }

    fn search_url(&self, query: &str, page: u32) -> String {
        format!(
            "{}/search/photos?client_id={}&page={}&per_page={}&query={}",
            self.base_url,
            self.access_key,
            page,
            self.page_size,
            urlencoding::encode(query)
        )
    }

    /// Issue a GET and return the body on 2xx, a classified error otherwise.
    async fn get_body(&self, url: &str, operation: &str) -> Result<Vec<u8>, NetworkError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e, operation, url))?;

        let status = response.status();
        if status.as_u16() == 429 {
            let retry_after_secs = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            return Err(NetworkError::RateLimited { retry_after_secs });
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(NetworkError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_reqwest_error(&e, operation, url))?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl FeedSource for UnsplashClient {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Photo>, NetworkError> {
        let url = self.feed_url(page);
        let body = self.get_body(&url, "feed page").await?;

        match serde_json::from_slice::<Vec<WirePhoto>>(&body) {
            Ok(wire) => Ok(wire.into_iter().map(Photo::from).collect()),
            Err(e) => {
                warn!(page, error = %e, "feed page body had unexpected shape, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn search_page(&self, query: &str, page: u32) -> Result<Vec<Photo>, NetworkError> {
        let url = self.search_url(query, page);
        let body = self.get_body(&url, "search page").await?;

        match serde_json::from_slice::<SearchEnvelope>(&body) {
            Ok(envelope) => Ok(envelope.results.into_iter().map(Photo::from).collect()),
            Err(e) => {
                warn!(query, page, error = %e, "search page body had unexpected shape, treating as empty");
                Ok(Vec::new())
            }
        }
    }
}
