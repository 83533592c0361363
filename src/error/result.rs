//! Result type alias for feed operations.

use super::feed_error::FeedError;

/// Type alias for Results using [`FeedError`].
pub type FeedResult<T> = Result<T, FeedError>;
