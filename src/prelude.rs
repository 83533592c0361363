//! Prelude module for convenient imports.
//!
//! Re-exports the types most callers need:
//!
//! ```ignore
//! use photofeed::prelude::*;
//! ```

// Core engine and state
pub use crate::engine::FeedEngine;
pub use crate::state::{FeedState, FeedStatus};

// Models and events
pub use crate::events::{FeedEvent, PageRequest};
pub use crate::models::Photo;

// Policy and configuration
pub use crate::config::FeedConfig;
pub use crate::domain::{PaginationController, DEFAULT_NEAR_BOTTOM_THRESHOLD};

// Source seam and adapters
pub use crate::adapters::{MockFeedSource, UnsplashClient};
pub use crate::traits::FeedSource;

// Errors
pub use crate::error::{FeedError, FeedResult, NetworkError, ReorderError};
