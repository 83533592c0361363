//! Commands and events exchanged between the feed engine and its effects.
//!
//! Network-triggering intents are split in two: a [`PageRequest`] command
//! produced by a pure decision, and a [`FeedEvent`] carrying the outcome
//! back into the state machine. The generation tag lets the engine discard
//! responses that outlived the mode they were issued for.

use crate::error::NetworkError;
use crate::models::Photo;

/// A decided-upon page request, ready to be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Engine generation at issue time; bumped on every query change
    pub generation: u64,
    /// Page to request, starting at 1
    pub page: u32,
    /// `Some` when the request targets the search source
    pub query: Option<String>,
}

impl PageRequest {
    /// Check whether this request targets the search source.
    pub fn is_search(&self) -> bool {
        self.query.is_some()
    }
}

/// Result of an executed page request, fed back into the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// The request completed with a batch of photos
    PageLoaded {
        request: PageRequest,
        batch: Vec<Photo>,
    },
    /// The request failed
    PageFailed {
        request: PageRequest,
        error: NetworkError,
    },
}

impl FeedEvent {
    /// The request this event answers.
    pub fn request(&self) -> &PageRequest {
        match self {
            FeedEvent::PageLoaded { request, .. } => request,
            FeedEvent::PageFailed { request, .. } => request,
        }
    }
}
