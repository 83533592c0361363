//! Owned state for the feed synchronization core.
//!
//! [`FeedState`] is the single source of truth for what the presentation
//! layer renders. It is created once per screen/session and mutated only
//! through its transition methods.

mod feed;

pub use feed::FeedState;

/// Fetch status of the feed.
///
/// `Failed` is terminal for the current mode: pagination stays halted until
/// a query change resets the state to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedStatus {
    /// No request issued yet for the current mode
    #[default]
    Idle,
    /// A page request is in flight
    Loading,
    /// The last page request completed
    Succeeded,
    /// The last page request failed; see `FeedState::error`
    Failed,
}
