//! Pagination trigger policy.
//!
//! Decides, from a scroll-position signal and the current feed state, whether
//! the next page should be requested. The policy itself is stateless: the
//! authoritative in-flight indicator is `FeedState::is_loading`, so scroll
//! signals arriving while a request is pending are idempotent no-ops.

use crate::state::FeedState;

/// How close to the bottom (in scroll units) the viewport must be before the
/// next page is requested.
pub const DEFAULT_NEAR_BOTTOM_THRESHOLD: u32 = 20;

/// Translates scroll-position signals into page-request decisions.
#[derive(Debug, Clone, Copy)]
pub struct PaginationController {
    /// Near-bottom threshold in scroll units
    threshold: u32,
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationController {
    /// Create a controller with the default near-bottom threshold.
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_NEAR_BOTTOM_THRESHOLD,
        }
    }

    /// Create a controller with a custom near-bottom threshold.
    pub fn with_threshold(threshold: u32) -> Self {
        Self { threshold }
    }

    /// Get the configured near-bottom threshold.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Decide whether a page request should be issued right now.
    ///
    /// True iff the viewport is within the threshold of the bottom, no
    /// request is in flight, and the current mode is not exhausted. Scroll
    /// signals are high-frequency; callers may invoke this on every one.
    pub fn should_request(&self, distance_from_bottom: u32, state: &FeedState) -> bool {
        distance_from_bottom <= self.threshold && !state.is_loading() && state.has_more
    }
}
