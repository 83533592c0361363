//! Feed state and its transition rules.
//!
//! This module provides [`FeedState`], the owned state tracking the loaded
//! items, fetch status, pagination cursor, and search mode. All mutation goes
//! through the transition methods here; each one is deterministic given its
//! inputs and leaves the state well-formed.

use std::collections::{HashMap, HashSet};

use crate::error::{NetworkError, ReorderError};
use crate::models::Photo;
use crate::state::FeedStatus;

/// The single owned state of the feed synchronization core.
///
/// Invariants held after every transition:
/// - `items` contains no two photos with the same id
/// - `page` never decreases except via [`set_query`](Self::set_query)
/// - `has_more == false` marks the current mode exhausted until the next
///   query change
/// - `is_searching` is true exactly when `query` is non-empty
#[derive(Debug, Clone)]
pub struct FeedState {
    /// Loaded photos in arrival order, unless reordered by the user
    pub items: Vec<Photo>,
    /// Current fetch status
    pub status: FeedStatus,
    /// Error payload from the last failed request, only set in `Failed`
    pub error: Option<NetworkError>,
    /// Next page to request, starting at 1
    pub page: u32,
    /// Active search query, empty when browsing the default feed
    pub query: String,
    /// True when results come from the search source
    pub is_searching: bool,
    /// False once the current mode's pagination is exhausted
    pub has_more: bool,
    /// Ids of loaded photos, kept in lockstep with `items` for O(1) dedup
    seen: HashSet<String>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedState {
    /// Create the initial state: empty feed, first page pending, no search.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            status: FeedStatus::Idle,
            error: None,
            page: 1,
            query: String::new(),
            is_searching: false,
            has_more: true,
            seen: HashSet::new(),
        }
    }

    /// Check whether a page request is currently in flight.
    ///
    /// This is the authoritative in-flight indicator; there is no separate
    /// flag elsewhere.
    pub fn is_loading(&self) -> bool {
        self.status == FeedStatus::Loading
    }

    /// Mark a page request as issued.
    pub fn request_page(&mut self) {
        self.status = FeedStatus::Loading;
    }

    /// Apply a received page of photos.
    ///
    /// Photos whose id is already loaded are dropped; the remainder is
    /// appended in batch order. A page that contributes nothing new marks the
    /// mode exhausted: the source has started repeating itself, and asking
    /// for further pages would loop forever. An empty batch counts the same
    /// as an all-duplicates batch.
    pub fn receive_page(&mut self, batch: Vec<Photo>) {
        let mut appended = 0usize;
        for photo in batch {
            if self.seen.insert(photo.id.clone()) {
                self.items.push(photo);
                appended += 1;
            }
        }

        if appended > 0 {
            self.page += 1;
            self.has_more = true;
        } else {
            self.has_more = false;
        }
        self.status = FeedStatus::Succeeded;
    }

    /// Apply a failed page request.
    ///
    /// Pagination halts for the current mode; the only recovery path is a
    /// query change.
    pub fn receive_error(&mut self, err: NetworkError) {
        self.status = FeedStatus::Failed;
        self.error = Some(err);
        self.has_more = false;
    }

    /// Switch the active query, resetting the feed.
    ///
    /// An empty query selects the default feed; anything else selects the
    /// search source. Loaded items, pagination, and any previous error are
    /// discarded. This does not itself issue a request.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.is_searching = !query.is_empty();
        self.items.clear();
        self.seen.clear();
        self.page = 1;
        self.has_more = true;
        self.status = FeedStatus::Idle;
        self.error = None;
    }

    /// Rewrite the item order to the given sequence of ids.
    ///
    /// `new_order` must be a permutation of the currently loaded ids. On
    /// error the state is untouched. Only ordering changes; membership,
    /// pagination, status, and query are unaffected.
    pub fn reorder(&mut self, new_order: &[String]) -> Result<(), ReorderError> {
        if new_order.len() != self.items.len() {
            return Err(ReorderError::NotAPermutation {
                expected: self.items.len(),
                got: new_order.len(),
            });
        }

        let mut by_id: HashMap<&str, &Photo> =
            self.items.iter().map(|p| (p.id.as_str(), p)).collect();

        let mut reordered = Vec::with_capacity(new_order.len());
        for id in new_order {
            // A duplicate in new_order also lands here: its second lookup
            // finds the entry already taken.
            match by_id.remove(id.as_str()) {
                Some(photo) => reordered.push(photo.clone()),
                None => {
                    return Err(ReorderError::UnknownId { id: id.clone() });
                }
            }
        }

        self.items = reordered;
        Ok(())
    }
}
