//! Domain models for the photo feed.

use serde::{Deserialize, Serialize};

/// A single item in the feed.
///
/// Photos are immutable once received from the remote source. The `id` is the
/// uniqueness key for deduplication; everything else is carried through for
/// rendering without being interpreted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Photo {
    /// Identifier assigned by the remote source, globally unique per source
    pub id: String,
    /// URL of the preview-sized image, opaque to the sync core
    pub preview_url: String,
}

impl Photo {
    /// Create a new photo.
    pub fn new(id: impl Into<String>, preview_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            preview_url: preview_url.into(),
        }
    }
}
