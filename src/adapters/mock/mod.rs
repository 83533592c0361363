//! Mock implementations for testing.

mod feed_source;

pub use feed_source::{MockFeedSource, RecordedFeedRequest};
