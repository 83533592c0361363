//! Trait abstractions at the crate's external seams.
//!
//! The feed core depends on the remote photo source only through
//! [`FeedSource`], enabling dependency injection and mocking in tests.

mod feed_source;

pub use feed_source::FeedSource;
