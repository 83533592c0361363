//! Concrete implementations of the crate's trait seams.
//!
//! # Adapters
//!
//! - [`UnsplashClient`] - production [`FeedSource`](crate::traits::FeedSource)
//!   over the Unsplash-shaped HTTP API using reqwest
//!
//! # Mock implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockFeedSource`] - scripted pages and recorded requests

pub mod mock;
pub mod unsplash;

pub use mock::MockFeedSource;
pub use unsplash::UnsplashClient;
