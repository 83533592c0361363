//! photofeed - feed synchronization for remote photo collections
//!
//! This crate keeps a local, deduplicated view of a remote paginated photo
//! source in sync with user-driven browsing and search. The state machine in
//! [`state`] owns the feed, the policy in [`domain`] decides when another
//! page should be requested, and [`engine`] runs the network effects and
//! feeds their results back in as events.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod events;
pub mod models;
pub mod prelude;
pub mod state;
pub mod traits;
