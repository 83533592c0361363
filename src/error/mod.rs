//! Error handling for the feed synchronization core.
//!
//! Three layers:
//!
//! - [`NetworkError`] - failures of the remote source (connection, HTTP
//!   status, rate limiting), with retryability classification and
//!   user-facing messages
//! - [`ReorderError`] - a rejected reorder request; the feed state is left
//!   untouched
//! - [`FeedError`] - unified error type for callers that do not want to
//!   distinguish, with the [`FeedResult`] alias
//!
//! Remote-call failures never cross the core boundary as `Err`: the adapter
//! converts them into events and the state machine absorbs them into a
//! well-formed `Failed` state.

mod feed_error;
mod network;
mod result;

pub use feed_error::{FeedError, ReorderError};
pub use network::{classify_reqwest_error, NetworkError};
pub use result::FeedResult;
