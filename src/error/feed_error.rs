//! Unified error type for the crate.

use thiserror::Error;

use super::network::NetworkError;

/// A reorder request that could not be applied.
///
/// The feed state is guaranteed untouched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    /// The proposed order is not a permutation of the currently loaded items.
    #[error("reorder is not a permutation of the loaded items: expected {expected} ids, got {got}")]
    NotAPermutation { expected: usize, got: usize },

    /// The proposed order names an id that is not currently loaded.
    #[error("reorder references unknown photo id {id}")]
    UnknownId { id: String },
}

/// Unified error for feed operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The remote source failed.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// A reorder request was rejected.
    #[error(transparent)]
    Reorder(#[from] ReorderError),
}
