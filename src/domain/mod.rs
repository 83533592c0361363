//! Pure domain policy, free of IO and rendering concerns.

mod pagination;

pub use pagination::{PaginationController, DEFAULT_NEAR_BOTTOM_THRESHOLD};
