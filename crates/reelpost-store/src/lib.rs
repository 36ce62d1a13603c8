//! Persisted set of review ids that have already been posted.
//!
//! The state lives in a small JSON file (`{"posted_reviews": [...]}`) that is
//! read once at startup and overwritten once at the end of a run.

mod error;
mod posted;
mod store;

pub use error::StoreError;
pub use posted::PostedIds;
pub use store::DedupStore;
