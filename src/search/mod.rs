//! Suggestion query pipeline
//!
//! Invokes the active provider and normalizes its output into an ordered,
//! duplicate-free, size-bounded set.

mod executor;

pub use executor::{limit_suggestions, QueryExecutor};
