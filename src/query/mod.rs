//! Query value passed to suggestion providers
//!
//! A query bundles the raw search term, the effective result limit and a
//! read-only view of the extension that issued it.

use crate::extension::ExtensionState;

/// A single suggestion query
///
/// The term is passed through untouched: it may be empty and is never
/// trimmed or validated.
#[derive(Debug, Clone)]
pub struct Query<'a> {
    source: &'a ExtensionState,
    term: String,
    limit: i32,
}

impl<'a> Query<'a> {
    /// Create a new query
    pub fn new(source: &'a ExtensionState, term: impl Into<String>, limit: i32) -> Self {
        Self {
            source,
            term: term.into(),
            limit,
        }
    }

    /// Configuration of the extension that issued this query
    pub fn source(&self) -> &'a ExtensionState {
        self.source
    }

    /// Raw search term
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Configured limit; `<= 0` means unbounded
    pub fn limit(&self) -> i32 {
        self.limit
    }

    /// Maximum number of suggestions to return, `None` when unbounded
    pub fn max_results(&self) -> Option<usize> {
        usize::try_from(self.limit).ok().filter(|limit| *limit > 0)
    }
}
