//! Provider trait and closure adapter

use crate::query::Query;
use crate::suggestions::Suggestion;
use anyhow::Result;
use async_trait::async_trait;
use std::fmt;

/// Source of candidate suggestions for a query
///
/// Returning `Ok(None)` is treated the same as returning no suggestions.
/// Errors are handed back to the caller unchanged.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Fetch suggestions for a query, in the order they should be shown
    async fn query_suggestions(&self, query: &Query<'_>) -> Result<Option<Vec<Suggestion>>>;
}

/// Provider backed by a closure
pub struct FnProvider<F> {
    name: String,
    f: F,
}

impl<F> FnProvider<F>
where
    F: Fn(&Query<'_>) -> Result<Option<Vec<Suggestion>>> + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> fmt::Debug for FnProvider<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProvider").field("name", &self.name).finish()
    }
}

#[async_trait]
impl<F> SuggestionProvider for FnProvider<F>
where
    F: Fn(&Query<'_>) -> Result<Option<Vec<Suggestion>>> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn query_suggestions(&self, query: &Query<'_>) -> Result<Option<Vec<Suggestion>>> {
        (self.f)(query)
    }
}
