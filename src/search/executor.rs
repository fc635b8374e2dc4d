//! Suggestion query execution

use crate::extension::ExtensionState;
use crate::metrics::QueryMetrics;
use crate::providers::SuggestionProvider;
use crate::query::Query;
use crate::suggestions::Suggestion;
use anyhow::Result;
use indexmap::IndexSet;
use std::sync::Arc;
use tracing::debug;

/// Runs queries against the active provider and bounds the result
///
/// The result keeps the provider's order, collapses duplicates onto their
/// first position and never holds more than a positive limit.
#[derive(Clone, Default)]
pub struct QueryExecutor {
    /// Active provider; `None` answers every query with no suggestions
    provider: Option<Arc<dyn SuggestionProvider>>,
    /// Maximum number of suggestions, `<= 0` for unbounded
    limit: i32,
    metrics: Arc<QueryMetrics>,
}

impl QueryExecutor {
    /// Create an executor without a provider and without a limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider
    pub fn with_provider(mut self, provider: Arc<dyn SuggestionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the limit
    pub fn with_limit(mut self, limit: i32) -> Self {
        self.limit = limit;
        self
    }

    /// Share a metrics collector
    pub fn with_metrics(mut self, metrics: Arc<QueryMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Active provider, if any
    pub fn provider(&self) -> Option<&Arc<dyn SuggestionProvider>> {
        self.provider.as_ref()
    }

    /// Replace the provider; `None` disables suggestions
    pub fn set_provider(&mut self, provider: Option<Arc<dyn SuggestionProvider>>) {
        self.provider = provider;
    }

    /// Configured limit, `<= 0` for unbounded
    pub fn limit(&self) -> i32 {
        self.limit
    }

    /// Set the limit
    pub fn set_limit(&mut self, limit: i32) {
        self.limit = limit;
    }

    /// Metrics collector shared with this executor
    pub fn metrics(&self) -> &Arc<QueryMetrics> {
        &self.metrics
    }

    /// Build a query from the term and the configured limit, then execute it
    pub async fn query_suggestions(
        &self,
        source: &ExtensionState,
        term: &str,
    ) -> Result<IndexSet<Suggestion>> {
        let query = Query::new(source, term, self.limit);
        self.execute(&query).await
    }

    /// Execute a query, keeping the result within the query's limit
    ///
    /// Provider errors are returned unchanged.
    pub async fn execute(&self, query: &Query<'_>) -> Result<IndexSet<Suggestion>> {
        self.metrics.inc_query();

        let Some(provider) = self.provider.as_ref() else {
            self.metrics.inc_unconfigured();
            return Ok(IndexSet::new());
        };

        let suggestions = match provider.query_suggestions(query).await {
            Ok(Some(suggestions)) => suggestions,
            Ok(None) => {
                debug!("Provider {} returned no collection", provider.name());
                self.metrics.inc_empty_result();
                return Ok(IndexSet::new());
            }
            Err(e) => {
                self.metrics.inc_provider_failure();
                return Err(e);
            }
        };

        let (limited, dropped) = limit_suggestions(suggestions, query.max_results());
        if dropped > 0 {
            debug!(
                "Provider {} exceeded limit {} for '{}', dropped {} entries",
                provider.name(),
                query.limit(),
                query.term(),
                dropped
            );
            self.metrics.inc_truncated();
        }

        Ok(limited)
    }
}

/// Collapse duplicates in first-seen order and keep at most `max_results`
///
/// Returns the kept set and the number of excess entries that were dropped.
pub fn limit_suggestions(
    suggestions: Vec<Suggestion>,
    max_results: Option<usize>,
) -> (IndexSet<Suggestion>, usize) {
    let capacity = max_results.map_or(suggestions.len(), |max| max.min(suggestions.len()));
    let mut kept = IndexSet::with_capacity(capacity);
    let mut dropped = 0;

    for suggestion in suggestions {
        if kept.contains(&suggestion) {
            continue;
        }
        if max_results.is_some_and(|max| kept.len() >= max) {
            dropped += 1;
            continue;
        }
        kept.insert(suggestion);
    }

    (kept, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::FnProvider;

    fn provider_of(values: &'static [&'static str]) -> Arc<dyn SuggestionProvider> {
        Arc::new(FnProvider::new("fixed", move |_: &Query<'_>| {
            Ok(Some(values.iter().map(|v| Suggestion::new(*v)).collect()))
        }))
    }

    fn values(set: &IndexSet<Suggestion>) -> Vec<&str> {
        set.iter().filter_map(|s| s.value.as_deref()).collect()
    }

    #[tokio::test]
    async fn test_no_provider_is_empty() {
        let executor = QueryExecutor::new().with_limit(5);
        let state = ExtensionState::default();

        let result = executor.query_suggestions(&state, "cat").await.unwrap();

        assert!(result.is_empty());
        assert_eq!(executor.metrics().snapshot().unconfigured, 1);
    }

    #[tokio::test]
    async fn test_provider_none_is_empty() {
        let executor = QueryExecutor::new()
            .with_provider(Arc::new(FnProvider::new("null", |_: &Query<'_>| Ok(None))));
        let state = ExtensionState::default();

        let result = executor.query_suggestions(&state, "cat").await.unwrap();

        assert!(result.is_empty());
        assert_eq!(executor.metrics().snapshot().empty_results, 1);
    }

    #[tokio::test]
    async fn test_duplicates_collapse_in_order() {
        let executor = QueryExecutor::new()
            .with_provider(provider_of(&["cat", "car", "cat"]))
            .with_limit(5);
        let state = ExtensionState::default();

        let result = executor.query_suggestions(&state, "ca").await.unwrap();

        assert_eq!(values(&result), vec!["cat", "car"]);
        assert_eq!(executor.metrics().snapshot().truncated, 0);
    }

    #[tokio::test]
    async fn test_limit_keeps_first_entries() {
        let executor = QueryExecutor::new()
            .with_provider(provider_of(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]))
            .with_limit(3);
        let state = ExtensionState::default();

        let result = executor.query_suggestions(&state, "").await.unwrap();

        assert_eq!(values(&result), vec!["a", "b", "c"]);
        assert_eq!(executor.metrics().snapshot().truncated, 1);
    }

    #[tokio::test]
    async fn test_unbounded_limits() {
        let state = ExtensionState::default();

        for limit in [0, -1, i32::MIN] {
            let executor = QueryExecutor::new()
                .with_provider(provider_of(&["x", "y", "x", "z"]))
                .with_limit(limit);

            let result = executor.query_suggestions(&state, "q").await.unwrap();
            assert_eq!(values(&result), vec!["x", "y", "z"]);
        }
    }

    #[tokio::test]
    async fn test_limit_counts_distinct_entries() {
        let executor = QueryExecutor::new()
            .with_provider(provider_of(&["a", "a", "a", "b", "c"]))
            .with_limit(2);
        let state = ExtensionState::default();

        let result = executor.query_suggestions(&state, "").await.unwrap();

        assert_eq!(values(&result), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let executor = QueryExecutor::new().with_provider(Arc::new(FnProvider::new(
            "failing",
            |_: &Query<'_>| Err(anyhow::anyhow!("backend down")),
        )));
        let state = ExtensionState::default();

        let err = executor.query_suggestions(&state, "cat").await.unwrap_err();

        assert_eq!(err.to_string(), "backend down");
        assert_eq!(executor.metrics().snapshot().provider_failures, 1);
    }

    #[tokio::test]
    async fn test_provider_sees_query() {
        let executor = QueryExecutor::new()
            .with_provider(Arc::new(FnProvider::new("echo", |q: &Query<'_>| {
                Ok(Some(vec![
                    Suggestion::new(q.term()),
                    Suggestion::new(q.limit().to_string()),
                    Suggestion::new(q.source().min_chars.to_string()),
                ]))
            })))
            .with_limit(7);
        let state = ExtensionState {
            min_chars: 2,
            ..Default::default()
        };

        let result = executor.query_suggestions(&state, "dog").await.unwrap();

        assert_eq!(values(&result), vec!["dog", "7", "2"]);
    }

    #[test]
    fn test_limit_suggestions_within_limit_unchanged() {
        let input = vec![Suggestion::new("a"), Suggestion::new("b")];
        let (kept, dropped) = limit_suggestions(input.clone(), Some(2));

        assert_eq!(kept.into_iter().collect::<Vec<_>>(), input);
        assert_eq!(dropped, 0);
    }
}
