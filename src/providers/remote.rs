//! Providers backed by upstream autocomplete APIs

use super::traits::SuggestionProvider;
use crate::network::HttpClient;
use crate::query::Query;
use crate::suggestions::Suggestion;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

/// Number of suggestions requested when the query is unbounded
const DEFAULT_REMOTE_LIMIT: usize = 10;

/// Upstream autocomplete API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteBackend {
    DuckDuckGo,
    Wikipedia,
}

impl RemoteBackend {
    /// Backend name
    pub fn name(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => "duckduckgo",
            Self::Wikipedia => "wikipedia",
        }
    }

    /// Public endpoint for this backend
    pub fn default_url(&self, lang: &str) -> String {
        match self {
            Self::DuckDuckGo => "https://duckduckgo.com/ac/".to_string(),
            Self::Wikipedia => {
                let wiki_lang = lang.get(..2).unwrap_or("en");
                format!("https://{}.wikipedia.org/w/api.php", wiki_lang)
            }
        }
    }

    fn params(&self, term: &str, limit: usize) -> HashMap<String, String> {
        let mut params = HashMap::new();
        match self {
            Self::DuckDuckGo => {
                params.insert("q".to_string(), term.to_string());
                params.insert("type".to_string(), "list".to_string());
            }
            Self::Wikipedia => {
                params.insert("action".to_string(), "opensearch".to_string());
                params.insert("format".to_string(), "json".to_string());
                params.insert("formatversion".to_string(), "2".to_string());
                params.insert("search".to_string(), term.to_string());
                params.insert("namespace".to_string(), "0".to_string());
                params.insert("limit".to_string(), limit.to_string());
            }
        }
        params
    }
}

/// Provider that forwards the term to a remote autocomplete API
pub struct RemoteProvider {
    client: HttpClient,
    backend: RemoteBackend,
    url: String,
}

impl RemoteProvider {
    /// Create a provider against the backend's public endpoint
    pub fn new(client: HttpClient, backend: RemoteBackend, lang: &str) -> Self {
        let url = backend.default_url(lang);
        Self {
            client,
            backend,
            url,
        }
    }

    /// Point the provider at a different endpoint
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn backend(&self) -> RemoteBackend {
        self.backend
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SuggestionProvider for RemoteProvider {
    fn name(&self) -> &str {
        self.backend.name()
    }

    async fn query_suggestions(&self, query: &Query<'_>) -> Result<Option<Vec<Suggestion>>> {
        let limit = query.max_results().unwrap_or(DEFAULT_REMOTE_LIMIT);
        let params = self.backend.params(query.term(), limit);

        let response = self.client.get_with_params(&self.url, params).await?;

        if !response.is_success() {
            debug!(
                "{} returned HTTP {} for '{}'",
                self.backend.name(),
                response.status,
                query.term()
            );
            return Ok(None);
        }

        let json: serde_json::Value = response.json()?;
        let values = opensearch_values(&json);
        Ok(Some(values.into_iter().map(Suggestion::from).collect()))
    }
}

/// Extract suggestions from the `[term, [suggestions...], ...]` shape both
/// backends use
fn opensearch_values(json: &serde_json::Value) -> Vec<String> {
    json.as_array()
        .and_then(|arr| arr.get(1))
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
