//! Autocomplete extension
//!
//! Owns the configuration of one autocomplete-enabled field and answers the
//! client's `serverQuerySuggestions` calls with a `setSuggestions` message
//! carrying the echoed request id.

mod state;

pub use state::{ClientState, ExtensionState};

use crate::config::AutocompleteSettings;
use crate::encoder::{encode_suggestions, EncodedSuggestion, ResourceTable};
use crate::metrics::QueryMetrics;
use crate::providers::SuggestionProvider;
use crate::search::QueryExecutor;
use crate::suggestions::Suggestion;
use anyhow::Result;
use indexmap::IndexSet;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Outbound `setSuggestions` message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSuggestions {
    /// Request id exactly as received
    pub request_id: serde_json::Value,
    pub suggestions: Vec<EncodedSuggestion>,
    /// Icons referenced by the suggestions, keyed by their `icon` field
    pub resources: ResourceTable,
}

/// Server side of an autocomplete text field
///
/// Configuration is not synchronized; wrap the extension in a lock when it
/// is shared, so changes are ordered against in-flight queries.
#[derive(Clone, Default)]
pub struct AutocompleteExtension {
    state: ExtensionState,
    executor: QueryExecutor,
}

impl AutocompleteExtension {
    /// Create an extension with default configuration and no provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extension from settings
    pub fn from_settings(settings: &AutocompleteSettings) -> Self {
        Self {
            state: ExtensionState::from(settings),
            executor: QueryExecutor::new().with_limit(settings.suggestion_limit),
        }
    }

    /// Share a metrics collector with the executor
    pub fn with_metrics(mut self, metrics: Arc<QueryMetrics>) -> Self {
        self.executor = self.executor.with_metrics(metrics);
        self
    }

    /// Handle an inbound `serverQuerySuggestions` call
    pub async fn server_query_suggestions(
        &self,
        request_id: serde_json::Value,
        term: &str,
    ) -> Result<SetSuggestions> {
        let suggestions = self.query_suggestions(term).await?;
        let encoded = encode_suggestions(&suggestions);

        debug!(
            "Answering request {} with {} suggestions",
            request_id,
            encoded.len()
        );

        Ok(SetSuggestions {
            request_id,
            suggestions: encoded.suggestions,
            resources: encoded.resources,
        })
    }

    /// Query the active provider with the configured limit
    pub async fn query_suggestions(&self, term: &str) -> Result<IndexSet<Suggestion>> {
        self.executor.query_suggestions(&self.state, term).await
    }

    pub fn state(&self) -> &ExtensionState {
        &self.state
    }

    /// Configuration as sent to the client
    pub fn client_state(&self) -> ClientState {
        ClientState {
            suggestion_limit: self.suggestion_limit(),
            state: self.state.clone(),
        }
    }

    pub fn executor(&self) -> &QueryExecutor {
        &self.executor
    }

    pub fn suggestion_provider(&self) -> Option<&Arc<dyn SuggestionProvider>> {
        self.executor.provider()
    }

    pub fn set_suggestion_provider(&mut self, provider: Option<Arc<dyn SuggestionProvider>>) {
        self.executor.set_provider(provider);
    }

    /// Maximum number of suggestions sent to the client; `<= 0` is unbounded
    pub fn suggestion_limit(&self) -> i32 {
        self.executor.limit()
    }

    /// Set the maximum number of suggestions; excess suggestions are dropped
    pub fn set_suggestion_limit(&mut self, limit: i32) {
        self.executor.set_limit(limit);
    }

    pub fn is_item_as_html(&self) -> bool {
        self.state.item_as_html
    }

    pub fn set_item_as_html(&mut self, item_as_html: bool) {
        self.state.item_as_html = item_as_html;
    }

    pub fn min_chars(&self) -> i32 {
        self.state.min_chars
    }

    pub fn set_min_chars(&mut self, min_chars: i32) {
        self.state.min_chars = min_chars;
    }

    pub fn delay(&self) -> i32 {
        self.state.delay
    }

    pub fn set_delay(&mut self, delay: i32) {
        self.state.delay = delay;
    }

    pub fn is_cache(&self) -> bool {
        self.state.cache
    }

    pub fn set_cache(&mut self, cache: bool) {
        self.state.cache = cache;
    }

    pub fn menu_style_name(&self) -> String {
        self.state.menu_style_names.get()
    }

    pub fn add_menu_style_name(&mut self, style_name: &str) {
        self.state.menu_style_names.add(style_name);
    }

    pub fn remove_menu_style_name(&mut self, style_name: &str) {
        self.state.menu_style_names.remove(style_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{FnProvider, WordListProvider};
    use crate::query::Query;
    use crate::suggestions::Resource;
    use serde_json::json;

    #[tokio::test]
    async fn test_without_provider() {
        let extension = AutocompleteExtension::new();

        let message = extension
            .server_query_suggestions(json!(1), "cat")
            .await
            .unwrap();

        assert_eq!(message.request_id, json!(1));
        assert!(message.suggestions.is_empty());
        assert!(message.resources.is_empty());
    }

    #[tokio::test]
    async fn test_request_id_is_echoed_verbatim() {
        let mut extension = AutocompleteExtension::new();
        extension.set_suggestion_provider(Some(Arc::new(WordListProvider::new(["cat"]))));

        let id = json!({"seq": 42, "tag": ["a", null]});
        let message = extension
            .server_query_suggestions(id.clone(), "c")
            .await
            .unwrap();

        assert_eq!(message.request_id, id);
        assert_eq!(message.suggestions.len(), 1);
    }

    #[tokio::test]
    async fn test_limit_and_icon_keys() {
        let mut extension = AutocompleteExtension::new();
        extension.set_suggestion_limit(3);
        extension.set_suggestion_provider(Some(Arc::new(FnProvider::new(
            "icons",
            |_: &Query<'_>| {
                Ok(Some(
                    (0..10)
                        .map(|i| {
                            Suggestion::new(format!("item{}", i))
                                .with_icon(Resource::Theme(format!("icons/{}.png", i)))
                        })
                        .collect(),
                ))
            },
        ))));

        let message = extension
            .server_query_suggestions(json!("r1"), "item")
            .await
            .unwrap();

        let values: Vec<_> = message
            .suggestions
            .iter()
            .map(|s| s.value.as_deref().unwrap())
            .collect();
        assert_eq!(values, vec!["item0", "item1", "item2"]);

        let icons: Vec<_> = message
            .suggestions
            .iter()
            .map(|s| s.icon.as_deref().unwrap())
            .collect();
        assert_eq!(icons, vec!["icon0", "icon1", "icon2"]);
        assert_eq!(
            message.resources.get("icon1"),
            Some(&Resource::Theme("icons/1.png".to_string()))
        );
    }

    #[tokio::test]
    async fn test_serialized_message_resolves_icon_keys() {
        let mut extension = AutocompleteExtension::new();
        extension.set_suggestion_provider(Some(Arc::new(FnProvider::new(
            "icon",
            |_: &Query<'_>| {
                Ok(Some(vec![
                    Suggestion::new("a").with_icon(Resource::Theme("a.png".to_string()))
                ]))
            },
        ))));

        let message = extension
            .server_query_suggestions(json!(1), "a")
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "requestId": 1,
                "suggestions": [
                    {"value": "a", "description": null, "icon": "icon0", "styleNames": null}
                ],
                "resources": {"icon0": {"type": "theme", "location": "a.png"}}
            })
        );
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let mut extension = AutocompleteExtension::new();
        extension.set_suggestion_provider(Some(Arc::new(FnProvider::new(
            "failing",
            |_: &Query<'_>| Err(anyhow::anyhow!("index unavailable")),
        ))));

        let err = extension
            .server_query_suggestions(json!(7), "x")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "index unavailable");
    }

    #[test]
    fn test_configuration_surface() {
        let mut extension = AutocompleteExtension::new();
        assert_eq!(extension.suggestion_limit(), 0);
        assert!(extension.suggestion_provider().is_none());
        assert!(!extension.is_item_as_html());

        extension.set_item_as_html(true);
        extension.set_min_chars(1);
        extension.set_delay(0);
        extension.set_cache(false);
        extension.add_menu_style_name("dark wide");
        extension.add_menu_style_name("dark");
        extension.remove_menu_style_name("wide");

        assert!(extension.is_item_as_html());
        assert_eq!(extension.min_chars(), 1);
        assert_eq!(extension.delay(), 0);
        assert!(!extension.is_cache());
        assert_eq!(extension.menu_style_name(), "dark dark");

        let client = serde_json::to_value(extension.client_state()).unwrap();
        assert_eq!(
            client,
            json!({
                "suggestionLimit": 0,
                "itemAsHtml": true,
                "minChars": 1,
                "delay": 0,
                "cache": false,
                "menuStyleNames": ["dark", "dark"]
            })
        );
    }

    #[test]
    fn test_from_settings() {
        let settings = AutocompleteSettings {
            suggestion_limit: 4,
            menu_style_names: vec!["compact".to_string(), "a b".to_string()],
            ..Default::default()
        };

        let extension = AutocompleteExtension::from_settings(&settings);

        assert_eq!(extension.suggestion_limit(), 4);
        assert_eq!(extension.menu_style_name(), "compact a b");
        assert_eq!(extension.min_chars(), settings.min_chars);
    }
}
