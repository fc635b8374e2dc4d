//! Application state shared across handlers

use crate::config::Settings;
use crate::extension::AutocompleteExtension;
use crate::metrics::QueryMetrics;
use crate::network::HttpClient;
use crate::providers::build_provider;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// The served autocomplete extension; writers wait for in-flight queries
    pub extension: Arc<RwLock<AutocompleteExtension>>,
    /// Query counters
    pub metrics: Arc<QueryMetrics>,
}

impl AppState {
    /// Create new application state with the provider named in the settings
    pub fn new(settings: Settings, client: HttpClient) -> anyhow::Result<Self> {
        let metrics = Arc::new(QueryMetrics::new());
        let provider = build_provider(&settings.provider, &client)?;

        let mut extension =
            AutocompleteExtension::from_settings(&settings.autocomplete).with_metrics(metrics.clone());
        extension.set_suggestion_provider(provider);

        Ok(Self::with_extension(settings, extension, metrics))
    }

    /// Create state around an already configured extension
    pub fn with_extension(
        settings: Settings,
        extension: AutocompleteExtension,
        metrics: Arc<QueryMetrics>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            extension: Arc::new(RwLock::new(extension)),
            metrics,
        }
    }

    /// Base URL theme resources resolve against
    pub fn theme_base_url(&self) -> &str {
        &self.settings.server.theme_base_url
    }
}
