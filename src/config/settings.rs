//! Settings structures for suggest-rs configuration

use super::ConfigError;
use crate::providers::MatchMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure, loaded from `settings.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub autocomplete: AutocompleteSettings,
    pub provider: ProviderSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Merge with environment variables (SUGGEST_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    fn merge_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SUGGEST_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("SUGGEST_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = var("SUGGEST_LIMIT") {
            if let Ok(limit) = val.parse() {
                self.autocomplete.suggestion_limit = limit;
            }
        }
        if let Some(val) = var("SUGGEST_PROVIDER") {
            self.provider.kind = val;
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Base URL theme resources are resolved against
    pub theme_base_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8888,
            bind_address: "127.0.0.1".to_string(),
            theme_base_url: "/theme".to_string(),
        }
    }
}

/// Autocomplete field settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteSettings {
    /// Maximum number of suggestions, `<= 0` for unbounded
    pub suggestion_limit: i32,
    /// Render items as HTML
    pub item_as_html: bool,
    /// Minimum characters before searching
    pub min_chars: i32,
    /// Search delay in milliseconds
    pub delay: i32,
    /// Cache searches on the client
    pub cache: bool,
    /// Menu style names
    pub menu_style_names: Vec<String>,
}

impl Default for AutocompleteSettings {
    fn default() -> Self {
        Self {
            suggestion_limit: 0,
            item_as_html: false,
            min_chars: 3,
            delay: 150,
            cache: true,
            menu_style_names: vec![],
        }
    }
}

/// Suggestion provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Provider name (none, word_list, duckduckgo, wikipedia)
    pub kind: String,
    /// Words for the word_list provider
    pub words: Vec<String>,
    /// Match mode for the word_list provider
    pub match_mode: MatchMode,
    /// Case-insensitive matching for the word_list provider
    pub ignore_case: bool,
    /// Language for remote providers
    pub lang: String,
    /// Endpoint override for remote providers
    pub base_url: Option<String>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: "none".to_string(),
            words: vec![],
            match_mode: MatchMode::default(),
            ignore_case: true,
            lang: "en".to_string(),
            base_url: None,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Proxy for all outgoing requests
    pub proxy: Option<String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 5.0,
            proxy: None,
        }
    }
}
