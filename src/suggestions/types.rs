//! Suggestion type definitions

use serde::{Deserialize, Serialize};

/// A single autocomplete suggestion
///
/// Two suggestions are the same entry when all of their fields are equal.
/// The executor relies on this when collapsing duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Suggestion {
    /// Text inserted into the field when the suggestion is chosen
    pub value: Option<String>,
    /// Secondary display text
    pub description: Option<String>,
    /// Icon shown next to the suggestion
    pub icon: Option<Resource>,
    /// Style names applied to the rendered suggestion; `None` entries are
    /// dropped when encoding
    pub style_names: Option<Vec<Option<String>>>,
}

impl Suggestion {
    /// Create a new suggestion with a value
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Add a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an icon
    pub fn with_icon(mut self, icon: Resource) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Append a single style name
    pub fn with_style_name(mut self, style_name: impl Into<String>) -> Self {
        self.style_names
            .get_or_insert_with(Vec::new)
            .push(Some(style_name.into()));
        self
    }

    /// Replace the style names
    pub fn with_style_names<I, S>(mut self, style_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.style_names = Some(style_names.into_iter().map(|s| Some(s.into())).collect());
        self
    }
}

impl From<&str> for Suggestion {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Suggestion {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Opaque reference to a resource the client loads out of band
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "location", rename_all = "snake_case")]
pub enum Resource {
    /// Absolute URL
    External(String),
    /// Path relative to the active theme
    Theme(String),
}

impl Resource {
    /// Resolve to the URL the client should load
    pub fn resolve(&self, theme_base_url: &str) -> String {
        match self {
            Self::External(url) => url.clone(),
            Self::Theme(path) => format!(
                "{}/{}",
                theme_base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
        }
    }
}
