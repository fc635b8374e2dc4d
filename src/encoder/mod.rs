//! Wire encoding of suggestion sets
//!
//! Every record carries all four fields; absent values are encoded as
//! explicit nulls so the client can rely on them being present. Icons are
//! not embedded, they are registered in a [`ResourceTable`] under a key that
//! is unique within the response.

use crate::suggestions::{Resource, Suggestion};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One encoded suggestion, index-aligned with the encoder input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedSuggestion {
    pub value: Option<String>,
    pub description: Option<String>,
    /// Key into the response's [`ResourceTable`]
    pub icon: Option<String>,
    pub style_names: Option<Vec<String>>,
}

/// Icon resources registered while encoding, keyed by the `icon` field value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceTable {
    resources: IndexMap<String, Resource>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource under a key, replacing any previous one
    pub fn register(&mut self, key: impl Into<String>, resource: Resource) {
        self.resources.insert(key.into(), resource);
    }

    pub fn get(&self, key: &str) -> Option<&Resource> {
        self.resources.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Resource)> {
        self.resources.iter()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Map every key to the URL the client loads
    pub fn resolve(&self, theme_base_url: &str) -> IndexMap<String, String> {
        self.resources
            .iter()
            .map(|(key, resource)| (key.clone(), resource.resolve(theme_base_url)))
            .collect()
    }
}

/// Encoded suggestion list plus the icons it references
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedSuggestions {
    pub suggestions: Vec<EncodedSuggestion>,
    pub resources: ResourceTable,
}

impl EncodedSuggestions {
    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// Key under which the icon of the suggestion at `index` is registered
pub fn icon_key(index: usize) -> String {
    format!("icon{}", index)
}

/// Encode suggestions in iteration order
pub fn encode_suggestions<'a, I>(suggestions: I) -> EncodedSuggestions
where
    I: IntoIterator<Item = &'a Suggestion>,
{
    let mut encoded = EncodedSuggestions::default();

    for (i, suggestion) in suggestions.into_iter().enumerate() {
        let icon = suggestion.icon.as_ref().map(|icon| {
            let key = icon_key(i);
            encoded.resources.register(key.clone(), icon.clone());
            key
        });

        let style_names = suggestion
            .style_names
            .as_ref()
            .map(|names| names.iter().flatten().cloned().collect());

        encoded.suggestions.push(EncodedSuggestion {
            value: suggestion.value.clone(),
            description: suggestion.description.clone(),
            icon,
            style_names,
        });
    }

    encoded
}
