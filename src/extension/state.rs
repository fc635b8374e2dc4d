//! Client-facing configuration of an autocomplete extension

use crate::config::AutocompleteSettings;
use crate::style::MenuStyleNames;
use serde::{Deserialize, Serialize};

/// Configuration forwarded unmodified to the client widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtensionState {
    /// Render suggestion items as HTML instead of plain text
    pub item_as_html: bool,
    /// Characters the user must type before a search is performed
    pub min_chars: i32,
    /// Delay in milliseconds between a keystroke and the search
    pub delay: i32,
    /// Cache performed searches on the client
    pub cache: bool,
    /// Style names applied to the suggestion menu
    pub menu_style_names: MenuStyleNames,
}

impl Default for ExtensionState {
    fn default() -> Self {
        Self {
            item_as_html: false,
            min_chars: 3,
            delay: 150,
            cache: true,
            menu_style_names: MenuStyleNames::new(),
        }
    }
}

impl From<&AutocompleteSettings> for ExtensionState {
    fn from(settings: &AutocompleteSettings) -> Self {
        Self {
            item_as_html: settings.item_as_html,
            min_chars: settings.min_chars,
            delay: settings.delay,
            cache: settings.cache,
            menu_style_names: settings.menu_style_names.iter().collect(),
        }
    }
}

/// Everything the client needs to set itself up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientState {
    pub suggestion_limit: i32,
    #[serde(flatten)]
    pub state: ExtensionState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_splits_menu_style_names() {
        let state: ExtensionState =
            serde_json::from_str(r#"{"minChars": 1, "menuStyleNames": ["x  y", ""]}"#).unwrap();

        assert_eq!(state.min_chars, 1);
        assert_eq!(state.delay, 150);
        assert_eq!(state.menu_style_names.get(), "x y");
    }
}
