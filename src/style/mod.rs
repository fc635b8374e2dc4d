//! Space-delimited style name list for the suggestion menu

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered list of style tokens applied to the suggestion menu
///
/// Unlike suggestion limiting, this list keeps duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct MenuStyleNames {
    tokens: Vec<String>,
}

impl MenuStyleNames {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens joined with a single space
    pub fn get(&self) -> String {
        self.tokens.join(" ")
    }

    /// Add a token, splitting on whitespace
    pub fn add(&mut self, style_name: &str) {
        if style_name.is_empty() {
            return;
        }
        if style_name.contains(char::is_whitespace) {
            for token in style_name.split_whitespace() {
                self.add(token);
            }
            return;
        }
        self.tokens.push(style_name.to_string());
    }

    /// Remove the first occurrence of a token, splitting on whitespace
    pub fn remove(&mut self, style_name: &str) {
        if style_name.is_empty() || self.tokens.is_empty() {
            return;
        }
        if style_name.contains(char::is_whitespace) {
            for token in style_name.split_whitespace() {
                self.remove(token);
            }
            return;
        }
        if let Some(pos) = self.tokens.iter().position(|t| t == style_name) {
            self.tokens.remove(pos);
        }
    }

    /// Like [`add`](Self::add), `None` is a no-op
    pub fn add_opt(&mut self, style_name: Option<&str>) {
        if let Some(style_name) = style_name {
            self.add(style_name);
        }
    }

    /// Like [`remove`](Self::remove), `None` is a no-op
    pub fn remove_opt(&mut self, style_name: Option<&str>) {
        if let Some(style_name) = style_name {
            self.remove(style_name);
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for MenuStyleNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get())
    }
}

impl<S: AsRef<str>> FromIterator<S> for MenuStyleNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names = Self::new();
        for name in iter {
            names.add(name.as_ref());
        }
        names
    }
}

impl From<Vec<String>> for MenuStyleNames {
    fn from(style_names: Vec<String>) -> Self {
        style_names.into_iter().collect()
    }
}

impl From<MenuStyleNames> for Vec<String> {
    fn from(style_names: MenuStyleNames) -> Self {
        style_names.tokens
    }
}
