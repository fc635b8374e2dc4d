//! In-memory word list provider

use super::traits::SuggestionProvider;
use crate::query::Query;
use crate::suggestions::Suggestion;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// How a word is matched against the search term
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Word starts with the term
    #[default]
    Begins,
    /// Word contains the term anywhere
    Contains,
}

/// Suggests words from a fixed list, in list order
#[derive(Debug, Clone)]
pub struct WordListProvider {
    words: Vec<String>,
    match_mode: MatchMode,
    ignore_case: bool,
}

impl WordListProvider {
    /// Create a provider matching word beginnings, ignoring case
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            match_mode: MatchMode::Begins,
            ignore_case: true,
        }
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn matches(&self, word: &str, term: &str) -> bool {
        let (word, term) = if self.ignore_case {
            (word.to_lowercase(), term.to_lowercase())
        } else {
            (word.to_string(), term.to_string())
        };

        match self.match_mode {
            MatchMode::Begins => word.starts_with(&term),
            MatchMode::Contains => word.contains(&term),
        }
    }
}

#[async_trait]
impl SuggestionProvider for WordListProvider {
    fn name(&self) -> &str {
        "word_list"
    }

    async fn query_suggestions(&self, query: &Query<'_>) -> Result<Option<Vec<Suggestion>>> {
        let term = query.term();
        if term.is_empty() {
            return Ok(Some(vec![]));
        }

        let suggestions = self
            .words
            .iter()
            .filter(|word| self.matches(word, term))
            .take(query.max_results().unwrap_or(usize::MAX))
            .map(|word| Suggestion::new(word.as_str()))
            .collect();

        Ok(Some(suggestions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::ExtensionState;

    fn values(suggestions: Option<Vec<Suggestion>>) -> Vec<String> {
        suggestions
            .unwrap()
            .into_iter()
            .filter_map(|s| s.value)
            .collect()
    }

    #[tokio::test]
    async fn test_begins_ignore_case() {
        let provider = WordListProvider::new(["Cat", "car", "dog", "Carpet"]);
        let state = ExtensionState::default();

        let result = provider
            .query_suggestions(&Query::new(&state, "ca", 0))
            .await
            .unwrap();

        assert_eq!(values(result), vec!["Cat", "car", "Carpet"]);
    }

    #[tokio::test]
    async fn test_contains_case_sensitive() {
        let provider = WordListProvider::new(["Cat", "scat", "dog"])
            .with_match_mode(MatchMode::Contains)
            .with_ignore_case(false);
        let state = ExtensionState::default();

        let result = provider
            .query_suggestions(&Query::new(&state, "cat", 0))
            .await
            .unwrap();

        assert_eq!(values(result), vec!["scat"]);
    }

    #[tokio::test]
    async fn test_respects_limit_and_empty_term() {
        let provider = WordListProvider::new(["a1", "a2", "a3"]);
        let state = ExtensionState::default();

        let limited = provider
            .query_suggestions(&Query::new(&state, "a", 2))
            .await
            .unwrap();
        assert_eq!(values(limited), vec!["a1", "a2"]);

        let empty = provider
            .query_suggestions(&Query::new(&state, "", 0))
            .await
            .unwrap();
        assert!(values(empty).is_empty());
    }
}
