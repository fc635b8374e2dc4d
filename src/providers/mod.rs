//! Suggestion providers
//!
//! A provider turns a [`Query`](crate::query::Query) into candidate
//! suggestions. Applications can plug in their own through
//! [`SuggestionProvider`] or [`FnProvider`]; a word list and two remote
//! backends are built in.

mod remote;
mod traits;
mod word_list;

pub use remote::{RemoteBackend, RemoteProvider};
pub use traits::{FnProvider, SuggestionProvider};
pub use word_list::{MatchMode, WordListProvider};

use crate::config::ProviderSettings;
use crate::network::HttpClient;
use anyhow::Result;
use std::sync::Arc;

/// Build the provider named in the settings
///
/// Returns `Ok(None)` for `"none"`, leaving the extension without a provider.
pub fn build_provider(
    settings: &ProviderSettings,
    client: &HttpClient,
) -> Result<Option<Arc<dyn SuggestionProvider>>> {
    let provider: Arc<dyn SuggestionProvider> = match settings.kind.to_lowercase().as_str() {
        "" | "none" => return Ok(None),
        "word_list" | "words" => Arc::new(
            WordListProvider::new(settings.words.iter().cloned())
                .with_match_mode(settings.match_mode)
                .with_ignore_case(settings.ignore_case),
        ),
        "duckduckgo" | "ddg" => Arc::new(remote(RemoteBackend::DuckDuckGo, settings, client)),
        "wikipedia" | "wiki" => Arc::new(remote(RemoteBackend::Wikipedia, settings, client)),
        other => anyhow::bail!("Unknown suggestion provider: {}", other),
    };

    Ok(Some(provider))
}

fn remote(backend: RemoteBackend, settings: &ProviderSettings, client: &HttpClient) -> RemoteProvider {
    let provider = RemoteProvider::new(client.clone(), backend, &settings.lang);
    match settings.base_url {
        Some(ref url) => provider.with_url(url.clone()),
        None => provider,
    }
}

/// List built-in providers
pub fn list_providers() -> Vec<&'static str> {
    vec!["none", "word_list", "duckduckgo", "wikipedia"]
}
