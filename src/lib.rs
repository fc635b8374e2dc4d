//! suggest-rs: server-side suggestion pipeline for autocomplete text fields
//!
//! The client sends a request id and the current search term; the active
//! provider is queried, its output is de-duplicated and bounded, and the
//! encoded list is returned tagged with the same request id.

pub mod config;
pub mod encoder;
pub mod extension;
pub mod metrics;
pub mod network;
pub mod providers;
pub mod query;
pub mod search;
pub mod style;
pub mod suggestions;
pub mod web;

pub use config::Settings;
pub use encoder::{encode_suggestions, EncodedSuggestion, EncodedSuggestions, ResourceTable};
pub use extension::{AutocompleteExtension, ExtensionState, SetSuggestions};
pub use providers::SuggestionProvider;
pub use query::Query;
pub use search::QueryExecutor;
pub use style::MenuStyleNames;
pub use suggestions::{Resource, Suggestion};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
