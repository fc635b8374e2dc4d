//! Configuration module for suggest-rs
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_yaml::Error),
}
