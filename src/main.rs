//! suggest-rs: server-side suggestion pipeline for autocomplete text fields
//!
//! This is the main entry point for the HTTP server.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use suggest_rs::{
    config::Settings,
    network::HttpClient,
    web::{create_router, AppState},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Serve autocomplete suggestions over HTTP
#[derive(Debug, Parser)]
#[command(name = "suggest-rs", version, about)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "SUGGEST_SETTINGS_PATH")]
    config: Option<PathBuf>,
    /// Server port, overrides the configuration
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    info!("Starting suggest-rs v{}", suggest_rs::VERSION);

    let mut settings = load_settings(cli.config)?;
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    info!(
        "Using provider '{}' with suggestion limit {}",
        settings.provider.kind, settings.autocomplete.suggestion_limit
    );

    let client = HttpClient::with_settings(&settings.outgoing)?;
    let state = AppState::new(settings.clone(), client)?;
    let app = create_router(state);

    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings(explicit: Option<PathBuf>) -> Result<Settings> {
    let mut settings = match explicit.or_else(find_settings_file) {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };
    settings.merge_env();
    Ok(settings)
}

fn find_settings_file() -> Option<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("suggest-rs/settings.yml"));
    }
    paths.into_iter().find(|p| p.exists())
}
