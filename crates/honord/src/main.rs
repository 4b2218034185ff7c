//! Honor Daemon - stateful phrase classification service
//!
//! Serves the /honor, /sethonor and /removehonor slash commands backed by a
//! persisted override store.

use anyhow::Result;
use clap::Parser;
use honor_common::config::HonordConfig;
use honor_common::HonorStore;
use honord::server::{self, AppState};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, Level};

/// Default config file path
const CONFIG_PATH: &str = "/etc/honord/config.toml";

#[derive(Parser)]
#[command(name = "honord")]
#[command(about = "Honor classification daemon", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address override, e.g. 127.0.0.1:7860
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    info!("honord v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from(CONFIG_PATH));
    let mut config = HonordConfig::load(&config_path)?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }

    let store = HonorStore::open(&config.store)?;
    info!("Override store ready ({} backend)", store.backend_name());

    let state = AppState::new(store);
    server::run(
        state,
        &config.listen_addr,
        Duration::from_secs(config.request_timeout_secs),
    )
    .await
}
