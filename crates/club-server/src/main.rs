//! club-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! store, optionally loads the sample profiles, and serves the JSON API over
//! HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use club_core::{
  seed::seed_sample_data,
  service::{AchievementService, DictatorService},
};
use club_server::{ServerConfig, expand_tilde};
use club_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Dictators Club API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let store_path = expand_tilde(&server_cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  let store = Arc::new(store);

  if server_cfg.seed_sample_data {
    let dictators = DictatorService::new(Arc::clone(&store));
    let achievements = AchievementService::new(Arc::clone(&store));
    let report = seed_sample_data(&dictators, &achievements)
      .await
      .context("failed to seed sample data")?;
    tracing::info!(
      dictators_created = report.dictators_created,
      achievements_created = report.achievements_created,
      total_dictators = report.total_dictators,
      total_achievements = report.total_achievements,
      "sample data ready"
    );
  }

  let app = club_server::app(store);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}/api");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
