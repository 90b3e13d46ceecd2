//! Server assembly for the Dictators Club.
//!
//! Wires the [`club_api`] router under `/api` with request tracing and an
//! allow-all CORS policy, and owns the runtime configuration.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use club_core::store::ClubStore;
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CLUB_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:             String,
  pub port:             u16,
  pub store_path:       PathBuf,
  /// Load the sample profiles at startup.
  pub seed_sample_data: bool,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:             "0.0.0.0".to_string(),
      port:             8081,
      store_path:       PathBuf::from("club.db"),
      seed_sample_data: true,
    }
  }
}

impl ServerConfig {
  /// Layer the optional TOML file at `path` under `CLUB_*` environment
  /// variables. Missing keys fall back to [`ServerConfig::default`].
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("CLUB"))
      .build()?
      .try_deserialize()
  }

  /// `host:port`, ready for binding.
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the complete application: the API under `/api`, traced and open to
/// any origin.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: ClubStore + 'static,
{
  Router::new()
    .nest("/api", club_api::api_router(store))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use club_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  async fn test_app() -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    app(Arc::new(store))
  }

  fn from_toml(toml: &str) -> ServerConfig {
    config::Config::builder()
      .add_source(config::File::from_str(toml, config::FileFormat::Toml))
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap()
  }

  // ── Configuration ───────────────────────────────────────────────────────────

  #[test]
  fn empty_config_uses_defaults() {
    let cfg = from_toml("");
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.address(), "0.0.0.0:8081");
    assert!(cfg.seed_sample_data);
  }

  #[test]
  fn partial_config_overrides_only_named_keys() {
    let cfg = from_toml("port = 9000\nseed_sample_data = false\n");
    assert_eq!(cfg.port, 9000);
    assert!(!cfg.seed_sample_data);
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.store_path, PathBuf::from("club.db"));
  }

  #[test]
  fn missing_config_file_is_not_an_error() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/club-config.toml")).unwrap();
    assert_eq!(cfg.store_path, ServerConfig::default().store_path);
  }

  #[test]
  fn expand_tilde_leaves_plain_paths_alone() {
    assert_eq!(expand_tilde(Path::new("data/club.db")), PathBuf::from("data/club.db"));
    assert_eq!(expand_tilde(Path::new("/var/club.db")), PathBuf::from("/var/club.db"));
  }

  #[test]
  fn expand_tilde_uses_home() {
    let Ok(home) = std::env::var("HOME") else { return };
    assert_eq!(
      expand_tilde(Path::new("~/club.db")),
      PathBuf::from(home).join("club.db")
    );
  }

  // ── Router ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn api_is_nested_under_prefix() {
    let app = test_app().await;

    let req = Request::builder().uri("/api/dictators").body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let req = Request::builder().uri("/dictators").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn cors_allows_any_origin() {
    let app = test_app().await;
    let req = Request::builder()
      .method("OPTIONS")
      .uri("/api/dictators/1")
      .header(header::ORIGIN, "http://frontend.example")
      .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
      .body(Body::empty())
      .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
      resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
      "*"
    );
  }
}
