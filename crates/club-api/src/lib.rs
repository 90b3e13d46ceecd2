//! JSON REST API for the Dictators Club.
//!
//! Exposes an axum [`Router`] backed by any [`club_core::store::ClubStore`].
//! TLS, token validation and transport concerns are the caller's
//! responsibility; handlers only read the caller's username via
//! [`identity::Identity`].
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", club_api::api_router(store.clone()))
//! ```

pub mod achievements;
pub mod dictators;
pub mod error;
pub mod identity;
pub mod init;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use club_core::{
  service::{AchievementService, DictatorService},
  store::ClubStore,
};

pub use error::ApiError;

/// Shared state threaded through all handlers.
pub struct AppState<S> {
  pub dictators:    DictatorService<S>,
  pub achievements: AchievementService<S>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      dictators:    self.dictators.clone(),
      achievements: self.achievements.clone(),
    }
  }
}

impl<S: ClubStore> AppState<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self {
      dictators:    DictatorService::new(Arc::clone(&store)),
      achievements: AchievementService::new(store),
    }
  }
}

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ClubStore + 'static,
{
  Router::new()
    // Dictators
    .route("/dictators", get(dictators::list::<S>))
    .route(
      "/dictators/{id}",
      get(dictators::get_one::<S>)
        .put(dictators::update::<S>)
        .delete(dictators::delete_one::<S>),
    )
    .route("/dictators/username/{username}", get(dictators::get_by_username::<S>))
    // Achievements
    .route(
      "/dictators/{id}/achievements",
      get(achievements::list_for_dictator::<S>).post(achievements::create::<S>),
    )
    .route("/achievements", get(achievements::list::<S>))
    .route(
      "/achievements/{id}",
      get(achievements::get_one::<S>)
        .put(achievements::update::<S>)
        .delete(achievements::delete_one::<S>),
    )
    // Seeding
    .route("/init/dictator", post(init::create_dictator::<S>))
    .route("/init/dictator/{id}/achievement", post(init::create_achievement::<S>))
    .route("/init/sample-data", post(init::sample_data::<S>))
    .with_state(AppState::new(store))
}
