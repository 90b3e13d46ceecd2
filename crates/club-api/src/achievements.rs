//! Handlers for achievement endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/dictators/{dictator_id}/achievements` | Empty list if none |
//! | `POST`   | `/dictators/{dictator_id}/achievements` | Profile owner only; body: [`AchievementFields`] |
//! | `GET`    | `/achievements` | All achievements |
//! | `GET`    | `/achievements/{id}` | 404 if not found |
//! | `PUT`    | `/achievements/{id}` | Achievement owner only |
//! | `DELETE` | `/achievements/{id}` | Achievement owner only |
//!
//! Ownership of an existing achievement is resolved through its owning
//! profile, never through a path parameter.

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
};
use club_core::{
  achievement::{Achievement, AchievementDraft, AchievementFields},
  store::ClubStore,
};

use crate::{AppState, error::ApiError, identity::Identity};

fn not_found(id: i64) -> ApiError {
  ApiError::NotFound(format!("achievement {id} not found"))
}

/// Resolve achievement `id` and check that `identity` owns its profile.
async fn owned<S: ClubStore>(
  state: &AppState<S>,
  identity: &Identity,
  id: i64,
  action: &str,
) -> Result<Achievement, ApiError> {
  let achievement = state
    .achievements
    .find_by_id(id)
    .await?
    .ok_or_else(|| not_found(id))?;

  if achievement.dictator.username != identity.username {
    tracing::warn!(id, username = %identity.username, "rejected non-owner {action}");
    return Err(ApiError::Forbidden(format!(
      "You can only {action} your own achievements"
    )));
  }
  Ok(achievement)
}

// ─── Reads ────────────────────────────────────────────────────────────────────

/// `GET /dictators/{dictator_id}/achievements`
pub async fn list_for_dictator<S: ClubStore>(
  State(state): State<AppState<S>>,
  Path(dictator_id): Path<i64>,
) -> Result<Json<Vec<Achievement>>, ApiError> {
  Ok(Json(state.achievements.find_by_dictator_id(dictator_id).await?))
}

/// `GET /achievements`
pub async fn list<S: ClubStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Achievement>>, ApiError> {
  Ok(Json(state.achievements.find_all().await?))
}

/// `GET /achievements/{id}`
pub async fn get_one<S: ClubStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Achievement>, ApiError> {
  let achievement = state
    .achievements
    .find_by_id(id)
    .await?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(achievement))
}

// ─── Writes ───────────────────────────────────────────────────────────────────

/// `POST /dictators/{dictator_id}/achievements`: attaches the resolved
/// profile to the body and persists it.
pub async fn create<S: ClubStore>(
  identity: Identity,
  State(state): State<AppState<S>>,
  Path(dictator_id): Path<i64>,
  body: Result<Json<AchievementFields>, JsonRejection>,
) -> Result<Json<Achievement>, ApiError> {
  let dictator = state
    .dictators
    .find_by_id(dictator_id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("dictator {dictator_id} not found")))?;

  if dictator.username != identity.username {
    tracing::warn!(dictator_id, username = %identity.username, "rejected non-owner create");
    return Err(ApiError::Forbidden(
      "You can only add achievements to your own profile".to_string(),
    ));
  }

  let Json(fields) = body?;
  let draft = AchievementDraft::new(dictator.to_ref(), fields);
  Ok(Json(state.achievements.save(draft).await?))
}

/// `PUT /achievements/{id}`: overwrites `title`, `description` and `year`.
pub async fn update<S: ClubStore>(
  identity: Identity,
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
  body: Result<Json<AchievementFields>, JsonRejection>,
) -> Result<Json<Achievement>, ApiError> {
  let existing = owned(&state, &identity, id, "edit").await?;
  let Json(fields) = body?;

  let mut draft = AchievementDraft::from(existing);
  draft.apply(fields);
  Ok(Json(state.achievements.save(draft).await?))
}

/// `DELETE /achievements/{id}`
pub async fn delete_one<S: ClubStore>(
  identity: Identity,
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<&'static str, ApiError> {
  owned(&state, &identity, id, "delete").await?;

  if !state.achievements.delete_by_id(id).await? {
    return Err(not_found(id));
  }
  Ok("Achievement deleted successfully")
}
