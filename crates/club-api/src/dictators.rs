//! Handlers for `/dictators` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/dictators` | All profiles |
//! | `GET`    | `/dictators/{id}` | 404 if not found |
//! | `GET`    | `/dictators/username/{username}` | 404 if not found |
//! | `PUT`    | `/dictators/{id}` | Owner only; body: [`DictatorFields`] |
//! | `DELETE` | `/dictators/{id}` | Owner only; cascades to achievements |
//!
//! Owner-gated routes answer 401, then 404, then 403, in that order.

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
};
use club_core::{
  dictator::{Dictator, DictatorDraft, DictatorFields},
  store::ClubStore,
};

use crate::{AppState, error::ApiError, identity::Identity};

fn not_found(id: i64) -> ApiError {
  ApiError::NotFound(format!("dictator {id} not found"))
}

/// Resolve profile `id` and check that `identity` owns it, from the one row.
async fn owned<S: ClubStore>(
  state: &AppState<S>,
  identity: &Identity,
  id: i64,
  action: &str,
) -> Result<Dictator, ApiError> {
  let dictator = state
    .dictators
    .find_by_id(id)
    .await?
    .ok_or_else(|| not_found(id))?;

  if dictator.username != identity.username {
    tracing::warn!(id, username = %identity.username, "rejected non-owner {action}");
    return Err(ApiError::Forbidden(format!(
      "You can only {action} your own profile"
    )));
  }
  Ok(dictator)
}

// ─── Reads ────────────────────────────────────────────────────────────────────

/// `GET /dictators`
pub async fn list<S: ClubStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Dictator>>, ApiError> {
  Ok(Json(state.dictators.find_all().await?))
}

/// `GET /dictators/{id}`
pub async fn get_one<S: ClubStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Dictator>, ApiError> {
  let dictator = state
    .dictators
    .find_by_id(id)
    .await?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(dictator))
}

/// `GET /dictators/username/{username}`
pub async fn get_by_username<S: ClubStore>(
  State(state): State<AppState<S>>,
  Path(username): Path<String>,
) -> Result<Json<Dictator>, ApiError> {
  let dictator = state
    .dictators
    .find_by_username(&username)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("dictator {username:?} not found")))?;
  Ok(Json(dictator))
}

// ─── Writes ───────────────────────────────────────────────────────────────────

/// `PUT /dictators/{id}`: overwrites `name`, `country`, `description` and
/// `yearsInPower`. The username and timestamps are never taken from the body.
pub async fn update<S: ClubStore>(
  identity: Identity,
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
  body: Result<Json<DictatorFields>, JsonRejection>,
) -> Result<Json<Dictator>, ApiError> {
  let existing = owned(&state, &identity, id, "edit").await?;
  let Json(fields) = body?;

  let mut draft = DictatorDraft::from(existing);
  draft.apply(fields);
  Ok(Json(state.dictators.save(draft).await?))
}

/// `DELETE /dictators/{id}`
pub async fn delete_one<S: ClubStore>(
  identity: Identity,
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<&'static str, ApiError> {
  owned(&state, &identity, id, "delete").await?;

  if !state.dictators.delete_by_id(id).await? {
    return Err(not_found(id));
  }
  Ok("Dictator profile deleted successfully")
}
