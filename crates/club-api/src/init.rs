//! Handlers for `/init` endpoints: unauthenticated data loading.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/init/dictator` | Body: [`NewDictator`]; 400 on duplicate username |
//! | `POST` | `/init/dictator/{dictator_id}/achievement` | 404 if the profile is missing |
//! | `POST` | `/init/sample-data` | Idempotent; returns a [`SampleDataResponse`] |
//!
//! Every failure other than a missing profile is reported as 400 with the
//! underlying message.

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
};
use club_core::{
  achievement::{Achievement, AchievementDraft, AchievementFields},
  dictator::{Dictator, NewDictator},
  seed::{SeedReport, seed_sample_data},
  store::ClubStore,
};
use serde::Serialize;

use crate::{AppState, error::ApiError};

fn failed<E: std::fmt::Display>(what: &'static str) -> impl Fn(E) -> ApiError {
  move |e| ApiError::BadRequest(format!("Failed to {what}: {e}"))
}

/// `POST /init/dictator`
pub async fn create_dictator<S: ClubStore>(
  State(state): State<AppState<S>>,
  body: Result<Json<NewDictator>, JsonRejection>,
) -> Result<Json<Dictator>, ApiError> {
  let Json(body) = body.map_err(|r| failed("create dictator")(r.body_text()))?;

  if state
    .dictators
    .exists_by_username(&body.username)
    .await
    .map_err(failed("create dictator"))?
  {
    return Err(ApiError::BadRequest(format!(
      "Dictator with username '{}' already exists",
      body.username
    )));
  }

  let dictator = state
    .dictators
    .save(body.into())
    .await
    .map_err(failed("create dictator"))?;
  Ok(Json(dictator))
}

/// `POST /init/dictator/{dictator_id}/achievement`
pub async fn create_achievement<S: ClubStore>(
  State(state): State<AppState<S>>,
  Path(dictator_id): Path<i64>,
  body: Result<Json<AchievementFields>, JsonRejection>,
) -> Result<Json<Achievement>, ApiError> {
  let dictator = state
    .dictators
    .find_by_id(dictator_id)
    .await
    .map_err(failed("create achievement"))?
    .ok_or_else(|| ApiError::NotFound(format!("dictator {dictator_id} not found")))?;

  let Json(fields) =
    body.map_err(|r| failed("create achievement")(r.body_text()))?;

  let achievement = state
    .achievements
    .save(AchievementDraft::new(dictator.to_ref(), fields))
    .await
    .map_err(failed("create achievement"))?;
  Ok(Json(achievement))
}

/// Body returned by `POST /init/sample-data`.
#[derive(Debug, Serialize)]
pub struct SampleDataResponse {
  pub message: &'static str,
  #[serde(flatten)]
  pub report:  SeedReport,
}

/// `POST /init/sample-data`
pub async fn sample_data<S: ClubStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<SampleDataResponse>, ApiError> {
  let report = seed_sample_data(&state.dictators, &state.achievements)
    .await
    .map_err(failed("initialize sample data"))?;

  Ok(Json(SampleDataResponse {
    message: "Sample data initialization completed",
    report,
  }))
}
