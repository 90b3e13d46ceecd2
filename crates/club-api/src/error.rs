//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Error bodies are plain text.

use axum::{
  extract::rejection::JsonRejection,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// No resolvable identity on a protected route.
  #[error("authentication required")]
  Unauthorized,

  /// An identity is present but does not own the target resource.
  #[error("forbidden: {0}")]
  Forbidden(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("internal error: {0}")]
  Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<club_core::Error> for ApiError {
  fn from(e: club_core::Error) -> Self {
    match e {
      club_core::Error::DictatorNotFound(id) => {
        ApiError::NotFound(format!("dictator {id} not found"))
      }
      club_core::Error::AchievementNotFound(id) => {
        ApiError::NotFound(format!("achievement {id} not found"))
      }
      club_core::Error::Store(e) => ApiError::Internal(e),
    }
  }
}

impl From<JsonRejection> for ApiError {
  fn from(r: JsonRejection) -> Self { ApiError::BadRequest(r.body_text()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Unauthorized => {
        let mut res =
          (StatusCode::UNAUTHORIZED, "Authentication required").into_response();
        res.headers_mut().insert(
          header::WWW_AUTHENTICATE,
          HeaderValue::from_static("Bearer realm=\"club\""),
        );
        res
      }
      ApiError::Forbidden(m) => (StatusCode::FORBIDDEN, m).into_response(),
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m).into_response(),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m).into_response(),
      ApiError::Internal(e) => {
        tracing::error!(error = %e, "unhandled store error");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
          .into_response()
      }
    }
  }
}
