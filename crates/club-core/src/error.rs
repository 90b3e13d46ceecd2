//! Error types for `club-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("dictator not found: {0}")]
  DictatorNotFound(i64),

  #[error("achievement not found: {0}")]
  AchievementNotFound(i64),

  /// Any failure reported by the store backend, passed through unmodified.
  #[error("{0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
