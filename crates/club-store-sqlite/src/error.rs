//! Error type for `club-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// Insert rejected by the UNIQUE constraint on `dictators.username`.
  #[error("username already taken: {0}")]
  UsernameTaken(String),

  /// Insert rejected by the foreign key from `achievements` to `dictators`.
  #[error("dictator not found: {0}")]
  DictatorNotFound(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
