//! The `ClubStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `club-store-sqlite`).
//! The services in [`crate::service`] depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::{
  achievement::{Achievement, AchievementDraft},
  dictator::{Dictator, DictatorDraft},
};

/// Abstraction over a Dictators Club store backend.
///
/// Every method is a single short store call. Lookups that match nothing
/// return `None` or an empty vector, never an error.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ClubStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Dictators ─────────────────────────────────────────────────────────

  /// List every profile, ordered by id.
  fn list_dictators(
    &self,
  ) -> impl Future<Output = Result<Vec<Dictator>, Self::Error>> + Send + '_;

  /// Retrieve a profile by id. Returns `None` if not found.
  fn get_dictator(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Dictator>, Self::Error>> + Send + '_;

  /// Retrieve a profile by its unique username. Returns `None` if not found.
  fn get_dictator_by_username<'a>(
    &'a self,
    username: &'a str,
  ) -> impl Future<Output = Result<Option<Dictator>, Self::Error>> + Send + 'a;

  fn username_exists<'a>(
    &'a self,
    username: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Insert a new profile. The store assigns the id and both timestamps.
  ///
  /// Returns an error if the username is already taken. `draft.id` is
  /// ignored.
  fn insert_dictator(
    &self,
    draft: DictatorDraft,
  ) -> impl Future<Output = Result<Dictator, Self::Error>> + Send + '_;

  /// Overwrite the descriptive fields of profile `id` and refresh
  /// `updated_at`. The username is never written. Returns `None` if the row
  /// does not exist.
  fn update_dictator(
    &self,
    id: i64,
    draft: DictatorDraft,
  ) -> impl Future<Output = Result<Option<Dictator>, Self::Error>> + Send + '_;

  /// Delete profile `id` together with all of its achievements. Returns
  /// whether a row was removed.
  fn delete_dictator(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Achievements ──────────────────────────────────────────────────────

  /// List every achievement, ordered by id.
  fn list_achievements(
    &self,
  ) -> impl Future<Output = Result<Vec<Achievement>, Self::Error>> + Send + '_;

  fn get_achievement(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Achievement>, Self::Error>> + Send + '_;

  /// Achievements owned by profile `dictator_id`.
  fn list_achievements_by_dictator(
    &self,
    dictator_id: i64,
  ) -> impl Future<Output = Result<Vec<Achievement>, Self::Error>> + Send + '_;

  /// Achievements owned by the profile with `username`.
  fn list_achievements_by_username<'a>(
    &'a self,
    username: &'a str,
  ) -> impl Future<Output = Result<Vec<Achievement>, Self::Error>> + Send + 'a;

  /// Insert a new achievement under `draft.dictator`. Returns an error if the
  /// owner does not exist.
  fn insert_achievement(
    &self,
    draft: AchievementDraft,
  ) -> impl Future<Output = Result<Achievement, Self::Error>> + Send + '_;

  /// Overwrite `title`, `description` and `year` of achievement `id` and
  /// refresh `updated_at`. The owner is never changed. Returns `None` if the
  /// row does not exist.
  fn update_achievement(
    &self,
    id: i64,
    draft: AchievementDraft,
  ) -> impl Future<Output = Result<Option<Achievement>, Self::Error>> + Send + '_;

  fn delete_achievement(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
