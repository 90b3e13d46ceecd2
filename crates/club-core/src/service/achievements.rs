use std::sync::Arc;

use crate::{
  Error, Result,
  achievement::{Achievement, AchievementDraft},
  store::ClubStore,
};

/// Achievement operations plus the owner check, resolved through each
/// achievement's embedded owner reference.
pub struct AchievementService<S> {
  store: Arc<S>,
}

impl<S> Clone for AchievementService<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: ClubStore> AchievementService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub async fn find_all(&self) -> Result<Vec<Achievement>> {
    self.store.list_achievements().await.map_err(Error::store)
  }

  pub async fn find_by_id(&self, id: i64) -> Result<Option<Achievement>> {
    self.store.get_achievement(id).await.map_err(Error::store)
  }

  pub async fn find_by_dictator_id(
    &self,
    dictator_id: i64,
  ) -> Result<Vec<Achievement>> {
    self
      .store
      .list_achievements_by_dictator(dictator_id)
      .await
      .map_err(Error::store)
  }

  pub async fn find_by_dictator_username(
    &self,
    username: &str,
  ) -> Result<Vec<Achievement>> {
    self
      .store
      .list_achievements_by_username(username)
      .await
      .map_err(Error::store)
  }

  /// Insert a draft without an id under its owner, or update the row named
  /// by its id. The owner reference is taken as given.
  pub async fn save(&self, draft: AchievementDraft) -> Result<Achievement> {
    match draft.id {
      None => {
        let achievement =
          self.store.insert_achievement(draft).await.map_err(Error::store)?;
        tracing::info!(
          id = achievement.id,
          dictator_id = achievement.dictator.id,
          "created achievement"
        );
        Ok(achievement)
      }
      Some(id) => {
        let achievement = self
          .store
          .update_achievement(id, draft)
          .await
          .map_err(Error::store)?
          .ok_or(Error::AchievementNotFound(id))?;
        tracing::debug!(id, "updated achievement");
        Ok(achievement)
      }
    }
  }

  pub async fn delete_by_id(&self, id: i64) -> Result<bool> {
    let deleted =
      self.store.delete_achievement(id).await.map_err(Error::store)?;
    if deleted {
      tracing::info!(id, "deleted achievement");
    }
    Ok(deleted)
  }

  /// `true` only if achievement `id` exists and its owner's username equals
  /// `username` exactly.
  pub async fn is_owner(&self, username: &str, id: i64) -> Result<bool> {
    Ok(
      self
        .find_by_id(id)
        .await?
        .is_some_and(|a| a.dictator.username == username),
    )
  }
}
