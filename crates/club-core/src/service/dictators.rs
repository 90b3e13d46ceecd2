use std::sync::Arc;

use crate::{
  Error, Result,
  dictator::{Dictator, DictatorDraft},
  store::ClubStore,
};

/// Profile operations plus the owner check used by the write routes.
pub struct DictatorService<S> {
  store: Arc<S>,
}

impl<S> Clone for DictatorService<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: ClubStore> DictatorService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub async fn find_all(&self) -> Result<Vec<Dictator>> {
    self.store.list_dictators().await.map_err(Error::store)
  }

  pub async fn find_by_id(&self, id: i64) -> Result<Option<Dictator>> {
    self.store.get_dictator(id).await.map_err(Error::store)
  }

  pub async fn find_by_username(
    &self,
    username: &str,
  ) -> Result<Option<Dictator>> {
    self
      .store
      .get_dictator_by_username(username)
      .await
      .map_err(Error::store)
  }

  pub async fn exists_by_username(&self, username: &str) -> Result<bool> {
    self.store.username_exists(username).await.map_err(Error::store)
  }

  /// Insert a draft without an id, or update the row named by its id.
  pub async fn save(&self, draft: DictatorDraft) -> Result<Dictator> {
    match draft.id {
      None => {
        let dictator =
          self.store.insert_dictator(draft).await.map_err(Error::store)?;
        tracing::info!(
          id = dictator.id,
          username = %dictator.username,
          "created dictator"
        );
        Ok(dictator)
      }
      Some(id) => {
        let dictator = self
          .store
          .update_dictator(id, draft)
          .await
          .map_err(Error::store)?
          .ok_or(Error::DictatorNotFound(id))?;
        tracing::debug!(id, "updated dictator");
        Ok(dictator)
      }
    }
  }

  /// Delete a profile; its achievements go with it. Returns whether a row was
  /// removed.
  pub async fn delete_by_id(&self, id: i64) -> Result<bool> {
    let deleted = self.store.delete_dictator(id).await.map_err(Error::store)?;
    if deleted {
      tracing::info!(id, "deleted dictator");
    }
    Ok(deleted)
  }

  /// `true` only if profile `id` exists and its username equals `username`
  /// exactly (case-sensitive).
  pub async fn is_owner(&self, username: &str, id: i64) -> Result<bool> {
    Ok(
      self
        .find_by_id(id)
        .await?
        .is_some_and(|d| d.username == username),
    )
  }
}
