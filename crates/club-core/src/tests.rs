//! Service and seeding tests against a small in-memory `ClubStore`.

use std::{collections::BTreeMap, sync::Arc, sync::Mutex};

use chrono::Utc;

use crate::{
  Error,
  achievement::{Achievement, AchievementDraft, AchievementFields},
  dictator::{Dictator, DictatorDraft, DictatorFields, NewDictator},
  seed::{SAMPLE_DICTATORS, seed_sample_data},
  service::{AchievementService, DictatorService},
  store::ClubStore,
};

// ─── In-memory store ─────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
enum MemoryError {
  #[error("username already taken: {0}")]
  UsernameTaken(String),
  #[error("dictator not found: {0}")]
  NoOwner(i64),
}

#[derive(Default)]
struct State {
  next_id:      i64,
  dictators:    BTreeMap<i64, Dictator>,
  achievements: BTreeMap<i64, Achievement>,
}

#[derive(Default)]
struct MemoryStore {
  state: Mutex<State>,
}

impl ClubStore for MemoryStore {
  type Error = MemoryError;

  async fn list_dictators(&self) -> Result<Vec<Dictator>, MemoryError> {
    Ok(self.state.lock().unwrap().dictators.values().cloned().collect())
  }

  async fn get_dictator(&self, id: i64) -> Result<Option<Dictator>, MemoryError> {
    Ok(self.state.lock().unwrap().dictators.get(&id).cloned())
  }

  async fn get_dictator_by_username(
    &self,
    username: &str,
  ) -> Result<Option<Dictator>, MemoryError> {
    let state = self.state.lock().unwrap();
    Ok(state.dictators.values().find(|d| d.username == username).cloned())
  }

  async fn username_exists(&self, username: &str) -> Result<bool, MemoryError> {
    let state = self.state.lock().unwrap();
    Ok(state.dictators.values().any(|d| d.username == username))
  }

  async fn insert_dictator(&self, draft: DictatorDraft) -> Result<Dictator, MemoryError> {
    let mut state = self.state.lock().unwrap();
    if state.dictators.values().any(|d| d.username == draft.username) {
      return Err(MemoryError::UsernameTaken(draft.username));
    }
    state.next_id += 1;
    let now = Utc::now();
    let dictator = Dictator {
      id:             state.next_id,
      username:       draft.username,
      name:           draft.fields.name,
      country:        draft.fields.country,
      description:    draft.fields.description,
      years_in_power: draft.fields.years_in_power,
      created_at:     now,
      updated_at:     now,
    };
    state.dictators.insert(dictator.id, dictator.clone());
    Ok(dictator)
  }

  async fn update_dictator(
    &self,
    id: i64,
    draft: DictatorDraft,
  ) -> Result<Option<Dictator>, MemoryError> {
    let mut state = self.state.lock().unwrap();
    Ok(state.dictators.get_mut(&id).map(|d| {
      d.name = draft.fields.name;
      d.country = draft.fields.country;
      d.description = draft.fields.description;
      d.years_in_power = draft.fields.years_in_power;
      d.updated_at = Utc::now();
      d.clone()
    }))
  }

  async fn delete_dictator(&self, id: i64) -> Result<bool, MemoryError> {
    let mut state = self.state.lock().unwrap();
    state.achievements.retain(|_, a| a.dictator.id != id);
    Ok(state.dictators.remove(&id).is_some())
  }

  async fn list_achievements(&self) -> Result<Vec<Achievement>, MemoryError> {
    Ok(self.state.lock().unwrap().achievements.values().cloned().collect())
  }

  async fn get_achievement(&self, id: i64) -> Result<Option<Achievement>, MemoryError> {
    Ok(self.state.lock().unwrap().achievements.get(&id).cloned())
  }

  async fn list_achievements_by_dictator(
    &self,
    dictator_id: i64,
  ) -> Result<Vec<Achievement>, MemoryError> {
    let state = self.state.lock().unwrap();
    Ok(
      state
        .achievements
        .values()
        .filter(|a| a.dictator.id == dictator_id)
        .cloned()
        .collect(),
    )
  }

  async fn list_achievements_by_username(
    &self,
    username: &str,
  ) -> Result<Vec<Achievement>, MemoryError> {
    let state = self.state.lock().unwrap();
    Ok(
      state
        .achievements
        .values()
        .filter(|a| a.dictator.username == username)
        .cloned()
        .collect(),
    )
  }

  async fn insert_achievement(
    &self,
    draft: AchievementDraft,
  ) -> Result<Achievement, MemoryError> {
    let mut state = self.state.lock().unwrap();
    if !state.dictators.contains_key(&draft.dictator.id) {
      return Err(MemoryError::NoOwner(draft.dictator.id));
    }
    state.next_id += 1;
    let now = Utc::now();
    let achievement = Achievement {
      id:          state.next_id,
      title:       draft.fields.title,
      description: draft.fields.description,
      year:        draft.fields.year,
      created_at:  now,
      updated_at:  now,
      dictator:    draft.dictator,
    };
    state.achievements.insert(achievement.id, achievement.clone());
    Ok(achievement)
  }

  async fn update_achievement(
    &self,
    id: i64,
    draft: AchievementDraft,
  ) -> Result<Option<Achievement>, MemoryError> {
    let mut state = self.state.lock().unwrap();
    Ok(state.achievements.get_mut(&id).map(|a| {
      a.title = draft.fields.title;
      a.description = draft.fields.description;
      a.year = draft.fields.year;
      a.updated_at = Utc::now();
      a.clone()
    }))
  }

  async fn delete_achievement(&self, id: i64) -> Result<bool, MemoryError> {
    Ok(self.state.lock().unwrap().achievements.remove(&id).is_some())
  }
}

fn services() -> (DictatorService<MemoryStore>, AchievementService<MemoryStore>) {
  let store = Arc::new(MemoryStore::default());
  (DictatorService::new(store.clone()), AchievementService::new(store))
}

fn napoleon() -> DictatorDraft {
  DictatorDraft {
    id:       None,
    username: "napoleon".into(),
    fields:   DictatorFields {
      name:           "Napoleon Bonaparte".into(),
      country:        "France".into(),
      description:    None,
      years_in_power: Some("1799-1815".into()),
    },
  }
}

fn code() -> AchievementFields {
  AchievementFields {
    title:       "Napoleonic Code".into(),
    description: None,
    year:        Some(1804),
  }
}

// ─── Dictator service ────────────────────────────────────────────────────────

#[tokio::test]
async fn save_without_id_inserts() {
  let (dictators, _) = services();
  let saved = dictators.save(napoleon()).await.unwrap();

  let fetched = dictators.find_by_id(saved.id).await.unwrap().unwrap();
  assert_eq!(fetched, saved);
  assert!(fetched.updated_at >= fetched.created_at);
}

#[tokio::test]
async fn save_with_id_updates_fields_but_not_username() {
  let (dictators, _) = services();
  let saved = dictators.save(napoleon()).await.unwrap();

  let mut draft = DictatorDraft::from(saved.clone());
  draft.username = "someone-else".into();
  draft.apply(DictatorFields {
    name:           "Napoleon I".into(),
    country:        "French Empire".into(),
    description:    Some("Emperor".into()),
    years_in_power: None,
  });
  let updated = dictators.save(draft).await.unwrap();

  assert_eq!(updated.username, "napoleon");
  assert_eq!(updated.name, "Napoleon I");
  assert_eq!(updated.created_at, saved.created_at);
  assert!(updated.updated_at >= saved.updated_at);
}

#[tokio::test]
async fn save_with_stale_id_is_not_found() {
  let (dictators, _) = services();
  let mut draft = napoleon();
  draft.id = Some(42);
  let err = dictators.save(draft).await.unwrap_err();
  assert!(matches!(err, Error::DictatorNotFound(42)));
}

#[tokio::test]
async fn missing_lookups_are_empty_not_errors() {
  let (dictators, achievements) = services();
  assert!(dictators.find_by_id(9999).await.unwrap().is_none());
  assert!(dictators.find_by_username("nobody").await.unwrap().is_none());
  assert!(!dictators.exists_by_username("nobody").await.unwrap());
  assert!(achievements.find_by_id(9999).await.unwrap().is_none());
  assert!(achievements.find_by_dictator_id(9999).await.unwrap().is_empty());
  assert!(
    achievements
      .find_by_dictator_username("nobody")
      .await
      .unwrap()
      .is_empty()
  );
}

#[tokio::test]
async fn dictator_is_owner_requires_exact_match() {
  let (dictators, _) = services();
  let saved = dictators.save(napoleon()).await.unwrap();

  assert!(dictators.is_owner("napoleon", saved.id).await.unwrap());
  assert!(!dictators.is_owner("Napoleon", saved.id).await.unwrap());
  assert!(!dictators.is_owner("caesar", saved.id).await.unwrap());
  assert!(!dictators.is_owner("napoleon", 9999).await.unwrap());
}

#[tokio::test]
async fn store_errors_pass_through() {
  let (dictators, _) = services();
  dictators.save(napoleon()).await.unwrap();
  let err = dictators.save(napoleon()).await.unwrap_err();
  assert!(matches!(err, Error::Store(_)));
  assert_eq!(err.to_string(), "username already taken: napoleon");
}

// ─── Achievement service ─────────────────────────────────────────────────────

#[tokio::test]
async fn achievement_is_owner_follows_owner_reference() {
  let (dictators, achievements) = services();
  let owner = dictators.save(napoleon()).await.unwrap();
  let ach = achievements
    .save(AchievementDraft::new(owner.to_ref(), code()))
    .await
    .unwrap();

  assert!(achievements.is_owner("napoleon", ach.id).await.unwrap());
  assert!(!achievements.is_owner("caesar", ach.id).await.unwrap());
  assert!(!achievements.is_owner("napoleon", 9999).await.unwrap());
}

#[tokio::test]
async fn achievement_update_keeps_owner() {
  let (dictators, achievements) = services();
  let owner = dictators.save(napoleon()).await.unwrap();
  let ach = achievements
    .save(AchievementDraft::new(owner.to_ref(), code()))
    .await
    .unwrap();

  let mut draft = AchievementDraft::from(ach.clone());
  draft.apply(AchievementFields {
    title:       "Code civil des Français".into(),
    description: Some("Civil code".into()),
    year:        Some(1804),
  });
  let updated = achievements.save(draft).await.unwrap();

  assert_eq!(updated.dictator, owner.to_ref());
  assert_eq!(updated.title, "Code civil des Français");
  assert!(updated.updated_at >= updated.created_at);
}

#[tokio::test]
async fn deleting_dictator_removes_achievements() {
  let (dictators, achievements) = services();
  let owner = dictators.save(napoleon()).await.unwrap();
  achievements
    .save(AchievementDraft::new(owner.to_ref(), code()))
    .await
    .unwrap();

  assert!(dictators.delete_by_id(owner.id).await.unwrap());
  assert!(achievements.find_by_dictator_id(owner.id).await.unwrap().is_empty());
  assert!(!dictators.delete_by_id(owner.id).await.unwrap());
}

// ─── Seeding ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn seeding_is_idempotent() {
  let (dictators, achievements) = services();

  let first = seed_sample_data(&dictators, &achievements).await.unwrap();
  assert_eq!(first.dictators_created, 3);
  assert_eq!(first.achievements_created, 6);
  assert_eq!(first.total_dictators, 3);
  assert_eq!(first.total_achievements, 6);

  let second = seed_sample_data(&dictators, &achievements).await.unwrap();
  assert_eq!(second.dictators_created, 0);
  assert_eq!(second.achievements_created, 0);
  assert!(second.total_dictators >= first.total_dictators);
  assert!(second.total_achievements >= first.total_achievements);
}

#[tokio::test]
async fn seeding_skips_existing_usernames_only() {
  let (dictators, achievements) = services();
  dictators.save(napoleon()).await.unwrap();

  let report = seed_sample_data(&dictators, &achievements).await.unwrap();
  assert_eq!(report.dictators_created, 2);
  assert_eq!(report.achievements_created, 4);
  assert_eq!(report.total_dictators, 3);
  assert!(
    achievements
      .find_by_dictator_username("napoleon")
      .await
      .unwrap()
      .is_empty()
  );
}

#[test]
fn sample_dataset_shape() {
  let usernames: Vec<_> = SAMPLE_DICTATORS.iter().map(|d| d.username).collect();
  assert_eq!(usernames, ["napoleon", "caesar", "genghis"]);
  assert!(SAMPLE_DICTATORS.iter().all(|d| d.achievements.len() == 2));
}

// ─── JSON shape ──────────────────────────────────────────────────────────────

#[test]
fn new_dictator_body_uses_camel_case() {
  let body: NewDictator = serde_json::from_value(serde_json::json!({
    "username": "napoleon",
    "name": "Napoleon Bonaparte",
    "country": "France",
    "yearsInPower": "1799-1815"
  }))
  .unwrap();
  assert_eq!(body.username, "napoleon");
  assert_eq!(body.fields.years_in_power.as_deref(), Some("1799-1815"));
  assert_eq!(body.fields.description, None);
}

#[test]
fn update_body_ignores_identity_fields() {
  let fields: DictatorFields = serde_json::from_value(serde_json::json!({
    "id": 7,
    "username": "usurper",
    "name": "N",
    "country": "F"
  }))
  .unwrap();
  assert_eq!(fields.name, "N");

  let ach: AchievementFields = serde_json::from_value(serde_json::json!({
    "title": "Napoleonic Code",
    "year": -49,
    "dictator": { "id": 2, "username": "caesar" }
  }))
  .unwrap();
  assert_eq!(ach.year, Some(-49));
}
