//! Achievements: dated accomplishments belonging to exactly one profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dictator::DictatorRef;

/// A persisted achievement row, joined with its owner's username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
  pub id:          i64,
  pub title:       String,
  /// At most 1000 characters.
  pub description: Option<String>,
  /// Plain signed year with no era marker.
  pub year:        Option<i32>,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
  pub dictator:    DictatorRef,
}

/// The mutable fields of an achievement; the body of create and update
/// requests. An owner reference in the request JSON is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementFields {
  pub title:       String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub year:        Option<i32>,
}

/// Input to [`crate::service::AchievementService::save`].
///
/// The owner must already be resolved by the caller. On update only
/// `fields` are written; `dictator` is never moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementDraft {
  pub id:       Option<i64>,
  pub dictator: DictatorRef,
  pub fields:   AchievementFields,
}

impl AchievementDraft {
  /// A fresh draft attached to `owner`.
  pub fn new(owner: DictatorRef, fields: AchievementFields) -> Self {
    Self { id: None, dictator: owner, fields }
  }

  pub fn apply(&mut self, fields: AchievementFields) { self.fields = fields; }
}

impl From<Achievement> for AchievementDraft {
  fn from(a: Achievement) -> Self {
    Self {
      id:       Some(a.id),
      dictator: a.dictator,
      fields:   AchievementFields {
        title:       a.title,
        description: a.description,
        year:        a.year,
      },
    }
  }
}
