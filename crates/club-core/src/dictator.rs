//! Dictator profiles, the primary owned entity.
//!
//! A profile is owned by the identity whose username matches its `username`
//! field. Achievements are not embedded; they are queried on demand by
//! owner id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Stored record ───────────────────────────────────────────────────────────

/// A persisted profile row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dictator {
  /// Store-assigned surrogate key.
  pub id:             i64,
  /// Globally unique; never changed after creation.
  pub username:       String,
  pub name:           String,
  pub country:        String,
  /// At most 1000 characters.
  pub description:    Option<String>,
  /// Free text such as `"1799-1815"`; not a structured date.
  pub years_in_power: Option<String>,
  pub created_at:     DateTime<Utc>,
  /// Refreshed by every update; never earlier than `created_at`.
  pub updated_at:     DateTime<Utc>,
}

impl Dictator {
  /// The thin owner reference embedded in achievements.
  pub fn to_ref(&self) -> DictatorRef {
    DictatorRef { id: self.id, username: self.username.clone() }
  }
}

/// A reference to the owning profile, as carried by an achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictatorRef {
  pub id:       i64,
  pub username: String,
}

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// The mutable descriptive fields of a profile.
///
/// This is the body accepted by `PUT /dictators/{id}`. Any `username`, `id`
/// or timestamp in the request JSON is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictatorFields {
  pub name:           String,
  pub country:        String,
  #[serde(default)]
  pub description:    Option<String>,
  #[serde(default)]
  pub years_in_power: Option<String>,
}

/// Body accepted when creating a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDictator {
  pub username: String,
  #[serde(flatten)]
  pub fields:   DictatorFields,
}

/// Input to [`crate::service::DictatorService::save`].
///
/// A draft without an `id` is inserted; a draft with an `id` updates the
/// descriptive fields of that row. The username of an existing row is never
/// rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictatorDraft {
  pub id:       Option<i64>,
  pub username: String,
  pub fields:   DictatorFields,
}

impl DictatorDraft {
  /// Overwrite the descriptive fields, leaving identity untouched.
  pub fn apply(&mut self, fields: DictatorFields) { self.fields = fields; }
}

impl From<NewDictator> for DictatorDraft {
  fn from(n: NewDictator) -> Self {
    Self { id: None, username: n.username, fields: n.fields }
  }
}

impl From<Dictator> for DictatorDraft {
  fn from(d: Dictator) -> Self {
    Self {
      id:       Some(d.id),
      username: d.username,
      fields:   DictatorFields {
        name:           d.name,
        country:        d.country,
        description:    d.description,
        years_in_power: d.years_in_power,
      },
    }
  }
}
