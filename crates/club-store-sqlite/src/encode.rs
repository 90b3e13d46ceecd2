//! Encoding and decoding helpers between domain types and the plain values
//! stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings.

use chrono::{DateTime, Utc};
use club_core::{
  achievement::Achievement,
  dictator::{Dictator, DictatorRef},
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Column lists ────────────────────────────────────────────────────────────

/// Column order expected by [`RawDictator::from_row`].
pub const DICTATOR_COLUMNS: &str =
  "id, username, name, country, description, years_in_power, created_at, updated_at";

/// Achievement rows joined with their owner, in the column order expected by
/// [`RawAchievement::from_row`]. Append a `WHERE` clause as needed.
pub const ACHIEVEMENT_SELECT: &str =
  "SELECT a.id, a.title, a.description, a.achievement_year,
          a.created_at, a.updated_at, d.id, d.username
   FROM achievements a
   JOIN dictators d ON d.id = a.dictator_id";

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `dictators` row.
pub struct RawDictator {
  pub id:             i64,
  pub username:       String,
  pub name:           String,
  pub country:        String,
  pub description:    Option<String>,
  pub years_in_power: Option<String>,
  pub created_at:     String,
  pub updated_at:     String,
}

impl RawDictator {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:             row.get(0)?,
      username:       row.get(1)?,
      name:           row.get(2)?,
      country:        row.get(3)?,
      description:    row.get(4)?,
      years_in_power: row.get(5)?,
      created_at:     row.get(6)?,
      updated_at:     row.get(7)?,
    })
  }

  pub fn into_dictator(self) -> Result<Dictator> {
    Ok(Dictator {
      id:             self.id,
      username:       self.username,
      name:           self.name,
      country:        self.country,
      description:    self.description,
      years_in_power: self.years_in_power,
      created_at:     decode_dt(&self.created_at)?,
      updated_at:     decode_dt(&self.updated_at)?,
    })
  }
}

/// Raw values read from an `achievements` row joined with its owner.
pub struct RawAchievement {
  pub id:                i64,
  pub title:             String,
  pub description:       Option<String>,
  pub year:              Option<i32>,
  pub created_at:        String,
  pub updated_at:        String,
  // dictators join
  pub dictator_id:       i64,
  pub dictator_username: String,
}

impl RawAchievement {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:                row.get(0)?,
      title:             row.get(1)?,
      description:       row.get(2)?,
      year:              row.get(3)?,
      created_at:        row.get(4)?,
      updated_at:        row.get(5)?,
      dictator_id:       row.get(6)?,
      dictator_username: row.get(7)?,
    })
  }

  pub fn into_achievement(self) -> Result<Achievement> {
    Ok(Achievement {
      id:          self.id,
      title:       self.title,
      description: self.description,
      year:        self.year,
      created_at:  decode_dt(&self.created_at)?,
      updated_at:  decode_dt(&self.updated_at)?,
      dictator:    DictatorRef {
        id:       self.dictator_id,
        username: self.dictator_username,
      },
    })
  }
}
