//! [`SqliteStore`], the SQLite implementation of [`ClubStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::{OptionalExtension as _, ffi, types::Value};

use club_core::{
  achievement::{Achievement, AchievementDraft},
  dictator::{Dictator, DictatorDraft},
  store::ClubStore,
};

use crate::{
  Error, Result,
  encode::{
    ACHIEVEMENT_SELECT, DICTATOR_COLUMNS, RawAchievement, RawDictator,
    encode_dt,
  },
  schema::SCHEMA,
};

/// Extended result code of a constraint violation, if `e` is one.
fn constraint_code(e: &rusqlite::Error) -> Option<i32> {
  match e {
    rusqlite::Error::SqliteFailure(f, _)
      if f.code == rusqlite::ErrorCode::ConstraintViolation =>
    {
      Some(f.extended_code)
    }
    _ => None,
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Dictators Club store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run an achievement query filtered by `filter` (empty for all rows).
  async fn query_achievements(
    &self,
    filter: &'static str,
    params: Vec<Value>,
  ) -> Result<Vec<Achievement>> {
    let raws: Vec<RawAchievement> = self
      .conn
      .call(move |conn| {
        let mut stmt =
          conn.prepare(&format!("{ACHIEVEMENT_SELECT} {filter} ORDER BY a.id"))?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), RawAchievement::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawAchievement::into_achievement).collect()
  }
}

fn select_achievement(
  conn: &rusqlite::Connection,
  id: i64,
) -> rusqlite::Result<Option<RawAchievement>> {
  conn
    .query_row(
      &format!("{ACHIEVEMENT_SELECT} WHERE a.id = ?1"),
      rusqlite::params![id],
      RawAchievement::from_row,
    )
    .optional()
}

fn select_dictator(
  conn: &rusqlite::Connection,
  id: i64,
) -> rusqlite::Result<Option<RawDictator>> {
  conn
    .query_row(
      &format!("SELECT {DICTATOR_COLUMNS} FROM dictators WHERE id = ?1"),
      rusqlite::params![id],
      RawDictator::from_row,
    )
    .optional()
}

// ─── ClubStore impl ──────────────────────────────────────────────────────────

impl ClubStore for SqliteStore {
  type Error = Error;

  // ── Dictators ─────────────────────────────────────────────────────────────

  async fn list_dictators(&self) -> Result<Vec<Dictator>> {
    let raws: Vec<RawDictator> = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare(&format!("SELECT {DICTATOR_COLUMNS} FROM dictators ORDER BY id"))?;
        let rows = stmt
          .query_map([], RawDictator::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawDictator::into_dictator).collect()
  }

  async fn get_dictator(&self, id: i64) -> Result<Option<Dictator>> {
    let raw = self
      .conn
      .call(move |conn| Ok(select_dictator(conn, id)?))
      .await?;

    raw.map(RawDictator::into_dictator).transpose()
  }

  async fn get_dictator_by_username(&self, username: &str) -> Result<Option<Dictator>> {
    let username = username.to_owned();

    let raw: Option<RawDictator> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {DICTATOR_COLUMNS} FROM dictators WHERE username = ?1"),
            rusqlite::params![username],
            RawDictator::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawDictator::into_dictator).transpose()
  }

  async fn username_exists(&self, username: &str) -> Result<bool> {
    let username = username.to_owned();

    let exists = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "SELECT EXISTS (SELECT 1 FROM dictators WHERE username = ?1)",
          rusqlite::params![username],
          |r| r.get::<_, bool>(0),
        )?)
      })
      .await?;

    Ok(exists)
  }

  async fn insert_dictator(&self, draft: DictatorDraft) -> Result<Dictator> {
    let now    = Utc::now();
    let at_str = encode_dt(now);
    let row    = draft.clone();

    let inserted: Option<i64> = self
      .conn
      .call(move |conn| {
        let res = conn.execute(
          "INSERT INTO dictators (
             username, name, country, description, years_in_power,
             created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
          rusqlite::params![
            row.username,
            row.fields.name,
            row.fields.country,
            row.fields.description,
            row.fields.years_in_power,
            at_str,
          ],
        );
        match res {
          Ok(_) => Ok(Some(conn.last_insert_rowid())),
          Err(e) if constraint_code(&e) == Some(ffi::SQLITE_CONSTRAINT_UNIQUE) => {
            Ok(None)
          }
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    let id = inserted.ok_or_else(|| Error::UsernameTaken(draft.username.clone()))?;

    Ok(Dictator {
      id,
      username:       draft.username,
      name:           draft.fields.name,
      country:        draft.fields.country,
      description:    draft.fields.description,
      years_in_power: draft.fields.years_in_power,
      created_at:     now,
      updated_at:     now,
    })
  }

  async fn update_dictator(
    &self,
    id:    i64,
    draft: DictatorDraft,
  ) -> Result<Option<Dictator>> {
    let at_str = encode_dt(Utc::now());
    let fields = draft.fields;

    let raw: Option<RawDictator> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE dictators
           SET name = ?2, country = ?3, description = ?4,
               years_in_power = ?5, updated_at = ?6
           WHERE id = ?1",
          rusqlite::params![
            id,
            fields.name,
            fields.country,
            fields.description,
            fields.years_in_power,
            at_str,
          ],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(select_dictator(conn, id)?)
      })
      .await?;

    raw.map(RawDictator::into_dictator).transpose()
  }

  async fn delete_dictator(&self, id: i64) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM dictators WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(changed > 0)
  }

  // ── Achievements ──────────────────────────────────────────────────────────

  async fn list_achievements(&self) -> Result<Vec<Achievement>> {
    self.query_achievements("", Vec::new()).await
  }

  async fn get_achievement(&self, id: i64) -> Result<Option<Achievement>> {
    let raw = self
      .conn
      .call(move |conn| Ok(select_achievement(conn, id)?))
      .await?;

    raw.map(RawAchievement::into_achievement).transpose()
  }

  async fn list_achievements_by_dictator(&self, dictator_id: i64) -> Result<Vec<Achievement>> {
    self
      .query_achievements("WHERE a.dictator_id = ?1", vec![Value::Integer(dictator_id)])
      .await
  }

  async fn list_achievements_by_username(&self, username: &str) -> Result<Vec<Achievement>> {
    self
      .query_achievements("WHERE d.username = ?1", vec![Value::Text(username.to_owned())])
      .await
  }

  async fn insert_achievement(&self, draft: AchievementDraft) -> Result<Achievement> {
    let at_str      = encode_dt(Utc::now());
    let dictator_id = draft.dictator.id;
    let fields      = draft.fields;

    let raw: Option<RawAchievement> = self
      .conn
      .call(move |conn| {
        let res = conn.execute(
          "INSERT INTO achievements (
             title, description, achievement_year, created_at, updated_at,
             dictator_id
           ) VALUES (?1, ?2, ?3, ?4, ?4, ?5)",
          rusqlite::params![
            fields.title,
            fields.description,
            fields.year,
            at_str,
            dictator_id,
          ],
        );
        match res {
          Ok(_) => {
            let id = conn.last_insert_rowid();
            Ok(select_achievement(conn, id)?)
          }
          Err(e) if constraint_code(&e) == Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => {
            Ok(None)
          }
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    raw
      .ok_or(Error::DictatorNotFound(dictator_id))?
      .into_achievement()
  }

  async fn update_achievement(
    &self,
    id:    i64,
    draft: AchievementDraft,
  ) -> Result<Option<Achievement>> {
    let at_str = encode_dt(Utc::now());
    let fields = draft.fields;

    let raw: Option<RawAchievement> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE achievements
           SET title = ?2, description = ?3, achievement_year = ?4, updated_at = ?5
           WHERE id = ?1",
          rusqlite::params![
            id,
            fields.title,
            fields.description,
            fields.year,
            at_str,
          ],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(select_achievement(conn, id)?)
      })
      .await?;

    raw.map(RawAchievement::into_achievement).transpose()
  }

  async fn delete_achievement(&self, id: i64) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM achievements WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(changed > 0)
  }
}
