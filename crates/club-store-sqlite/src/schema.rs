//! SQL schema for the Dictators Club SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `foreign_keys` is a per-connection setting, so it lives here rather than in
/// the database file.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS dictators (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    username       TEXT NOT NULL UNIQUE,
    name           TEXT NOT NULL,
    country        TEXT NOT NULL,
    description    TEXT CHECK (length(description) <= 1000),
    years_in_power TEXT,              -- free text, e.g. '1799-1815'
    created_at     TEXT NOT NULL,     -- RFC 3339 UTC
    updated_at     TEXT NOT NULL      -- RFC 3339 UTC; refreshed on update
);

-- Owned by exactly one dictator; removed together with it.
CREATE TABLE IF NOT EXISTS achievements (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    title            TEXT NOT NULL,
    description      TEXT CHECK (length(description) <= 1000),
    achievement_year INTEGER,
    created_at       TEXT NOT NULL,
    updated_at       TEXT NOT NULL,
    dictator_id      INTEGER NOT NULL REFERENCES dictators(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS achievements_dictator_idx ON achievements(dictator_id);

PRAGMA user_version = 1;
";
