//! v001 -- Initial schema creation.
//!
//! Creates the two core tables: `users` and `shopping_lists`.  Lists have
//! no ownership column yet; every list is global.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Users
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS users (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,                -- Argon2id PHC string
    phone         TEXT NOT NULL,
    status        TEXT NOT NULL,                -- e.g. "active"
    created_at    TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at    TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

-- ----------------------------------------------------------------
-- Shopping lists
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS shopping_lists (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    list_title  TEXT NOT NULL,
    timestamp   TEXT NOT NULL,                  -- RFC-3339, set by the caller
    list_tag    TEXT,
    items       TEXT NOT NULL,                  -- JSON array of item names, opaque to the store
    description TEXT,
    budget      REAL,
    status      TEXT NOT NULL,                  -- to-shop | in-progress | done
    priority    TEXT NOT NULL                   -- Low | Medium | High
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
