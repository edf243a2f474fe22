//! v002 -- List ownership and unique phone numbers.
//!
//! Adds the nullable `user_id` foreign key to `shopping_lists` (pre-v002
//! rows stay global with a NULL owner) and enforces phone uniqueness on
//! `users`.

use rusqlite::Connection;

/// SQL executed when upgrading from version 1 to version 2.
const UP_SQL: &str = r#"
ALTER TABLE shopping_lists ADD COLUMN user_id INTEGER REFERENCES users(id);

CREATE INDEX IF NOT EXISTS idx_shopping_lists_user_id ON shopping_lists(user_id);

CREATE UNIQUE INDEX IF NOT EXISTS idx_users_phone ON users(phone);
"#;

/// Apply the ownership migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
