//! CRUD operations for [`User`] records: registration, login, and profile
//! maintenance.
//!
//! Passwords never reach this module in plaintext except for [`Database::login`],
//! which verifies the candidate against the stored Argon2 hash.

use chrono::{DateTime, NaiveDateTime, Utc};
use emplette_shared::credentials;
use rusqlite::{params, OptionalExtension};

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::{NewUser, User, UserProfile};

impl Database {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Register a new user and return the assigned row id.
    ///
    /// Fails with [`StoreError::Constraint`] when the email or phone number
    /// is already taken.
    pub fn register_user(&self, user: &NewUser) -> Result<i64> {
        self.conn()
            .execute(
                "INSERT INTO users (name, email, password_hash, phone, status)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    user.name,
                    user.email,
                    user.password_hash,
                    user.phone,
                    user.status,
                ],
            )
            .map_err(StoreError::from_sqlite)?;

        let id = self.conn().last_insert_rowid();
        tracing::info!(id, "registered user");
        Ok(id)
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// Look up a user by email and verify the password against the stored
    /// hash.
    ///
    /// Invalid credentials (unknown email or wrong password) are a normal
    /// outcome, returned as `Ok(None)` -- not an error.
    pub fn login(&self, email: &str, password: &str) -> Result<Option<User>> {
        let user = self
            .conn()
            .query_row(
                "SELECT id, name, email, password_hash, phone, status, created_at, updated_at
                 FROM users
                 WHERE email = ?1",
                params![email],
                row_to_user,
            )
            .optional()?;

        let Some(user) = user else {
            tracing::debug!("login attempt for unknown email");
            return Ok(None);
        };

        if credentials::verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            tracing::debug!(id = user.id, "login attempt with wrong password");
            Ok(None)
        }
    }

    /// Fetch the non-sensitive profile columns for one user.  The password
    /// hash is never selected.
    pub fn get_user_profile(&self, id: i64) -> Result<UserProfile> {
        self.conn()
            .query_row(
                "SELECT id, name, email, phone, status, created_at, updated_at
                 FROM users
                 WHERE id = ?1",
                params![id],
                row_to_profile,
            )
            .map_err(StoreError::from_sqlite)
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Update the name and phone of one user, refreshing `updated_at`.
    pub fn update_user_profile(&self, id: i64, name: &str, phone: &str) -> Result<()> {
        let affected = self
            .conn()
            .execute(
                "UPDATE users
                 SET name = ?1, phone = ?2, updated_at = CURRENT_TIMESTAMP
                 WHERE id = ?3",
                params![name, phone, id],
            )
            .map_err(StoreError::from_sqlite)?;

        if affected == 0 {
            tracing::warn!(id, "no rows updated for user");
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a timestamp column that may hold either an RFC-3339 string or
/// SQLite's `CURRENT_TIMESTAMP` format (`YYYY-MM-DD HH:MM:SS`, UTC).
fn parse_timestamp(s: &str) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|n| n.and_utc())
}

/// Map a `rusqlite::Row` to a [`User`].
fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    let created_str: String = row.get(6)?;
    let updated_str: String = row.get(7)?;

    let created_at = parse_timestamp(&created_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let updated_at = parse_timestamp(&updated_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        phone: row.get(4)?,
        status: row.get(5)?,
        created_at,
        updated_at,
    })
}

/// Map a `rusqlite::Row` to a [`UserProfile`].
fn row_to_profile(row: &rusqlite::Row<'_>) -> rusqlite::Result<UserProfile> {
    let created_str: String = row.get(5)?;
    let updated_str: String = row.get(6)?;

    let created_at = parse_timestamp(&created_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let updated_at = parse_timestamp(&updated_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(UserProfile {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        status: row.get(4)?,
        created_at,
        updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_test_db(dir: &tempfile::TempDir) -> Database {
        Database::open_at(&dir.path().join("test.db")).unwrap()
    }

    fn oscar(email: &str, phone: &str) -> NewUser {
        NewUser {
            name: Some("Oscar".to_string()),
            email: email.to_string(),
            password_hash: credentials::hash_password("abcd1234").unwrap(),
            phone: phone.to_string(),
            status: "active".to_string(),
        }
    }

    #[test]
    fn duplicate_email_fails_then_unique_email_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_test_db(&dir);

        db.register_user(&oscar("oscar@example.com", "0821111111"))
            .unwrap();

        let dup = db.register_user(&oscar("oscar@example.com", "0822222222"));
        assert!(matches!(dup, Err(StoreError::Constraint(_))));

        // A failed duplicate attempt must not poison subsequent registrations.
        db.register_user(&oscar("oscar2@example.com", "0822222222"))
            .unwrap();
    }

    #[test]
    fn duplicate_phone_fails_since_v002() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_test_db(&dir);

        db.register_user(&oscar("a@example.com", "0821111111"))
            .unwrap();

        let dup = db.register_user(&oscar("b@example.com", "0821111111"));
        assert!(matches!(dup, Err(StoreError::Constraint(_))));
    }

    #[test]
    fn login_verifies_the_stored_hash() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_test_db(&dir);

        let id = db
            .register_user(&oscar("oscar@example.com", "0821111111"))
            .unwrap();

        let user = db.login("oscar@example.com", "abcd1234").unwrap().unwrap();
        assert_eq!(user.id, id);
        assert_ne!(user.password_hash, "abcd1234");
    }

    #[test]
    fn invalid_credentials_are_none_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_test_db(&dir);

        db.register_user(&oscar("oscar@example.com", "0821111111"))
            .unwrap();

        assert!(db.login("oscar@example.com", "wrong999").unwrap().is_none());
        assert!(db.login("nobody@example.com", "abcd1234").unwrap().is_none());
    }

    #[test]
    fn profile_round_trip_without_hash() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_test_db(&dir);

        let id = db
            .register_user(&oscar("oscar@example.com", "0821111111"))
            .unwrap();

        let profile = db.get_user_profile(id).unwrap();
        assert_eq!(profile.id, id);
        assert_eq!(profile.name.as_deref(), Some("Oscar"));
        assert_eq!(profile.email, "oscar@example.com");
        assert_eq!(profile.phone, "0821111111");
        assert_eq!(profile.status, "active");
    }

    #[test]
    fn update_profile_changes_name_and_phone() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_test_db(&dir);

        let id = db
            .register_user(&oscar("oscar@example.com", "0821111111"))
            .unwrap();

        db.update_user_profile(id, "Oscar W.", "0839999999").unwrap();

        let profile = db.get_user_profile(id).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Oscar W."));
        assert_eq!(profile.phone, "0839999999");
    }

    #[test]
    fn update_profile_of_unknown_user_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_test_db(&dir);

        let result = db.update_user_profile(77, "Nobody", "000");
        assert!(matches!(result, Err(StoreError::NotFound)));
        assert!(matches!(db.get_user_profile(77), Err(StoreError::NotFound)));
    }
}
