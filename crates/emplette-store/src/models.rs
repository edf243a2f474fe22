//! Domain model structs persisted in the local SQLite database.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to the UI layer.

use chrono::{DateTime, Utc};
use emplette_shared::{ListStatus, Priority};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered account, as stored.  Carries the password hash; never hand
/// this to the UI -- use [`UserProfile`] for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Surrogate primary key, assigned by the store on insert.
    pub id: i64,
    /// Optional display name.
    pub name: Option<String>,
    /// Unique across all users.
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    /// Unique since schema v002.
    pub phone: String,
    /// Account status label, e.g. "active".
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to register a new user.  The id and timestamps are
/// assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: String,
    /// Hash before insert; the store never sees the plaintext password.
    pub password_hash: String,
    pub phone: String,
    pub status: String,
}

/// The non-sensitive projection of a [`User`] handed to profile screens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub phone: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Shopping list
// ---------------------------------------------------------------------------

/// A named, prioritized, timestamped collection of item names.
///
/// `id` is `None` for a list composed in memory that has not been persisted
/// yet; rows read back from the store always carry `Some(id)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingList {
    pub id: Option<i64>,
    pub list_title: String,
    /// Creation time, set by the caller (not by the store).
    pub timestamp: DateTime<Utc>,
    /// Optional category label.
    pub list_tag: Option<String>,
    /// Ordered item names; persisted as one JSON text blob the store treats
    /// as opaque.
    pub items: Vec<String>,
    pub description: Option<String>,
    pub budget: Option<f64>,
    pub status: ListStatus,
    pub priority: Priority,
    /// Owning user since schema v002; `None` for pre-ownership rows.
    pub user_id: Option<i64>,
}

/// Fields required to persist a new shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewShoppingList {
    pub list_title: String,
    pub timestamp: DateTime<Utc>,
    pub list_tag: Option<String>,
    pub items: Vec<String>,
    pub description: Option<String>,
    pub budget: Option<f64>,
    pub status: ListStatus,
    pub priority: Priority,
    pub user_id: Option<i64>,
}
