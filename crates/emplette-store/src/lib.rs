//! # emplette-store
//!
//! Local persistence for the emplette shopping-list application, backed by
//! SQLite.
//!
//! The crate exposes a synchronous [`Database`] handle that wraps a
//! `rusqlite::Connection` and provides typed CRUD helpers for the two
//! persisted models: users and shopping lists.  The handle is constructed
//! explicitly and passed to consumers; there is no lazily-initialized
//! global connection.

pub mod database;
pub mod lists;
pub mod migrations;
pub mod models;
pub mod users;

mod error;

pub use database::Database;
pub use error::StoreError;
pub use models::*;
