//! CRUD operations for [`ShoppingList`] records.

use chrono::{DateTime, Utc};
use emplette_shared::{ListStatus, Priority};
use rusqlite::params;

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::{NewShoppingList, ShoppingList};

const LIST_COLUMNS: &str =
    "id, list_title, timestamp, list_tag, items, description, budget, status, priority, user_id";

impl Database {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Insert a new shopping list and return its assigned row id.
    pub fn create_list(&self, list: &NewShoppingList) -> Result<i64> {
        let items_blob = serde_json::to_string(&list.items)?;

        self.conn()
            .execute(
                "INSERT INTO shopping_lists
                     (list_title, timestamp, list_tag, items, description, budget, status, priority, user_id)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    list.list_title,
                    list.timestamp.to_rfc3339(),
                    list.list_tag,
                    items_blob,
                    list.description,
                    list.budget,
                    list.status.as_str(),
                    list.priority.as_str(),
                    list.user_id,
                ],
            )
            .map_err(StoreError::from_sqlite)?;

        Ok(self.conn().last_insert_rowid())
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// Fetch a single list by id.
    pub fn get_list(&self, id: i64) -> Result<ShoppingList> {
        self.conn()
            .query_row(
                &format!("SELECT {LIST_COLUMNS} FROM shopping_lists WHERE id = ?1"),
                params![id],
                row_to_list,
            )
            .map_err(StoreError::from_sqlite)
    }

    /// List all shopping lists, optionally filtered by owning user.
    ///
    /// Zero matching rows is a valid empty result, never an error.  Rows are
    /// returned in primary-key order.
    pub fn list_all(&self, owner: Option<i64>) -> Result<Vec<ShoppingList>> {
        match owner {
            Some(user_id) => {
                let mut stmt = self.conn().prepare(&format!(
                    "SELECT {LIST_COLUMNS} FROM shopping_lists WHERE user_id = ?1 ORDER BY id ASC"
                ))?;
                let rows = stmt.query_map(params![user_id], row_to_list)?;

                let mut lists = Vec::new();
                for row in rows {
                    lists.push(row?);
                }
                Ok(lists)
            }
            None => {
                let mut stmt = self.conn().prepare(&format!(
                    "SELECT {LIST_COLUMNS} FROM shopping_lists ORDER BY id ASC"
                ))?;
                let rows = stmt.query_map([], row_to_list)?;

                let mut lists = Vec::new();
                for row in rows {
                    lists.push(row?);
                }
                Ok(lists)
            }
        }
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Update the status of one list.  This is the only field-level update
    /// path the application exposes for lists.
    pub fn update_list_status(&self, id: i64, status: ListStatus) -> Result<()> {
        let affected = self.conn().execute(
            "UPDATE shopping_lists SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;

        if affected == 0 {
            tracing::warn!(id, "no rows updated for shopping list");
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Delete a list by id.
    pub fn delete_list(&self, id: i64) -> Result<()> {
        let affected = self
            .conn()
            .execute("DELETE FROM shopping_lists WHERE id = ?1", params![id])?;

        if affected == 0 {
            tracing::warn!(id, "no shopping list found to delete");
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Map a `rusqlite::Row` to a [`ShoppingList`].
fn row_to_list(row: &rusqlite::Row<'_>) -> rusqlite::Result<ShoppingList> {
    let id: i64 = row.get(0)?;
    let list_title: String = row.get(1)?;
    let ts_str: String = row.get(2)?;
    let list_tag: Option<String> = row.get(3)?;
    let items_blob: String = row.get(4)?;
    let description: Option<String> = row.get(5)?;
    let budget: Option<f64> = row.get(6)?;
    let status_str: String = row.get(7)?;
    let priority_str: String = row.get(8)?;
    let user_id: Option<i64> = row.get(9)?;

    let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339(&ts_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
        })?;

    let items: Vec<String> = serde_json::from_str(&items_blob).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let status: ListStatus = status_str.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let priority: Priority = priority_str.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(8, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(ShoppingList {
        id: Some(id),
        list_title,
        timestamp,
        list_tag,
        items,
        description,
        budget,
        status,
        priority,
        user_id,
    })
}
