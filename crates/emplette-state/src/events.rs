//! The closed set of events the state container responds to.
//!
//! Each variant carries its own strongly-typed payload, so a malformed or
//! unhandled event shape cannot reach the reducer.

use emplette_shared::{ListFilter, ListStatus, Priority};
use emplette_store::ShoppingList;
use serde::{Deserialize, Serialize};

/// A state-container event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    /// Set (or clear) the logged-in user id.
    SetUser(Option<i64>),
    /// Switch the client-side list filter.
    SetActiveFilter(ListFilter),
    /// Append one item name to the in-progress composition.  The caller is
    /// expected to have trimmed and validated the name.
    AddItem(String),
    /// Remove the item at the given index from the composition.
    DeleteItem(usize),
    /// Commit the composition: build an in-memory list record from the draft
    /// plus the staged items, then clear the composition.
    SaveList(ListDraft),
    /// Replace the cached lists wholesale with rows fetched from the store.
    FetchLists(Vec<ShoppingList>),
    /// Shallow-merge changes into the cached list with a matching id.
    UpdateList { id: i64, changes: ListChanges },
    /// Drop the cached list with a matching id.
    DeleteList(i64),
    /// Set (or clear) the last error message.  Never auto-cleared.
    SetError(Option<String>),
    /// Set (or clear) the last success message.  Never auto-cleared.
    SetSuccess(Option<String>),
}

/// The user-entered fields of a list being saved.  The staged items, the
/// owning user, and the creation timestamp come from the container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListDraft {
    pub list_title: String,
    pub list_tag: Option<String>,
    pub description: Option<String>,
    pub budget: Option<f64>,
    pub status: ListStatus,
    pub priority: Priority,
}

/// A partial update to one cached list.  `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListChanges {
    pub list_title: Option<String>,
    pub list_tag: Option<String>,
    pub description: Option<String>,
    pub budget: Option<f64>,
    pub status: Option<ListStatus>,
    pub priority: Option<Priority>,
}

impl ListChanges {
    /// Merge the set fields into `list`.
    pub fn apply_to(&self, list: &mut ShoppingList) {
        if let Some(title) = &self.list_title {
            list.list_title = title.clone();
        }
        if let Some(tag) = &self.list_tag {
            list.list_tag = Some(tag.clone());
        }
        if let Some(description) = &self.description {
            list.description = Some(description.clone());
        }
        if let Some(budget) = self.budget {
            list.budget = Some(budget);
        }
        if let Some(status) = self.status {
            list.status = status;
        }
        if let Some(priority) = self.priority {
            list.priority = priority;
        }
    }
}
