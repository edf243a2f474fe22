//! The state container: one [`AppState`] value and the pure [`reduce`]
//! function that transitions it.

use chrono::Utc;
use emplette_shared::ListFilter;
use emplette_store::ShoppingList;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// The single authoritative in-memory view state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Cached shopping lists.  Fetched rows carry their store id; lists
    /// saved optimistically before the store confirms carry `id: None`.
    pub lists: Vec<ShoppingList>,
    /// Item names staged for the list currently being composed.
    pub items: Vec<String>,
    /// Logged-in user id; `None` when logged out.
    pub user_id: Option<i64>,
    /// Client-side filter applied to `lists` for display.
    pub active_filter: ListFilter,
    /// Last error message, until explicitly replaced or cleared.
    pub error: Option<String>,
    /// Last success message, until explicitly replaced or cleared.
    pub success: Option<String>,
}

/// Apply one event to the state.
///
/// Pure and total: no I/O, never panics.  Events addressing a missing item
/// index or an unknown list id are silent no-ops, so a replayed event log
/// always produces a state.
pub fn reduce(mut state: AppState, event: Event) -> AppState {
    match event {
        Event::SetUser(user_id) => {
            state.user_id = user_id;
        }
        Event::SetActiveFilter(filter) => {
            state.active_filter = filter;
        }
        Event::AddItem(name) => {
            state.items.push(name);
        }
        Event::DeleteItem(index) => {
            if index < state.items.len() {
                state.items.remove(index);
            }
        }
        Event::SaveList(draft) => {
            let items = std::mem::take(&mut state.items);
            state.lists.push(ShoppingList {
                id: None,
                list_title: draft.list_title,
                timestamp: Utc::now(),
                list_tag: draft.list_tag,
                items,
                description: draft.description,
                budget: draft.budget,
                status: draft.status,
                priority: draft.priority,
                user_id: state.user_id,
            });
        }
        Event::FetchLists(lists) => {
            state.lists = lists;
        }
        Event::UpdateList { id, changes } => {
            for list in &mut state.lists {
                if list.id == Some(id) {
                    changes.apply_to(list);
                }
            }
        }
        Event::DeleteList(id) => {
            state.lists.retain(|list| list.id != Some(id));
        }
        Event::SetError(message) => {
            state.error = message;
        }
        Event::SetSuccess(message) => {
            state.success = message;
        }
    }
    state
}

/// Owned wrapper for single-threaded UI-loop use.
///
/// Dispatches are synchronous; the state is never observable mid-transition.
#[derive(Debug, Default)]
pub struct Container {
    state: AppState,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state, for rendering and derived queries.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply one event in place.
    pub fn dispatch(&mut self, event: Event) {
        tracing::debug!(?event, "dispatch");
        self.state = reduce(std::mem::take(&mut self.state), event);
    }
}
