//! Stateless projections over [`AppState`].
//!
//! Screens used to recompute these inline; keeping them here means every
//! consumer counts the same way.

use emplette_shared::ListStatus;
use emplette_store::ShoppingList;

use crate::container::AppState;

/// The cached lists visible under the active filter, in cache order.
pub fn filtered_lists(state: &AppState) -> Vec<&ShoppingList> {
    state
        .lists
        .iter()
        .filter(|list| state.active_filter.matches(list.status))
        .collect()
}

/// Total number of cached lists, ignoring the filter.
pub fn list_count(state: &AppState) -> usize {
    state.lists.len()
}

/// Number of cached lists whose status is `done`.
pub fn completed_count(state: &AppState) -> usize {
    state
        .lists
        .iter()
        .filter(|list| list.status == ListStatus::Done)
        .count()
}

/// Total number of item names across all cached lists.
pub fn total_item_count(state: &AppState) -> usize {
    state.lists.iter().map(|list| list.items.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use emplette_shared::{ListFilter, Priority};

    fn list(id: i64, status: ListStatus, items: &[&str]) -> ShoppingList {
        ShoppingList {
            id: Some(id),
            list_title: format!("list-{id}"),
            timestamp: Utc::now(),
            list_tag: None,
            items: items.iter().map(|s| s.to_string()).collect(),
            description: None,
            budget: None,
            status,
            priority: Priority::Low,
            user_id: None,
        }
    }

    fn populated(filter: ListFilter) -> AppState {
        AppState {
            lists: vec![
                list(1, ListStatus::ToShop, &["milk", "eggs"]),
                list(2, ListStatus::Done, &["bread"]),
                list(3, ListStatus::InProgress, &[]),
                list(4, ListStatus::Done, &["soap", "rice", "tea"]),
            ],
            active_filter: filter,
            ..Default::default()
        }
    }

    #[test]
    fn all_lists_filter_shows_everything() {
        let state = populated(ListFilter::AllLists);
        assert_eq!(filtered_lists(&state).len(), 4);
    }

    #[test]
    fn status_filter_selects_matching_lists() {
        let state = populated(ListFilter::Done);
        let visible = filtered_lists(&state);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|l| l.status == ListStatus::Done));
    }

    #[test]
    fn counts_ignore_the_active_filter() {
        let state = populated(ListFilter::ToShop);
        assert_eq!(list_count(&state), 4);
        assert_eq!(completed_count(&state), 2);
        assert_eq!(total_item_count(&state), 6);
    }

    #[test]
    fn empty_state_counts_are_zero() {
        let state = AppState::default();
        assert_eq!(list_count(&state), 0);
        assert_eq!(completed_count(&state), 0);
        assert_eq!(total_item_count(&state), 0);
        assert!(filtered_lists(&state).is_empty());
    }
}
