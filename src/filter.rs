//! Filter Engine
//!
//! Derives the visible dishes from the search text and the active category.

use crate::categories::CategoryFilter;
use crate::models::MenuItem;

/// Case-insensitive substring match over `name + " " + description`.
/// Empty query matches everything.
pub fn matches_query(item: &MenuItem, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let haystack = format!("{} {}", item.name, item.description).to_lowercase();
    haystack.contains(&query.to_lowercase())
}

pub fn matches(item: &MenuItem, query: &str, category: &CategoryFilter) -> bool {
    category.accepts(item) && matches_query(item, query)
}

/// Stable filter: keeps catalog order, never re-sorts
pub fn visible_items(items: &[MenuItem], query: &str, category: &CategoryFilter) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|item| matches(item, query, category))
        .cloned()
        .collect()
}

/// The grid shows the empty-state notice instead of cards when nothing is visible
pub fn shows_empty_state(visible: &[MenuItem]) -> bool {
    visible.is_empty()
}
