//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::Catalog;
use crate::categories::{CategoryFilter, CategorySet};
use crate::error::MenuError;
use crate::models::ItemId;
use crate::selection::Selection;

/// View state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct MenuState {
    /// Text typed into the search box
    pub search_text: String,
    /// Always a member of the catalog's CategorySet
    pub active_category: CategoryFilter,
    /// Detail overlay
    pub selection: Selection,
}

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_search(store: &MenuStore, text: String) {
    store.search_text().set(text);
}

/// Activate the category with the given label. Unknown labels leave state untouched.
pub fn store_select_category(store: &MenuStore, categories: &CategorySet, label: &str) {
    match categories.resolve(label) {
        Ok(choice) => {
            store.active_category().set(choice);
            log::debug!("[STORE] category -> {}", label);
        }
        Err(e) => log::warn!("[STORE] {}", e),
    }
}

/// Show an item in the overlay, replacing any item already shown
pub fn store_open_details(store: &MenuStore, catalog: &Catalog, id: ItemId) {
    match catalog.get(id) {
        Some(item) => {
            store.selection().write().select(item.clone());
            log::debug!("[STORE] details open for #{}", id);
        }
        None => log::warn!("[STORE] {}", MenuError::UnknownItem(id)),
    }
}

pub fn store_close_details(store: &MenuStore) {
    if store.selection().with_untracked(Selection::is_open) {
        store.selection().write().close();
        log::debug!("[STORE] details closed");
    }
}

/// Reset search and category. The overlay is left alone.
pub fn store_clear_filters(store: &MenuStore) {
    store.search_text().set(String::new());
    store.active_category().set(CategoryFilter::All);
    log::debug!("[STORE] filters cleared");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_price;
    use crate::models::Category;

    fn fixtures() -> (MenuStore, Catalog, CategorySet) {
        let catalog = Catalog::builtin();
        let categories = CategorySet::from_catalog(&catalog);
        (Store::new(MenuState::default()), catalog, categories)
    }

    fn shown_id(store: &MenuStore) -> Option<ItemId> {
        store.selection().with_untracked(|s| s.item().map(|item| item.id))
    }

    #[test]
    fn test_defaults() {
        let state = MenuState::default();
        assert_eq!(state.search_text, "");
        assert_eq!(state.active_category, CategoryFilter::All);
        assert_eq!(state.selection, Selection::Closed);
    }

    #[test]
    fn test_set_search() {
        let (store, _, _) = fixtures();
        store_set_search(&store, "salad".to_string());
        assert_eq!(store.search_text().get_untracked(), "salad");
    }

    #[test]
    fn test_select_known_category() {
        let (store, _, categories) = fixtures();
        store_select_category(&store, &categories, "Pizza");
        assert_eq!(
            store.active_category().get_untracked(),
            CategoryFilter::Only(Category::new("Pizza"))
        );
        store_select_category(&store, &categories, "All");
        assert_eq!(store.active_category().get_untracked(), CategoryFilter::All);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let (store, _, categories) = fixtures();
        store_select_category(&store, &categories, "Salad");
        store_select_category(&store, &categories, "Drinks");
        let active = store.active_category().get_untracked();
        assert_eq!(active, CategoryFilter::Only(Category::new("Salad")));
        assert!(categories.choices().contains(&active));
    }

    #[test]
    fn test_open_and_close_details() {
        let (store, catalog, _) = fixtures();
        store_open_details(&store, &catalog, ItemId(5));
        store.selection().with_untracked(|s| {
            let shown = s.item().unwrap();
            assert_eq!(shown.name, "Chocolate Cake");
            assert_eq!(format_price(shown.price, "$"), "$4.50");
            assert_eq!(shown.category.as_str(), "Dessert");
        });
        store_close_details(&store);
        assert_eq!(store.selection().get_untracked(), Selection::Closed);
        // closing again stays closed
        store_close_details(&store);
        assert_eq!(store.selection().get_untracked(), Selection::Closed);
    }

    #[test]
    fn test_open_other_item_while_open() {
        let (store, catalog, _) = fixtures();
        store_open_details(&store, &catalog, ItemId(1));
        store_open_details(&store, &catalog, ItemId(2));
        assert_eq!(shown_id(&store), Some(ItemId(2)));
    }

    #[test]
    fn test_unknown_item_rejected() {
        let (store, catalog, _) = fixtures();
        store_open_details(&store, &catalog, ItemId(3));
        store_open_details(&store, &catalog, ItemId(99));
        assert_eq!(shown_id(&store), Some(ItemId(3)));
    }

    #[test]
    fn test_clear_filters_keeps_overlay() {
        let (store, catalog, categories) = fixtures();
        store_set_search(&store, "xyz-nomatch".to_string());
        store_select_category(&store, &categories, "Main");
        store_open_details(&store, &catalog, ItemId(4));
        store_clear_filters(&store);
        assert_eq!(store.search_text().get_untracked(), "");
        assert_eq!(store.active_category().get_untracked(), CategoryFilter::All);
        assert_eq!(shown_id(&store), Some(ItemId(4)));
    }
}
