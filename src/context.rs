//! Application Context
//!
//! Immutable data provided via Leptos Context API.

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::categories::CategorySet;
use crate::config::MenuConfig;

/// App-wide read-only values provided via context
#[derive(Clone, Copy)]
pub struct MenuContext {
    /// The fixed menu
    pub catalog: StoredValue<Catalog>,
    /// Derived once from the catalog
    pub categories: StoredValue<CategorySet>,
    pub config: MenuConfig,
}

impl MenuContext {
    pub fn new(catalog: Catalog, config: MenuConfig) -> Self {
        let categories = CategorySet::from_catalog(&catalog);
        Self {
            catalog: StoredValue::new(catalog),
            categories: StoredValue::new(categories),
            config,
        }
    }
}

pub fn use_menu_context() -> MenuContext {
    expect_context::<MenuContext>()
}
