//! Food Menu App
//!
//! Root component: search and category controls, the filtered grid and the
//! detail modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::Catalog;
use crate::components::{CategoryBar, DetailModal, MenuGrid, SearchBar};
use crate::config::MenuConfig;
use crate::context::MenuContext;
use crate::filter::visible_items;
use crate::models::MenuItem;
use crate::store::{MenuState, MenuStateStoreFields, MenuStore};

#[component]
pub fn App() -> impl IntoView {
    let config = MenuConfig::default();
    let ctx = MenuContext::new(Catalog::builtin(), config);
    let store: MenuStore = Store::new(MenuState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    let total = ctx.catalog.with_value(|catalog| catalog.len());
    log::info!("[APP] Loaded {} menu items", total);

    // Filtered dishes, recomputed whenever search text or category changes
    let visible = Memo::new(move |_| {
        let query = store.search_text().get();
        let category = store.active_category().get();
        ctx.catalog
            .with_value(|catalog| visible_items(catalog.items(), &query, &category))
    });

    let count_line = move || {
        visible.with(|items: &Vec<MenuItem>| format!("Showing {} of {} dishes", items.len(), total))
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>{config.title}</h1>
                <p class="subtitle">{config.subtitle}</p>
            </header>

            <div class="controls">
                <SearchBar />
                <CategoryBar />
            </div>

            <p class="item-count">{count_line}</p>

            <MenuGrid visible=visible />

            <DetailModal />

            <footer class="app-footer">{config.footer}</footer>
        </div>
    }
}
