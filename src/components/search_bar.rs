//! Search Bar Component

use leptos::prelude::*;

use crate::context::use_menu_context;
use crate::store::{store_set_search, use_menu_store, MenuStateStoreFields};

/// Text input bound to the search text
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_menu_context();
    let store = use_menu_store();

    view! {
        <div class="search-bar">
            <input
                type="search"
                class="search-input"
                placeholder=ctx.config.search_placeholder
                aria-label="Search dishes"
                prop:value=move || store.search_text().get()
                on:input=move |ev| store_set_search(&store, event_target_value(&ev))
            />
        </div>
    }
}
