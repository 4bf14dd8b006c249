//! Empty State Component

use leptos::prelude::*;

use crate::context::use_menu_context;
use crate::store::{store_clear_filters, use_menu_store};

/// Shown instead of cards when nothing matches
#[component]
pub fn EmptyState() -> impl IntoView {
    let ctx = use_menu_context();
    let store = use_menu_store();

    view! {
        <div class="empty-state">
            <p class="empty-title">{ctx.config.empty_title}</p>
            <p class="empty-hint">{ctx.config.empty_hint}</p>
            <button type="button" class="btn btn-ghost" on:click=move |_| store_clear_filters(&store)>
                "Clear filters"
            </button>
        </div>
    }
}
