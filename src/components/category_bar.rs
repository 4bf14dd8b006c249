//! Category Bar Component
//!
//! Mutually exclusive category toggle buttons.

use leptos::prelude::*;

use crate::context::use_menu_context;
use crate::store::{store_select_category, use_menu_store, MenuStateStoreFields};

/// One toggle per category, "All" first
#[component]
pub fn CategoryBar() -> impl IntoView {
    let ctx = use_menu_context();
    let store = use_menu_store();
    let labels: Vec<String> = ctx
        .categories
        .with_value(|set| set.choices().iter().map(|c| c.label().to_string()).collect());

    view! {
        <div class="category-bar" role="group" aria-label="Categories">
            {labels.into_iter().map(|label| {
                let val = label.clone();
                let val_clone = label.clone();
                let is_active = Memo::new(move |_| store.active_category().get().label() == val);
                view! {
                    <button
                        type="button"
                        class=move || if is_active.get() { "category-btn active" } else { "category-btn" }
                        aria-pressed=move || is_active.get().to_string()
                        on:click=move |_| {
                            ctx.categories.with_value(|set| store_select_category(&store, set, &val_clone));
                        }
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
