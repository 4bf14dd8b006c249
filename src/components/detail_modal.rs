//! Detail Modal Component
//!
//! Overlay for the selected dish. Rendered only while a dish is selected;
//! Escape or the Close button closes it.

use leptos::ev;
use leptos::prelude::*;

use crate::cart;
use crate::context::use_menu_context;
use crate::format::format_price;
use crate::store::{store_close_details, use_menu_store, MenuStateStoreFields};

#[component]
pub fn DetailModal() -> impl IntoView {
    let ctx = use_menu_context();
    let store = use_menu_store();

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && store.selection().with_untracked(|s| s.is_open()) {
            store_close_details(&store);
        }
    });
    on_cleanup(move || handle.remove());

    move || {
        store.selection().get().item().cloned().map(|item| {
            let price = format_price(item.price, ctx.config.currency_symbol);
            let cart_item = item.clone();
            view! {
                <div class="modal-backdrop">
                    <div class="modal-box" role="dialog" aria-modal="true" aria-labelledby="detail-title">
                        <h3 id="detail-title" class="modal-title">
                            {item.name.clone()}
                            <span class="modal-price">" - " {price}</span>
                        </h3>
                        <div class="modal-content">
                            <img class="modal-image" src=item.image_url.clone() alt=item.name.clone() />
                            <div>
                                <p class="modal-description">{item.description.clone()}</p>
                                <p class="modal-category">
                                    "Category: " <strong>{item.category.to_string()}</strong>
                                </p>
                            </div>
                        </div>
                        <div class="modal-action">
                            <button type="button" class="btn" on:click=move |_| store_close_details(&store)>
                                "Close"
                            </button>
                            <button
                                type="button"
                                class="btn btn-primary"
                                on:click=move |_| cart::add_to_cart(&cart_item)
                            >
                                "Add to Cart"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
