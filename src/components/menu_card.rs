//! Menu Card Component
//!
//! A single dish in the grid.

use leptos::prelude::*;

use crate::cart;
use crate::context::use_menu_context;
use crate::format::{format_price, truncate_chars};
use crate::models::MenuItem;
use crate::store::{store_open_details, use_menu_store};

#[component]
pub fn MenuCard(item: MenuItem) -> impl IntoView {
    let ctx = use_menu_context();
    let store = use_menu_store();

    let id = item.id;
    let price = format_price(item.price, ctx.config.currency_symbol);
    // Display only, the full text lives in the model and the detail modal
    let short_description = truncate_chars(&item.description, ctx.config.card_description_chars);
    let full_description = item.description.clone();
    let name = item.name.clone();
    let category = item.category.to_string();
    let image_url = item.image_url.clone();

    view! {
        <article class="menu-card">
            <figure class="menu-card-image">
                <img src=image_url alt=name.clone() loading="lazy" />
            </figure>
            <div class="menu-card-body">
                <div class="menu-card-heading">
                    <h2 class="menu-card-title">{name}</h2>
                    <span class="badge">{category}</span>
                </div>
                <p class="menu-card-description" title=full_description>{short_description}</p>
                <div class="menu-card-actions">
                    <span class="price">{price}</span>
                    <div class="menu-card-buttons">
                        <button
                            type="button"
                            class="btn btn-outline"
                            on:click=move |_| {
                                ctx.catalog.with_value(|catalog| store_open_details(&store, catalog, id));
                            }
                        >
                            "Details"
                        </button>
                        <button
                            type="button"
                            class="btn btn-primary"
                            on:click=move |_| cart::add_to_cart(&item)
                        >
                            "Add"
                        </button>
                    </div>
                </div>
            </div>
        </article>
    }
}
