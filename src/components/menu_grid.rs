//! Menu Grid Component
//!
//! Cards for the filtered dishes, or the empty-state notice.

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::menu_card::MenuCard;
use crate::filter::shows_empty_state;
use crate::models::MenuItem;

#[component]
pub fn MenuGrid(visible: Memo<Vec<MenuItem>>) -> impl IntoView {
    view! {
        <main class="menu-grid">
            <For
                each=move || visible.get()
                key=|item| item.id
                children=move |item| view! { <MenuCard item=item /> }
            />
            <Show when=move || visible.with(|items| shows_empty_state(items))>
                <EmptyState />
            </Show>
        </main>
    }
}
