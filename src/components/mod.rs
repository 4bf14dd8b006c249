//! UI Components
//!
//! Leptos components for the menu page.

mod category_bar;
mod detail_modal;
mod empty_state;
mod menu_card;
mod menu_grid;
mod search_bar;

pub use category_bar::CategoryBar;
pub use detail_modal::DetailModal;
pub use menu_grid::MenuGrid;
pub use search_bar::SearchBar;
