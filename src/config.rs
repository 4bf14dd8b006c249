//! UI Configuration
//!
//! Compile-time constants for the menu view.

/// Static configuration shared by all components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuConfig {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub currency_symbol: &'static str,
    pub search_placeholder: &'static str,
    /// Max characters of the description shown on a card
    pub card_description_chars: usize,
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
    pub footer: &'static str,
}

impl MenuConfig {
    pub const DEFAULT: MenuConfig = MenuConfig {
        title: "Food Menu",
        subtitle: "Browse dishes by name or category",
        currency_symbol: "$",
        search_placeholder: "Search dishes...",
        card_description_chars: 80,
        empty_title: "No items match your search.",
        empty_hint: "Try clearing filters or searching something else.",
        footer: "Built with Leptos",
    };
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
