//! Display Formatting

use crate::models::Price;

/// Price with currency symbol, e.g. `$4.50`
pub fn format_price(price: Price, currency_symbol: &str) -> String {
    format!("{}{}", currency_symbol, price.amount())
}

/// Shorten text to at most `max_chars` characters for display.
/// Cuts on a char boundary and appends an ellipsis when shortened.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some(_) if max_chars == 0 => String::new(),
        Some(_) => {
            let keep = max_chars.saturating_sub(1);
            let cut = text.char_indices().nth(keep).map(|(i, _)| i).unwrap_or(text.len());
            format!("{}…", text[..cut].trim_end())
        }
    }
}
