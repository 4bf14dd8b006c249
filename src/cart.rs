//! Cart Stub
//!
//! There is no cart subsystem. The "Add" and "Add to Cart" buttons route
//! here so the intent is recorded in the console and nothing else happens.
//! No quantities, totals or persistence are tracked.

use crate::models::MenuItem;

/// No-op: logs the request and returns.
pub fn add_to_cart(item: &MenuItem) {
    log::info!("[CART] add requested for #{} {} (no cart available)", item.id, item.name);
}
