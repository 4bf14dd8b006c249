//! Menu Errors

use thiserror::Error;

use crate::models::ItemId;

/// Rejected view-state transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// Category label is not part of the derived category set
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    /// Item id is not part of the catalog
    #[error("unknown menu item: #{0}")]
    UnknownItem(ItemId),
}
