//! Detail Overlay State
//!
//! Two states: `Closed` and `Open(item)`. Selecting while open replaces the
//! shown item directly, without passing through `Closed`.

use crate::models::MenuItem;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open(MenuItem),
}

impl Selection {
    pub fn select(&mut self, item: MenuItem) {
        *self = Selection::Open(item);
    }

    pub fn close(&mut self) {
        *self = Selection::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    pub fn item(&self) -> Option<&MenuItem> {
        match self {
            Selection::Open(item) => Some(item),
            Selection::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::ItemId;

    #[test]
    fn test_initial_state_closed() {
        let sel = Selection::default();
        assert!(!sel.is_open());
        assert!(sel.item().is_none());
    }

    #[test]
    fn test_select_then_close() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::default();
        sel.select(catalog.get(ItemId(5)).unwrap().clone());
        assert_eq!(sel.item().map(|i| i.id), Some(ItemId(5)));
        sel.close();
        assert_eq!(sel, Selection::Closed);
    }

    #[test]
    fn test_select_replaces_while_open() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::default();
        sel.select(catalog.get(ItemId(1)).unwrap().clone());
        sel.select(catalog.get(ItemId(7)).unwrap().clone());
        assert!(sel.is_open());
        assert_eq!(sel.item().map(|i| i.name.as_str()), Some("Greek Salad"));
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut sel = Selection::default();
        sel.close();
        assert_eq!(sel, Selection::Closed);
    }
}
