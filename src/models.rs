//! Menu Models
//!
//! Immutable data structures describing the menu.

use std::fmt;

/// Menu item identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Price in minor currency units (cents)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Price(u32);

impl Price {
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    /// Fixed-point amount with two decimals, e.g. `4.50`
    pub fn amount(self) -> String {
        format!("{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Category label of a menu item
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single dish on the menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    pub description: String,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_amount_is_fixed_point() {
        assert_eq!(Price::from_cents(450).amount(), "4.50");
        assert_eq!(Price::from_cents(1100).amount(), "11.00");
        assert_eq!(Price::from_cents(799).amount(), "7.99");
        assert_eq!(Price::from_cents(5).amount(), "0.05");
        assert_eq!(Price::default().amount(), "0.00");
    }

    #[test]
    fn test_category_display() {
        let c = Category::new("Dessert");
        assert_eq!(c.as_str(), "Dessert");
        assert_eq!(c.to_string(), "Dessert");
    }
}
