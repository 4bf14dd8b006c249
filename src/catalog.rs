//! Menu Catalog
//!
//! The fixed, ordered list of dishes. Built once at startup, never mutated.

use std::collections::HashSet;

use crate::models::{Category, ItemId, MenuItem, Price};

/// (id, name, cents, category, description, image)
const BUILTIN_ITEMS: &[(u32, &str, u32, &str, &str, &str)] = &[
    (1, "Margherita Pizza", 799, "Pizza", "Classic tomato, mozzarella, basil.",
        "https://source.unsplash.com/collection/1424340/800x600?pizza"),
    (2, "Pepperoni Feast", 949, "Pizza", "Loaded with pepperoni and cheese.",
        "https://source.unsplash.com/collection/1424340/800x600?pepperoni"),
    (3, "Avocado Salad", 650, "Salad", "Fresh greens, avocado, citrus dressing.",
        "https://source.unsplash.com/collection/483251/800x600?salad"),
    (4, "Grilled Chicken", 1100, "Main", "Herb-marinated chicken with veggies.",
        "https://source.unsplash.com/collection/483251/800x600?chicken"),
    (5, "Chocolate Cake", 450, "Dessert", "Rich and moist chocolate delight.",
        "https://source.unsplash.com/collection/190727/800x600?cake"),
    (6, "Pasta Alfredo", 875, "Main", "Creamy alfredo with parmesan.",
        "https://source.unsplash.com/collection/1424340/800x600?pasta"),
    (7, "Greek Salad", 600, "Salad", "Cucumber, tomato, olives, feta.",
        "https://source.unsplash.com/collection/483251/800x600?greek-salad"),
];

/// Immutable ordered collection of menu items
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Wrap a list of items. Ids must be unique.
    pub fn new(items: Vec<MenuItem>) -> Self {
        debug_assert!(
            {
                let mut seen = HashSet::new();
                items.iter().all(|item| seen.insert(item.id))
            },
            "catalog ids must be unique"
        );
        Self { items }
    }

    /// The seven-dish demo menu
    pub fn builtin() -> Self {
        let items = BUILTIN_ITEMS
            .iter()
            .map(|&(id, name, cents, category, description, image_url)| MenuItem {
                id: ItemId(id),
                name: name.to_string(),
                price: Price::from_cents(cents),
                category: Category::new(category),
                description: description.to_string(),
                image_url: image_url.to_string(),
            })
            .collect();
        Self::new(items)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
