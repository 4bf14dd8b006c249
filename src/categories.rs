//! Category Derivation
//!
//! The "All" sentinel plus every distinct category in first-seen order.

use crate::catalog::Catalog;
use crate::error::MenuError;
use crate::models::{Category, MenuItem};

pub const ALL_LABEL: &str = "All";

/// Active category choice
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No category filtering
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn accepts(&self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }
}

/// Ordered, duplicate-free category choices. `All` is always first.
/// A catalog category labelled "All" is folded into the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    choices: Vec<CategoryFilter>,
}

impl CategorySet {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut choices = vec![CategoryFilter::All];
        for item in catalog.items() {
            if item.category.as_str() == ALL_LABEL {
                continue;
            }
            let choice = CategoryFilter::Only(item.category.clone());
            if !choices.contains(&choice) {
                choices.push(choice);
            }
        }
        Self { choices }
    }

    pub fn choices(&self) -> &[CategoryFilter] {
        &self.choices
    }

    /// Look up a choice by its label
    pub fn find(&self, label: &str) -> Option<&CategoryFilter> {
        self.choices.iter().find(|choice| choice.label() == label)
    }

    /// Choice for a label, or `UnknownCategory` if the set has none
    pub fn resolve(&self, label: &str) -> Result<CategoryFilter, MenuError> {
        self.find(label)
            .cloned()
            .ok_or_else(|| MenuError::UnknownCategory(label.to_string()))
    }
}
