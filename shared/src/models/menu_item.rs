//! Menu Item Model

use serde::{Deserialize, Serialize};

use super::category::MenuCategory;

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Price in whole rupiah
    pub price: i64,
    pub category: MenuCategory,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: i64,
        category: MenuCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category,
        }
    }
}

/// Raw menu form input (name, price and category as typed in the settings screen)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemForm {
    pub name: String,
    pub price: String,
    pub category: String,
}

impl MenuItemForm {
    pub fn new(name: impl Into<String>, price: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            category: category.into(),
        }
    }
}
