//! Data models
//!
//! Catalog entities (menu items, categories, tables) and shift expenses.
//! All ids are strings so the front end can keep them as opaque keys.

pub mod category;
pub mod dining_table;
pub mod expense;
pub mod menu_item;

// Re-exports
pub use category::*;
pub use dining_table::*;
pub use expense::*;
pub use menu_item::*;
