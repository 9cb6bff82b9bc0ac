//! Shared types for the Meja Pintar cashier
//!
//! Data model (menu, tables, order lines, completed orders, expenses),
//! the unified error system and small id/time helpers used by the engine
//! and by whatever front end renders the register.

pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorKind};
pub use models::{DiningTable, Expense, MenuCategory, MenuItem};
pub use order::{CartSnapshot, CartTotals, CompletedOrder, OrderLine};
