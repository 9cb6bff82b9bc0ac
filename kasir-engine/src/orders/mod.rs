//! Cart and money math
//!
//! - [`Cart`]: the lines being rung up for the selected table
//! - [`money`]: subtotal / tax / total in `Decimal`
//! - [`OrderError`]: cart failures, convertible into [`shared::AppError`]

pub mod cart;
pub mod error;
pub mod money;

pub use cart::{Cart, CartMode, CartState};
pub use error::OrderError;
pub use money::{calculate_subtotal, calculate_tax, calculate_totals};
