//! Order types
//!
//! - Lines: what the cart holds while a table is being served
//! - Snapshots: frozen cart handed over at checkout
//! - Completed orders: immutable entries of the shift ledger

pub mod snapshot;
pub mod types;

// Re-exports
pub use snapshot::CompletedOrder;
pub use types::*;

/// Tax rate applied to every cart, in percent
pub const TAX_RATE_PERCENT: u32 = 10;

/// Maximum quantity of a single line
pub const MAX_QUANTITY: i32 = 9999;
