//! Shared types for the cart

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Order Line
// ============================================================================

/// One line of the cart
///
/// `id` is the menu item id the line was created from; name and price are
/// copied at add time and never follow later catalog edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Menu item ID (also the line key, one line per menu item)
    pub id: String,
    /// Name snapshot
    pub name: String,
    /// Unit price snapshot in whole rupiah
    pub price: i64,
    /// Quantity, always >= 1
    pub quantity: i32,
}

impl OrderLine {
    /// price × quantity
    pub fn line_subtotal(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}

// ============================================================================
// Totals
// ============================================================================

/// Derived cart totals
///
/// Decimal so the 10% tax stays exact for any whole-rupiah subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

// ============================================================================
// Snapshot
// ============================================================================

/// Frozen copy of the cart handed to the shift ledger at checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    pub lines: Vec<OrderLine>,
    pub totals: CartTotals,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line quantities
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| i64::from(l.quantity)).sum()
    }
}
