//! Completed order - immutable record kept by the shift ledger

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{CartSnapshot, OrderLine};

/// A finalized order
///
/// Fields are only readable from outside the crate that builds it; once
/// created the record never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedOrder {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    table_id: Option<String>,
    items: Vec<OrderLine>,
    subtotal: Decimal,
    tax: Decimal,
    total: Decimal,
    /// Creation timestamp (Unix millis)
    created_at: i64,
}

impl CompletedOrder {
    /// Freeze a cart snapshot into a completed order
    pub fn from_snapshot(id: String, snapshot: CartSnapshot, created_at: i64) -> Self {
        Self {
            id,
            table_id: snapshot.table_id,
            items: snapshot.lines,
            subtotal: snapshot.totals.subtotal,
            tax: snapshot.totals.tax,
            total: snapshot.totals.total,
            created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn table_id(&self) -> Option<&str> {
        self.table_id.as_deref()
    }

    pub fn items(&self) -> &[OrderLine] {
        &self.items
    }

    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    pub fn tax(&self) -> Decimal {
        self.tax
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }
}
