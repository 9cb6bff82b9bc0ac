//! Expense Model (pengeluaran)

use serde::{Deserialize, Serialize};

/// Cash paid out of the drawer during a shift
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub description: String,
    /// Amount in whole rupiah (never negative)
    pub amount: i64,
}
