//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity (meja)
///
/// `occupied` is a manually toggled flag; nothing derives it from cart activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    /// Display label, e.g. "T-01"
    pub number: String,
    #[serde(default)]
    pub occupied: bool,
}

impl DiningTable {
    pub fn new(id: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            occupied: false,
        }
    }
}

/// Raw table form input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableForm {
    pub number: String,
}

impl TableForm {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }
}
