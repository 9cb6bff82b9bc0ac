//! Error category and kind classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 4xxx: Order errors
/// - 5xxx: Shift errors
/// - 6xxx: Menu errors
/// - 7xxx: Table errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Order errors (4xxx)
    Order,
    /// Shift ledger and report errors (5xxx)
    Shift,
    /// Menu errors (6xxx)
    Menu,
    /// Table errors (7xxx)
    Table,
    /// System errors (9xxx and anything unassigned)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            4000..5000 => Self::Order,
            5000..6000 => Self::Shift,
            6000..7000 => Self::Menu,
            7000..8000 => Self::Table,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Order => "order",
            Self::Shift => "shift",
            Self::Menu => "menu",
            Self::Table => "table",
            Self::System => "system",
        }
    }
}

/// Recoverability class of an error, independent of the domain it came from.
///
/// Every kind is recoverable at the session boundary; none of them ends the
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Empty or malformed input, out-of-range numbers, unknown category
    Validation,
    /// Operation attempted in the wrong state (no table selected, empty cart)
    Precondition,
    /// Referenced id does not exist
    NotFound,
    /// Report could not be built or saved
    Export,
    /// Anything else
    Internal,
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }

    /// Get the recoverability class for this error code
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::ValidationFailed
            | ErrorCode::AlreadyExists
            | ErrorCode::InvalidRequest
            | ErrorCode::InvalidFormat
            | ErrorCode::RequiredField
            | ErrorCode::ValueOutOfRange
            | ErrorCode::ExpenseInvalidAmount
            | ErrorCode::MenuItemInvalidPrice
            | ErrorCode::CategoryNotFound => ErrorKind::Validation,
            ErrorCode::TableNotSelected | ErrorCode::OrderEmpty => ErrorKind::Precondition,
            ErrorCode::NotFound
            | ErrorCode::MenuItemNotFound
            | ErrorCode::TableNotFound => ErrorKind::NotFound,
            ErrorCode::ExportFailed | ErrorCode::ReportWriteFailed => ErrorKind::Export,
            ErrorCode::Unknown | ErrorCode::InternalError => ErrorKind::Internal,
        }
    }
}
