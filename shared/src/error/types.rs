//! Error type shared by every cashier operation

use super::category::ErrorKind;
use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (offending field, id, ...)
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Recoverability class of this error
    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error naming the offending field
    pub fn invalid_field(field: &str, msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg).with_detail("field", field)
    }

    /// Create a menu item not found error
    pub fn menu_item_not_found(id: &str) -> Self {
        Self::with_message(
            ErrorCode::MenuItemNotFound,
            format!("Menu tidak ditemukan: {}", id),
        )
        .with_detail("id", id)
    }

    /// Create a table not found error
    pub fn table_not_found(id: &str) -> Self {
        Self::with_message(ErrorCode::TableNotFound, format!("Meja tidak ditemukan: {}", id))
            .with_detail("id", id)
    }

    /// Create a no-table-selected error
    pub fn table_not_selected() -> Self {
        Self::new(ErrorCode::TableNotSelected)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::TableNotSelected);
        assert_eq!(err.code, ErrorCode::TableNotSelected);
        assert_eq!(err.message, "Silakan pilih meja terlebih dahulu!");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::invalid_field("price", "Harga harus berupa angka positif");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field"), Some(&Value::from("price")));
    }

    #[test]
    fn test_app_error_display_is_message() {
        let err = AppError::menu_item_not_found("42");
        assert_eq!(err.to_string(), "Menu tidak ditemukan: 42");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_app_error_serialize() {
        let err = AppError::table_not_found("9");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], 7001);
        assert_eq!(json["details"]["id"], "9");

        let back: AppError = serde_json::from_value(json).unwrap();
        assert_eq!(back, err);
    }
}
