//! Unified error codes for the cashier
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order / cart errors
//! - 5xxx: Shift ledger and report errors
//! - 6xxx: Menu errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values so the front end can switch on a plain number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Order ====================
    /// Order has no lines
    OrderEmpty = 4007,
    /// No table selected for the cart
    TableNotSelected = 4010,

    // ==================== 5xxx: Shift ====================
    /// Expense amount is negative or malformed
    ExpenseInvalidAmount = 5001,
    /// Building the report workbook failed
    ExportFailed = 5101,
    /// Writing the report file failed
    ReportWriteFailed = 5102,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Menu item has an invalid price
    MenuItemInvalidPrice = 6002,
    /// Menu category not recognized
    CategoryNotFound = 6101,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message for this error code, worded for the register's toasts
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Unknown => "Terjadi kesalahan",
            ErrorCode::ValidationFailed => "Data tidak valid",
            ErrorCode::NotFound => "Data tidak ditemukan",
            ErrorCode::AlreadyExists => "Data sudah ada",
            ErrorCode::InvalidRequest => "Permintaan tidak valid",
            ErrorCode::InvalidFormat => "Format tidak valid",
            ErrorCode::RequiredField => "Semua field harus diisi",
            ErrorCode::ValueOutOfRange => "Nilai di luar batas",

            // Order
            ErrorCode::OrderEmpty => "Pesanan masih kosong",
            ErrorCode::TableNotSelected => "Silakan pilih meja terlebih dahulu!",

            // Shift
            ErrorCode::ExpenseInvalidAmount => "Jumlah pengeluaran tidak boleh negatif",
            ErrorCode::ExportFailed => "Gagal membuat laporan shift",
            ErrorCode::ReportWriteFailed => "Gagal menyimpan laporan shift",

            // Menu
            ErrorCode::MenuItemNotFound => "Menu tidak ditemukan",
            ErrorCode::MenuItemInvalidPrice => "Harga harus berupa angka positif",
            ErrorCode::CategoryNotFound => "Kategori menu tidak dikenal",

            // Table
            ErrorCode::TableNotFound => "Meja tidak ditemukan",

            // System
            ErrorCode::InternalError => "Terjadi kesalahan internal",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Order
            4007 => Ok(ErrorCode::OrderEmpty),
            4010 => Ok(ErrorCode::TableNotSelected),

            // Shift
            5001 => Ok(ErrorCode::ExpenseInvalidAmount),
            5101 => Ok(ErrorCode::ExportFailed),
            5102 => Ok(ErrorCode::ReportWriteFailed),

            // Menu
            6001 => Ok(ErrorCode::MenuItemNotFound),
            6002 => Ok(ErrorCode::MenuItemInvalidPrice),
            6101 => Ok(ErrorCode::CategoryNotFound),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::OrderEmpty.code(), 4007);
        assert_eq!(ErrorCode::TableNotSelected.code(), 4010);
        assert_eq!(ErrorCode::ExportFailed.code(), 5101);
        assert_eq!(ErrorCode::MenuItemNotFound.code(), 6001);
        assert_eq!(ErrorCode::TableNotFound.code(), 7001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(2), Ok(ErrorCode::ValidationFailed));
        assert_eq!(ErrorCode::try_from(4010), Ok(ErrorCode::TableNotSelected));
        assert_eq!(ErrorCode::try_from(6101), Ok(ErrorCode::CategoryNotFound));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::TableNotFound).unwrap();
        assert_eq!(json, "7001");

        let code: ErrorCode = serde_json::from_str("4007").unwrap();
        assert_eq!(code, ErrorCode::OrderEmpty);

        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_default_messages() {
        assert_eq!(
            ErrorCode::TableNotSelected.message(),
            "Silakan pilih meja terlebih dahulu!"
        );
        assert_eq!(
            ErrorCode::MenuItemInvalidPrice.message(),
            "Harga harus berupa angka positif"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::MenuItemInvalidPrice.to_string(), "6002");
        assert_eq!(InvalidErrorCode(77).to_string(), "invalid error code: 77");
    }
}
