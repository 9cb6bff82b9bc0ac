//! Unified error system for the cashier
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`ErrorKind`]: Recoverability class (validation, precondition, not found, ...)
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 5xxx: Shift errors
//! - 6xxx: Menu errors
//! - 7xxx: Table errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorKind};
//!
//! let err = AppError::new(ErrorCode::TableNotSelected);
//! assert_eq!(err.kind(), ErrorKind::Precondition);
//!
//! let err = AppError::invalid_field("name", "Nama tidak boleh kosong");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! assert_eq!(err.kind(), ErrorKind::Validation);
//! ```

mod category;
mod codes;
mod types;

pub use category::{ErrorCategory, ErrorKind};
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
