//! Utilities - validation, formatting and logging
//!
//! - [`validation`] - form parsing and field checks
//! - [`format`] - rupiah display formatting
//! - [`logger`] - tracing subscriber setup

pub mod format;
pub mod logger;
pub mod validation;

pub use format::format_rupiah;
pub use shared::error::{AppError, AppResult, ErrorCode};
