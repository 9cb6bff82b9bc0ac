//! Input validation helpers
//!
//! Settings-screen forms arrive as raw strings; everything is trimmed and
//! checked here before it reaches the catalog or the ledger.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::MenuCategory;

// ── Limits ──────────────────────────────────────────────────────────

/// Entity names: menu item, table label, expense description
pub const MAX_NAME_LEN: usize = 200;

/// Upper bound for a single menu price (whole rupiah)
pub const MAX_PRICE: i64 = 100_000_000;

/// Upper bound for a single expense (whole rupiah)
pub const MAX_EXPENSE_AMOUNT: i64 = 1_000_000_000;

// ── Text ────────────────────────────────────────────────────────────

/// Label shown to the cashier for a form field key
fn field_label(field: &str) -> &str {
    match field {
        "name" => "Nama menu",
        "number" => "Nomor meja",
        "description" => "Keterangan",
        other => other,
    }
}

/// Validate that a required string is non-empty and within the length limit.
///
/// Returns the trimmed value.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(
            AppError::with_message(
                ErrorCode::RequiredField,
                format!("{} tidak boleh kosong", field_label(field)),
            )
            .with_detail("field", field),
        );
    }
    if trimmed.chars().count() > max_len {
        return Err(AppError::invalid_field(
            field,
            format!(
                "{} terlalu panjang ({} karakter, maksimal {max_len})",
                field_label(field),
                trimmed.chars().count()
            ),
        ));
    }
    Ok(trimmed.to_string())
}

// ── Numbers ─────────────────────────────────────────────────────────

/// Validate an already-numeric price: positive and within bounds.
pub fn validate_price(price: i64) -> AppResult<i64> {
    if price <= 0 {
        return Err(AppError::with_message(
            ErrorCode::MenuItemInvalidPrice,
            format!("Harga harus berupa angka positif, diterima {price}"),
        )
        .with_detail("field", "price"));
    }
    if price > MAX_PRICE {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("Harga melebihi batas maksimum ({MAX_PRICE}), diterima {price}"),
        )
        .with_detail("field", "price"));
    }
    Ok(price)
}

/// Parse a price typed into the menu form.
///
/// Accepts digits only (surrounding whitespace ignored); fractions, signs and
/// thousands separators are rejected.
pub fn parse_price(raw: &str) -> AppResult<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(
            AppError::with_message(ErrorCode::RequiredField, "Harga tidak boleh kosong")
                .with_detail("field", "price"),
        );
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::with_message(
            ErrorCode::MenuItemInvalidPrice,
            format!("Harga harus berupa angka positif, diterima '{trimmed}'"),
        )
        .with_detail("field", "price"));
    }
    let price: i64 = trimmed.parse().map_err(|_| {
        AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("Harga melebihi batas maksimum ({MAX_PRICE}), diterima '{trimmed}'"),
        )
        .with_detail("field", "price")
    })?;
    validate_price(price)
}

/// Parse a category slug from the menu form.
pub fn parse_category(raw: &str) -> AppResult<MenuCategory> {
    raw.parse()
}

/// Validate an expense amount: zero allowed, negative rejected.
pub fn validate_expense_amount(amount: i64) -> AppResult<i64> {
    if amount < 0 {
        return Err(AppError::with_message(
            ErrorCode::ExpenseInvalidAmount,
            format!("Jumlah pengeluaran tidak boleh negatif, diterima {amount}"),
        )
        .with_detail("field", "amount"));
    }
    if amount > MAX_EXPENSE_AMOUNT {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!(
                "Jumlah pengeluaran melebihi batas maksimum ({MAX_EXPENSE_AMOUNT}), diterima {amount}"
            ),
        )
        .with_detail("field", "amount"));
    }
    Ok(amount)
}
