//! Money calculation using rust_decimal
//!
//! Prices are whole rupiah; the 10% tax can produce a fractional rupiah, so
//! subtotal, tax and total are carried as `Decimal` and never rounded here.

use rust_decimal::Decimal;
use shared::order::{CartTotals, OrderLine, TAX_RATE_PERCENT};

/// Σ price × quantity
pub fn calculate_subtotal(lines: &[OrderLine]) -> Decimal {
    lines
        .iter()
        .map(|line| Decimal::from(line.line_subtotal()))
        .sum()
}

/// Tax on a subtotal at the fixed rate
pub fn calculate_tax(subtotal: Decimal) -> Decimal {
    subtotal * Decimal::from(TAX_RATE_PERCENT) / Decimal::ONE_HUNDRED
}

/// Subtotal, tax and total for a set of lines
pub fn calculate_totals(lines: &[OrderLine]) -> CartTotals {
    let subtotal = calculate_subtotal(lines);
    let tax = calculate_tax(subtotal);
    CartTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}
