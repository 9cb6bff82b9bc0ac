//! Display formatting for rupiah amounts
//!
//! Presentation only; the engine keeps amounts as exact integers/decimals.

use rust_decimal::Decimal;

/// Format an amount the way the register shows it: `Rp 63.800`
///
/// Thousands are grouped with '.', a fractional part (only possible for tax)
/// follows a ','.
pub fn format_rupiah(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let negative = normalized.is_sign_negative() && !normalized.is_zero();
    let text = normalized.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::from("Rp ");
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
