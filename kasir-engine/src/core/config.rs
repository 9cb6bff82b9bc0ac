use chrono::{FixedOffset, Offset, Utc};

use crate::orders::CartMode;

/// WIB, UTC+7
const DEFAULT_UTC_OFFSET_MINUTES: i32 = 7 * 60;

/// Cashier configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | KASIR_REPORT_DIR | . | Directory the shift workbook is saved into |
/// | KASIR_LOG_LEVEL | info | Tracing max level |
/// | KASIR_LOG_DIR | (unset) | Enables daily rolling log files |
/// | KASIR_CART_MODE | single | `single` or `per-table` |
/// | KASIR_UTC_OFFSET_MINUTES | 420 | Offset for report order timestamps |
/// | KASIR_TOP_SELLERS | 5 | Best sellers shown in summaries |
///
/// # Example
///
/// ```ignore
/// KASIR_CART_MODE=per-table KASIR_REPORT_DIR=/tmp cargo run --bin kasir-report
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub report_dir: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub cart_mode: CartMode,
    /// Minutes east of UTC
    pub utc_offset_minutes: i32,
    pub top_sellers: usize,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    ///
    /// Unparseable values are logged and replaced by the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            report_dir: std::env::var("KASIR_REPORT_DIR").unwrap_or(defaults.report_dir),
            log_level: std::env::var("KASIR_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("KASIR_LOG_DIR").ok().filter(|d| !d.is_empty()),
            cart_mode: parse_var("KASIR_CART_MODE", defaults.cart_mode),
            utc_offset_minutes: Some(parse_var(
                "KASIR_UTC_OFFSET_MINUTES",
                defaults.utc_offset_minutes,
            ))
            .filter(|m| offset_from_minutes(*m).is_some())
            .unwrap_or(defaults.utc_offset_minutes),
            top_sellers: parse_var("KASIR_TOP_SELLERS", defaults.top_sellers),
        }
    }

    /// Offset used to render report timestamps
    pub fn utc_offset(&self) -> FixedOffset {
        offset_from_minutes(self.utc_offset_minutes)
            .or_else(|| offset_from_minutes(DEFAULT_UTC_OFFSET_MINUTES))
            .unwrap_or_else(|| Utc.fix())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_dir: ".".into(),
            log_level: "info".into(),
            log_dir: None,
            cart_mode: CartMode::SingleActive,
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            top_sellers: 5,
        }
    }
}

fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    FixedOffset::east_opt(minutes.checked_mul(60)?)
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(var = name, value = %raw, "Ignoring invalid config value");
            default
        }),
        Err(_) => default,
    }
}
