//! Kasir Engine - cart, catalog and shift ledger for the Meja Pintar cashier
//!
//! # Module layout
//!
//! ```text
//! kasir-engine/src/
//! ├── core/          # config, session state, command dispatch
//! ├── catalog/       # menu items and dining tables
//! ├── orders/        # cart aggregate and money math
//! ├── shift/         # shift ledger and xlsx report
//! └── utils/         # validation, formatting, logging
//! ```
//!
//! Everything lives in process memory; the only file ever written is the
//! shift report, and only when asked to.

pub mod catalog;
pub mod core;
pub mod orders;
pub mod shift;
pub mod utils;

// Re-export public types
pub use catalog::Catalog;
pub use core::{CommandResponse, Config, Notification, NotificationLevel, Session, SessionCommand};
pub use orders::{Cart, CartMode, CartState, OrderError};
pub use shift::{BestSeller, ExportError, ReportArtifact, ShiftLedger, ShiftSummary};
pub use utils::{AppError, AppResult, ErrorCode, format_rupiah};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and install the logger
pub fn setup_environment() -> Config {
    // A missing .env is normal
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(config.log_level.as_str()), config.log_dir.as_deref());
    config
}
