//! Shift ledger and report export

pub mod ledger;
pub mod report;

pub use ledger::{BestSeller, ShiftLedger, ShiftSummary};
pub use report::{ExportError, ReportArtifact, export, report_file_name};
