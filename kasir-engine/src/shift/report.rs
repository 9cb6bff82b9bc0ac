//! Shift report export
//!
//! Turns the ledger into an xlsx workbook held in memory:
//! - "Penjualan": one row per (order, line)
//! - "Rekap Shift": total sales, total expenses, cash variance
//!
//! Building the workbook never touches the ledger; writing it to disk is a
//! separate step ([`ReportArtifact::save_to`]).

use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use shared::error::{AppError, ErrorCode};
use shared::order::CompletedOrder;
use thiserror::Error;

use super::ledger::ShiftLedger;

pub const SALES_SHEET: &str = "Penjualan";
pub const SUMMARY_SHEET: &str = "Rekap Shift";

const SALES_HEADERS: [&str; 5] = ["Menu", "Qty", "Harga", "Subtotal", "Waktu"];
const SUMMARY_HEADERS: [&str; 2] = ["Keterangan", "Jumlah"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Gagal membuat laporan shift: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("{what} tidak dapat ditulis ke laporan: {value}")]
    NonRepresentable { what: &'static str, value: String },

    #[error("Gagal menyimpan laporan ke {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        match &err {
            ExportError::Io { path, .. } => {
                let path = path.display().to_string();
                AppError::with_message(ErrorCode::ReportWriteFailed, err.to_string())
                    .with_detail("path", path)
            }
            _ => AppError::with_message(ErrorCode::ExportFailed, err.to_string()),
        }
    }
}

/// Finished workbook plus the name it should be saved under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ReportArtifact {
    /// Write the workbook into `dir`, returning the full path
    pub fn save_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, &self.bytes).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "Shift report saved");
        Ok(path)
    }
}

/// `laporan-shift-<date>.xlsx`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("laporan-shift-{}.xlsx", date.format("%Y-%m-%d"))
}

/// Build the shift workbook
///
/// `offset` controls how order timestamps are rendered; the file date is the
/// UTC calendar date of `now`.
pub fn export(
    ledger: &ShiftLedger,
    offset: FixedOffset,
    now: DateTime<Utc>,
) -> Result<ReportArtifact, ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    write_sales_sheet(workbook.add_worksheet(), &header, ledger.orders(), offset)?;
    write_summary_sheet(workbook.add_worksheet(), &header, ledger)?;

    let bytes = workbook.save_to_buffer()?;
    let file_name = report_file_name(now.date_naive());

    tracing::info!(
        file_name = %file_name,
        orders = ledger.orders().len(),
        expenses = ledger.expenses().len(),
        "Shift report built"
    );
    Ok(ReportArtifact { file_name, bytes })
}

fn write_sales_sheet(
    sheet: &mut Worksheet,
    header: &Format,
    orders: &[CompletedOrder],
    offset: FixedOffset,
) -> Result<(), ExportError> {
    sheet.set_name(SALES_SHEET)?;
    sheet.set_column_width(0, 28)?;
    sheet.set_column_width(4, 20)?;
    for (col, title) in (0u16..).zip(SALES_HEADERS) {
        sheet.write_string_with_format(0, col, title, header)?;
    }

    let mut row: u32 = 1;
    for order in orders {
        let timestamp = format_timestamp(order.created_at(), offset)?;
        for line in order.items() {
            sheet.write_string(row, 0, &line.name)?;
            sheet.write_number(row, 1, f64::from(line.quantity))?;
            sheet.write_number(row, 2, whole_to_f64(line.price, "harga")?)?;
            sheet.write_number(row, 3, whole_to_f64(line.line_subtotal(), "subtotal")?)?;
            sheet.write_string(row, 4, &timestamp)?;
            row += 1;
        }
    }
    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    header: &Format,
    ledger: &ShiftLedger,
) -> Result<(), ExportError> {
    sheet.set_name(SUMMARY_SHEET)?;
    sheet.set_column_width(0, 22)?;
    for (col, title) in (0u16..).zip(SUMMARY_HEADERS) {
        sheet.write_string_with_format(0, col, title, header)?;
    }

    let summary = ledger.summarize();
    let rows = [
        ("Total Penjualan", summary.total_sales),
        ("Total Pengeluaran", summary.total_expenses),
        ("Selisih Kas", summary.cash_variance),
    ];
    for (row, (label, amount)) in (1u32..).zip(rows) {
        sheet.write_string(row, 0, label)?;
        sheet.write_number(row, 1, decimal_to_f64(amount, label)?)?;
    }
    Ok(())
}

fn format_timestamp(millis: i64, offset: FixedOffset) -> Result<String, ExportError> {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&offset).format(TIMESTAMP_FORMAT).to_string())
        .ok_or_else(|| ExportError::NonRepresentable {
            what: "waktu",
            value: millis.to_string(),
        })
}

// Spreadsheet numbers are f64; past 2^53 whole rupiah would be rounded.
const MAX_EXACT_F64: i64 = 1 << 53;

fn whole_to_f64(value: i64, what: &'static str) -> Result<f64, ExportError> {
    if value.abs() > MAX_EXACT_F64 {
        return Err(ExportError::NonRepresentable {
            what,
            value: value.to_string(),
        });
    }
    Ok(value as f64)
}

fn decimal_to_f64(value: Decimal, what: &'static str) -> Result<f64, ExportError> {
    value.to_f64().ok_or_else(|| ExportError::NonRepresentable {
        what,
        value: value.to_string(),
    })
}
