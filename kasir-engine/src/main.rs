//! Writes the current shift report to `KASIR_REPORT_DIR`.
//!
//! The register keeps its ledger in memory, so this binary rings up a short
//! demo shift on the stock menu before exporting.

use anyhow::Context;
use kasir_engine::{AppError, Session, format_rupiah, setup_environment};

fn main() -> anyhow::Result<()> {
    let config = setup_environment();
    let report_dir = config.report_dir.clone();
    let top_sellers = config.top_sellers;

    let mut session = Session::new(config);

    session.select_table("1")?;
    session.add_item("1")?;
    session.add_item("1")?;
    session.add_item("5")?;
    session.checkout()?;

    session.select_table("3")?;
    session.add_item("4")?;
    session.checkout()?;

    session.add_expense("gas", 25000)?;

    let summary = session.summary();
    tracing::info!(
        orders = summary.order_count,
        total_sales = %format_rupiah(summary.total_sales),
        total_expenses = %format_rupiah(summary.total_expenses),
        cash_variance = %format_rupiah(summary.cash_variance),
        "Shift summary"
    );
    for (rank, seller) in summary.top_sellers(top_sellers).iter().enumerate() {
        tracing::info!(rank = rank + 1, name = %seller.name, quantity = seller.quantity, "Best seller");
    }

    let artifact = session.export_report()?;
    let path = artifact
        .save_to(&report_dir)
        .map_err(AppError::from)
        .with_context(|| format!("saving shift report into {report_dir}"))?;

    println!("{}", path.display());
    Ok(())
}
