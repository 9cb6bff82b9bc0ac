//! Session state
//!
//! One [`Session`] per running register. It owns the catalog, the cart and
//! the shift ledger; callers get shared references for rendering and go
//! through the methods here for every change.

use chrono::{DateTime, Utc};
use shared::error::{AppError, AppResult};
use shared::models::{DiningTable, MenuItem, MenuItemForm, TableForm};
use shared::order::{CartTotals, CompletedOrder, OrderLine};

use crate::catalog::Catalog;
use crate::core::Config;
use crate::orders::Cart;
use crate::shift::{self, ReportArtifact, ShiftLedger, ShiftSummary};

#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    catalog: Catalog,
    cart: Cart,
    ledger: ShiftLedger,
}

impl Session {
    /// Session over the stock menu and tables
    pub fn new(config: Config) -> Self {
        Self::with_catalog(config, Catalog::seeded())
    }

    pub fn with_catalog(config: Config, catalog: Catalog) -> Self {
        tracing::info!(
            menu_items = catalog.menu_items().len(),
            tables = catalog.tables().len(),
            cart_mode = %config.cart_mode,
            "Session started"
        );
        Self {
            cart: Cart::new(config.cart_mode),
            config,
            catalog,
            ledger: ShiftLedger::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn ledger(&self) -> &ShiftLedger {
        &self.ledger
    }

    // ========================================================================
    // Catalog management
    // ========================================================================

    pub fn add_menu_item(&mut self, form: &MenuItemForm) -> AppResult<MenuItem> {
        self.catalog.add_menu_item(form)
    }

    pub fn edit_menu_item(&mut self, id: &str, form: &MenuItemForm) -> AppResult<MenuItem> {
        self.catalog.edit_menu_item(id, form)
    }

    pub fn delete_menu_item(&mut self, id: &str) -> bool {
        self.catalog.delete_menu_item(id)
    }

    pub fn add_table(&mut self, form: &TableForm) -> AppResult<DiningTable> {
        self.catalog.add_table(form)
    }

    pub fn edit_table(&mut self, id: &str, form: &TableForm) -> AppResult<DiningTable> {
        self.catalog.edit_table(id, form)
    }

    /// Removing the selected table keeps the cart's selection;
    /// [`Session::selected_table`] then resolves to `None`.
    pub fn delete_table(&mut self, id: &str) -> bool {
        self.catalog.delete_table(id)
    }

    pub fn set_table_occupied(&mut self, id: &str, occupied: bool) -> AppResult<()> {
        self.catalog.set_table_occupied(id, occupied)
    }

    // ========================================================================
    // Cart
    // ========================================================================

    /// Select a table that exists in the catalog
    pub fn select_table(&mut self, table_id: &str) -> AppResult<()> {
        if self.catalog.table(table_id).is_none() {
            return Err(AppError::table_not_found(table_id));
        }
        self.cart.select_table(table_id);
        Ok(())
    }

    /// The selected table, if one is selected and still in the catalog
    pub fn selected_table(&self) -> Option<&DiningTable> {
        self.cart.table_id().and_then(|id| self.catalog.table(id))
    }

    /// Add one unit of a catalog item to the cart
    pub fn add_item(&mut self, menu_item_id: &str) -> AppResult<&OrderLine> {
        if self.cart.table_id().is_none() {
            return Err(AppError::table_not_selected());
        }
        let item = self
            .catalog
            .menu_item(menu_item_id)
            .ok_or_else(|| AppError::menu_item_not_found(menu_item_id))?;
        Ok(self.cart.add_item(item)?)
    }

    pub fn set_quantity(&mut self, line_id: &str, quantity: i64) -> AppResult<()> {
        Ok(self.cart.set_quantity(line_id, quantity)?)
    }

    pub fn increment(&mut self, line_id: &str) -> bool {
        self.cart.increment(line_id)
    }

    pub fn decrement(&mut self, line_id: &str) -> bool {
        self.cart.decrement(line_id)
    }

    pub fn remove_item(&mut self, line_id: &str) -> bool {
        self.cart.remove_item(line_id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.compute_totals()
    }

    /// Snapshot the cart into the ledger, then clear it
    ///
    /// The table stays selected. An empty cart is refused and nothing changes.
    pub fn checkout(&mut self) -> AppResult<&CompletedOrder> {
        let snapshot = self.cart.snapshot();
        let order = self.ledger.record_completed_order(snapshot)?;
        self.cart.clear();
        Ok(order)
    }

    // ========================================================================
    // Shift
    // ========================================================================

    pub fn add_expense(&mut self, description: &str, amount: i64) -> AppResult<()> {
        self.ledger.add_expense(description, amount)?;
        Ok(())
    }

    pub fn summary(&self) -> ShiftSummary {
        self.ledger.summarize()
    }

    /// Build the shift workbook, named after today's UTC date
    pub fn export_report(&self) -> AppResult<ReportArtifact> {
        self.export_report_at(Utc::now())
    }

    pub fn export_report_at(&self, now: DateTime<Utc>) -> AppResult<ReportArtifact> {
        shift::export(&self.ledger, self.config.utc_offset(), now).map_err(|e| {
            tracing::error!(error = %e, "Shift report export failed");
            AppError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::error::{ErrorCode, ErrorKind};

    use crate::orders::CartMode;

    fn session() -> Session {
        Session::new(Config::default())
    }

    #[test]
    fn test_new_session_is_seeded_and_idle() {
        let session = session();
        assert_eq!(session.catalog().menu_items().len(), 14);
        assert_eq!(session.catalog().tables().len(), 8);
        assert!(session.selected_table().is_none());
        assert!(session.ledger().orders().is_empty());
    }

    #[test]
    fn test_add_item_requires_table() {
        let mut session = session();
        let err = session.add_item("1").unwrap_err();
        assert_eq!(err.code, ErrorCode::TableNotSelected);
        assert_eq!(err.kind(), ErrorKind::Precondition);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_add_unknown_menu_item() {
        let mut session = session();
        session.select_table("1").unwrap();
        let err = session.add_item("999").unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_select_unknown_table() {
        let mut session = session();
        let err = session.select_table("42").unwrap_err();
        assert_eq!(err.code, ErrorCode::TableNotFound);
        assert!(session.cart().table_id().is_none());
    }

    #[test]
    fn test_selected_table_resolves_label() {
        let mut session = session();
        session.select_table("3").unwrap();
        assert_eq!(session.selected_table().unwrap().number, "T-03");

        assert!(session.delete_table("3"));
        assert_eq!(session.cart().table_id(), Some("3"));
        assert!(session.selected_table().is_none());
    }

    #[test]
    fn test_catalog_price_edit_does_not_touch_cart() {
        let mut session = session();
        session.select_table("1").unwrap();
        session.add_item("1").unwrap();

        session
            .edit_menu_item("1", &MenuItemForm::new("Nasi Goreng Spesial", "30000", "makanan-utama"))
            .unwrap();
        session.add_item("1").unwrap();

        let line = session.cart().line("1").unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.price, 25000);
    }

    #[test]
    fn test_checkout_moves_cart_into_ledger() {
        let mut session = session();
        session.select_table("1").unwrap();
        session.add_item("1").unwrap();
        session.add_item("1").unwrap();
        session.add_item("5").unwrap();

        let order = session.checkout().unwrap();
        assert_eq!(order.total(), Decimal::from(63800));
        assert_eq!(order.items().len(), 2);

        assert!(session.cart().is_empty());
        assert_eq!(session.cart().table_id(), Some("1"));
        assert_eq!(session.ledger().orders().len(), 1);
        assert_eq!(session.summary().total_sales, Decimal::from(63800));
    }

    #[test]
    fn test_checkout_empty_cart_is_refused() {
        let mut session = session();
        session.select_table("1").unwrap();
        let err = session.checkout().unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);
        assert!(session.ledger().orders().is_empty());
    }

    #[test]
    fn test_per_table_mode_from_config() {
        let config = Config {
            cart_mode: CartMode::PerTable,
            ..Config::default()
        };
        let mut session = Session::new(config);
        session.select_table("1").unwrap();
        session.add_item("5").unwrap();
        session.select_table("2").unwrap();
        assert!(session.cart().is_empty());
        session.select_table("1").unwrap();
        assert_eq!(session.cart().lines().len(), 1);
    }

    #[test]
    fn test_export_report_leaves_ledger_intact() {
        let mut session = session();
        session.select_table("1").unwrap();
        session.add_item("5").unwrap();
        session.checkout().unwrap();
        session.add_expense("gas", 25000).unwrap();

        let artifact = session.export_report().unwrap();
        assert!(artifact.file_name.starts_with("laporan-shift-"));
        assert!(artifact.file_name.ends_with(".xlsx"));
        assert_eq!(session.ledger().orders().len(), 1);
        assert_eq!(session.ledger().expenses().len(), 1);
    }
}
