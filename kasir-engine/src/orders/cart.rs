//! Cart aggregate
//!
//! Holds the lines being rung up for the selected table. All mutation goes
//! through the methods here; readers only ever get slices.
//!
//! State machine:
//! - `Empty`: no table selected, no lines, adding is refused
//! - `TableSelected`: table chosen, zero or more lines
//!
//! What happens to the lines on a table switch depends on [`CartMode`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::models::MenuItem;
use shared::order::{CartSnapshot, CartTotals, MAX_QUANTITY, OrderLine};

use super::error::OrderError;
use super::money::calculate_totals;

/// How lines behave when the selected table changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CartMode {
    /// One shared cart; lines carry over to the newly selected table
    #[default]
    SingleActive,
    /// One cart per table; switching parks the current lines and restores
    /// whatever the new table had
    PerTable,
}

impl FromStr for CartMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "single-active" => Ok(Self::SingleActive),
            "per-table" | "per_table" => Ok(Self::PerTable),
            other => Err(format!("unknown cart mode: '{other}'")),
        }
    }
}

impl fmt::Display for CartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleActive => f.write_str("single"),
            Self::PerTable => f.write_str("per-table"),
        }
    }
}

/// Cart state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartState {
    Empty,
    TableSelected,
}

/// The active cart
#[derive(Debug, Clone, Default)]
pub struct Cart {
    mode: CartMode,
    table_id: Option<String>,
    lines: Vec<OrderLine>,
    /// Lines of tables not currently selected (per-table mode only)
    parked: HashMap<String, Vec<OrderLine>>,
}

impl Cart {
    pub fn new(mode: CartMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> CartMode {
        self.mode
    }

    pub fn state(&self) -> CartState {
        if self.table_id.is_some() {
            CartState::TableSelected
        } else {
            CartState::Empty
        }
    }

    pub fn table_id(&self) -> Option<&str> {
        self.table_id.as_deref()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn line(&self, line_id: &str) -> Option<&OrderLine> {
        self.lines.iter().find(|l| l.id == line_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines parked under a table that is not selected right now
    pub fn parked_lines(&self, table_id: &str) -> &[OrderLine] {
        self.parked.get(table_id).map(Vec::as_slice).unwrap_or(&[])
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Select a table. Existing lines stay unless the cart is per-table.
    pub fn select_table(&mut self, table_id: &str) {
        if self.table_id.as_deref() == Some(table_id) {
            return;
        }

        if self.mode == CartMode::PerTable {
            let current = std::mem::take(&mut self.lines);
            if let Some(previous) = self.table_id.take() {
                if !current.is_empty() {
                    self.parked.insert(previous, current);
                }
            }
            self.lines = self.parked.remove(table_id).unwrap_or_default();
        }

        tracing::debug!(table_id = %table_id, lines = self.lines.len(), mode = %self.mode, "Table selected");
        self.table_id = Some(table_id.to_string());
    }

    /// Add one unit of a menu item
    ///
    /// Bumps the existing line for that item, otherwise appends a new line with
    /// the item's current name and price.
    pub fn add_item(&mut self, item: &MenuItem) -> Result<&OrderLine, OrderError> {
        if self.table_id.is_none() {
            return Err(OrderError::TableNotSelected);
        }

        let index = match self.lines.iter().position(|l| l.id == item.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                if line.quantity >= MAX_QUANTITY {
                    return Err(OrderError::InvalidQuantity(i64::from(line.quantity) + 1));
                }
                line.quantity += 1;
                index
            }
            None => {
                self.lines.push(OrderLine {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    price: item.price,
                    quantity: 1,
                });
                self.lines.len() - 1
            }
        };

        let line = &self.lines[index];
        tracing::debug!(line_id = %line.id, quantity = line.quantity, "Item added to cart");
        Ok(line)
    }

    /// Set a line's quantity
    ///
    /// Anything outside 1..=MAX_QUANTITY is refused and the line is left as
    /// it was; dropping a line is [`Cart::remove_item`]'s job. Unknown line
    /// ids are ignored.
    pub fn set_quantity(&mut self, line_id: &str, quantity: i64) -> Result<(), OrderError> {
        let quantity = i32::try_from(quantity)
            .ok()
            .filter(|q| (1..=MAX_QUANTITY).contains(q))
            .ok_or(OrderError::InvalidQuantity(quantity))?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.id == line_id) {
            line.quantity = quantity;
            tracing::debug!(line_id = %line_id, quantity, "Line quantity set");
        }
        Ok(())
    }

    /// +1; returns whether the line changed
    pub fn increment(&mut self, line_id: &str) -> bool {
        match self.lines.iter_mut().find(|l| l.id == line_id) {
            Some(line) if line.quantity < MAX_QUANTITY => {
                line.quantity += 1;
                true
            }
            _ => false,
        }
    }

    /// -1; refused at quantity 1, returns whether the line changed
    pub fn decrement(&mut self, line_id: &str) -> bool {
        match self.lines.iter_mut().find(|l| l.id == line_id) {
            Some(line) if line.quantity > 1 => {
                line.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    /// Drop a line; returns whether one was removed
    pub fn remove_item(&mut self, line_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != line_id);
        self.lines.len() != before
    }

    /// Remove every line; the table selection is kept
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    // ========================================================================
    // Derived
    // ========================================================================

    /// Subtotal, tax and total, computed fresh on every call
    pub fn compute_totals(&self) -> CartTotals {
        calculate_totals(&self.lines)
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            table_id: self.table_id.clone(),
            lines: self.lines.clone(),
            totals: self.compute_totals(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::MenuCategory;

    fn nasi_goreng() -> MenuItem {
        MenuItem::new("1", "Nasi Goreng Spesial", 25000, MenuCategory::MakananUtama)
    }

    fn es_teh() -> MenuItem {
        MenuItem::new("5", "Es Teh Manis", 8000, MenuCategory::Minuman)
    }

    fn cart_at(table: &str) -> Cart {
        let mut cart = Cart::new(CartMode::SingleActive);
        cart.select_table(table);
        cart
    }

    #[test]
    fn test_new_cart_is_empty_state() {
        let cart = Cart::new(CartMode::SingleActive);
        assert_eq!(cart.state(), CartState::Empty);
        assert!(cart.table_id().is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_before_select_table_is_refused() {
        let mut cart = Cart::new(CartMode::SingleActive);
        let err = cart.add_item(&nasi_goreng()).unwrap_err();
        assert_eq!(err, OrderError::TableNotSelected);
        assert!(cart.is_empty());
        assert_eq!(cart.state(), CartState::Empty);
    }

    #[test]
    fn test_reference_order() {
        let mut cart = cart_at("T-01");
        cart.add_item(&nasi_goreng()).unwrap();
        cart.add_item(&nasi_goreng()).unwrap();
        cart.add_item(&es_teh()).unwrap();

        assert_eq!(
            cart.lines(),
            &[
                OrderLine {
                    id: "1".to_string(),
                    name: "Nasi Goreng Spesial".to_string(),
                    price: 25000,
                    quantity: 2,
                },
                OrderLine {
                    id: "5".to_string(),
                    name: "Es Teh Manis".to_string(),
                    price: 8000,
                    quantity: 1,
                },
            ]
        );

        let totals = cart.compute_totals();
        assert_eq!(totals.subtotal, Decimal::from(58000));
        assert_eq!(totals.tax, Decimal::from(5800));
        assert_eq!(totals.total, Decimal::from(63800));
    }

    #[test]
    fn test_repeated_adds_count_and_keep_first_price() {
        let mut cart = cart_at("1");
        let mut item = es_teh();
        for n in 1..=7 {
            if n == 4 {
                // catalog edit mid-way
                item.price = 9500;
                item.name = "Es Teh Jumbo".to_string();
            }
            cart.add_item(&item).unwrap();
        }
        let line = cart.line("5").unwrap();
        assert_eq!(line.quantity, 7);
        assert_eq!(line.price, 8000);
        assert_eq!(line.name, "Es Teh Manis");
    }

    #[test]
    fn test_compute_totals_is_idempotent() {
        let mut cart = cart_at("1");
        cart.add_item(&nasi_goreng()).unwrap();
        assert_eq!(cart.compute_totals(), cart.compute_totals());
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = cart_at("1");
        cart.add_item(&es_teh()).unwrap();

        cart.set_quantity("5", 4).unwrap();
        assert_eq!(cart.line("5").unwrap().quantity, 4);

        assert_eq!(cart.set_quantity("5", 0), Err(OrderError::InvalidQuantity(0)));
        assert_eq!(cart.set_quantity("5", -3), Err(OrderError::InvalidQuantity(-3)));
        assert_eq!(
            cart.set_quantity("5", 10_000),
            Err(OrderError::InvalidQuantity(10_000))
        );
        assert_eq!(cart.line("5").unwrap().quantity, 4);

        // unknown line: nothing happens
        cart.set_quantity("missing", 2).unwrap();
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_decrement_refused_at_one() {
        let mut cart = cart_at("1");
        cart.add_item(&es_teh()).unwrap();
        cart.add_item(&es_teh()).unwrap();

        assert!(cart.decrement("5"));
        assert_eq!(cart.line("5").unwrap().quantity, 1);
        assert!(!cart.decrement("5"));
        assert_eq!(cart.line("5").unwrap().quantity, 1);

        assert!(cart.increment("5"));
        assert_eq!(cart.line("5").unwrap().quantity, 2);
        assert!(!cart.increment("missing"));
    }

    #[test]
    fn test_remove_item() {
        let mut cart = cart_at("1");
        cart.add_item(&nasi_goreng()).unwrap();
        cart.add_item(&es_teh()).unwrap();

        assert!(cart.remove_item("1"));
        assert_eq!(cart.lines().len(), 1);

        let before = cart.lines().to_vec();
        assert!(!cart.remove_item("does-not-exist"));
        assert_eq!(cart.lines(), before.as_slice());
    }

    #[test]
    fn test_clear_keeps_table() {
        let mut cart = cart_at("3");
        cart.add_item(&nasi_goreng()).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.table_id(), Some("3"));
        assert_eq!(cart.state(), CartState::TableSelected);
        assert_eq!(cart.compute_totals(), CartTotals::default());
    }

    #[test]
    fn test_single_active_carries_lines_across_tables() {
        let mut cart = cart_at("1");
        cart.add_item(&nasi_goreng()).unwrap();
        cart.select_table("2");
        assert_eq!(cart.table_id(), Some("2"));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_per_table_parks_and_restores() {
        let mut cart = Cart::new(CartMode::PerTable);
        cart.select_table("1");
        cart.add_item(&nasi_goreng()).unwrap();

        cart.select_table("2");
        assert!(cart.is_empty());
        assert_eq!(cart.parked_lines("1").len(), 1);
        cart.add_item(&es_teh()).unwrap();

        cart.select_table("1");
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].id, "1");
        assert!(cart.parked_lines("1").is_empty());
        assert_eq!(cart.parked_lines("2")[0].id, "5");
    }

    #[test]
    fn test_reselecting_same_table_is_noop() {
        let mut cart = Cart::new(CartMode::PerTable);
        cart.select_table("1");
        cart.add_item(&nasi_goreng()).unwrap();
        cart.select_table("1");
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_snapshot_matches_cart() {
        let mut cart = cart_at("4");
        cart.add_item(&es_teh()).unwrap();
        let snapshot = cart.snapshot();
        assert_eq!(snapshot.table_id.as_deref(), Some("4"));
        assert_eq!(snapshot.lines, cart.lines());
        assert_eq!(snapshot.totals, cart.compute_totals());
    }

    #[test]
    fn test_cart_mode_parse() {
        assert_eq!("single".parse::<CartMode>().unwrap(), CartMode::SingleActive);
        assert_eq!("PER-TABLE".parse::<CartMode>().unwrap(), CartMode::PerTable);
        assert!("shared".parse::<CartMode>().is_err());
        assert_eq!(CartMode::PerTable.to_string(), "per-table");
    }
}
