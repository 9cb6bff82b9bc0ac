//! Shift ledger
//!
//! Completed orders and cash expenses for one shift. Both lists are append-only;
//! everything reported about the shift is derived on demand by [`ShiftLedger::summarize`].

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::AppResult;
use shared::models::Expense;
use shared::order::{CartSnapshot, CompletedOrder};
use shared::util::now_millis;

use crate::orders::OrderError;
use crate::utils::validation::{MAX_NAME_LEN, validate_expense_amount, validate_required_text};

/// One entry of the best-seller ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestSeller {
    pub name: String,
    pub quantity: i64,
}

/// Derived shift figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftSummary {
    /// Σ order total
    pub total_sales: Decimal,
    /// Σ expense amount
    pub total_expenses: Decimal,
    /// total_sales - total_expenses
    pub cash_variance: Decimal,
    /// Item name → cumulative quantity, highest first
    pub best_sellers: Vec<BestSeller>,
    pub order_count: usize,
}

impl ShiftSummary {
    /// First `n` best sellers
    pub fn top_sellers(&self, n: usize) -> &[BestSeller] {
        &self.best_sellers[..n.min(self.best_sellers.len())]
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShiftLedger {
    orders: Vec<CompletedOrder>,
    expenses: Vec<Expense>,
}

impl ShiftLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[CompletedOrder] {
        &self.orders
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Freeze a cart snapshot into the ledger
    ///
    /// Clearing the cart afterwards is the caller's job.
    pub fn record_completed_order(&mut self, snapshot: CartSnapshot) -> AppResult<&CompletedOrder> {
        if snapshot.is_empty() {
            return Err(OrderError::EmptyOrder.into());
        }

        let order = CompletedOrder::from_snapshot(
            uuid::Uuid::new_v4().to_string(),
            snapshot,
            now_millis(),
        );
        tracing::info!(
            order_id = %order.id(),
            table_id = ?order.table_id(),
            total = %order.total(),
            lines = order.items().len(),
            "Order completed"
        );

        self.orders.push(order);
        let index = self.orders.len() - 1;
        Ok(&self.orders[index])
    }

    /// Record cash paid out of the drawer
    pub fn add_expense(&mut self, description: &str, amount: i64) -> AppResult<&Expense> {
        let description = validate_required_text(description, "description", MAX_NAME_LEN)?;
        let amount = validate_expense_amount(amount)?;

        tracing::info!(description = %description, amount, "Expense recorded");
        self.expenses.push(Expense {
            description,
            amount,
        });
        let index = self.expenses.len() - 1;
        Ok(&self.expenses[index])
    }

    /// Totals, variance and best sellers, computed from the current state
    pub fn summarize(&self) -> ShiftSummary {
        let total_sales: Decimal = self.orders.iter().map(CompletedOrder::total).sum();
        let total_expenses: Decimal = self
            .expenses
            .iter()
            .map(|e| Decimal::from(e.amount))
            .sum();

        ShiftSummary {
            total_sales,
            total_expenses,
            cash_variance: total_sales - total_expenses,
            best_sellers: self.best_sellers(),
            order_count: self.orders.len(),
        }
    }

    fn best_sellers(&self) -> Vec<BestSeller> {
        let mut ranking: Vec<BestSeller> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for line in self.orders.iter().flat_map(|o| o.items()) {
            match index.get(line.name.as_str()) {
                Some(&i) => ranking[i].quantity += i64::from(line.quantity),
                None => {
                    index.insert(line.name.as_str(), ranking.len());
                    ranking.push(BestSeller {
                        name: line.name.clone(),
                        quantity: i64::from(line.quantity),
                    });
                }
            }
        }

        // stable: ties stay in first-seen order
        ranking.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranking
    }
}
