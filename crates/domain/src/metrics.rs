// crates/domain/src/metrics.rs
use arqa_shared_kernel::{Cell, Tabular};
use serde::Serialize;

use crate::model::Order;

/// Headline figures shown above the dashboard chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub revenue: f64,
    pub orders_count: usize,
    /// Average order value, rounded to a whole amount.
    pub aov: f64,
    /// Mock conversion rate: 5% of the order count, two decimals.
    pub conversion_rate: f64,
}

impl DashboardMetrics {
    pub const CONVERSION_FACTOR: f64 = 0.05;

    /// Summarises `rows`, reading the order amount from `amount_field`.
    /// Rows whose amount is absent or not a number add nothing to revenue
    /// but still count as orders.
    pub fn from_rows<R: Tabular>(rows: &[R], amount_field: &str) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        let revenue: f64 = rows
            .iter()
            .filter_map(|row| row.cell(amount_field).and_then(Cell::as_number))
            .sum();
        let orders_count = rows.len();
        let aov = (revenue / orders_count as f64).round();
        let conversion_rate = (orders_count as f64 * Self::CONVERSION_FACTOR * 100.0).round() / 100.0;

        Self { revenue, orders_count, aov, conversion_rate }
    }

    pub fn from_orders(orders: &[Order]) -> Self {
        Self::from_rows(orders, Order::TOTAL)
    }
}
