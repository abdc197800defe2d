use arqa_domain::{Bucket, Customer, DashboardMetrics, Order};
use serde::Serialize;

/// A customer together with their orders, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerProfile {
    pub customer: Customer,
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOutput {
    pub metrics: DashboardMetrics,
    /// One bucket per order date, ascending.
    pub revenue_by_date: Vec<Bucket>,
}
