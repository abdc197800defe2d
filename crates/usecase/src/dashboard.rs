use arqa_domain::{DashboardMetrics, GroupSpec, Order, Query, QueryEngine};
use arqa_ports::datasource::{OrderFetchPlan, OrderSource};
use arqa_shared_kernel::Result;
use tracing::debug;

use crate::{dto::DashboardOutput, unavailable};

/// Headline metrics and the revenue chart for the orders inside a plan.
pub struct DashboardReport<'a> {
    source: &'a dyn OrderSource,
    engine: QueryEngine,
}

impl<'a> DashboardReport<'a> {
    pub fn new(source: &'a dyn OrderSource) -> Self {
        Self { source, engine: QueryEngine::for_orders() }
    }

    pub fn run(&self, plan: &OrderFetchPlan) -> Result<DashboardOutput> {
        let orders = self.source.orders(plan).map_err(unavailable("orders"))?;
        let metrics = DashboardMetrics::from_orders(&orders);
        let by_date = Query::new().group_by(GroupSpec::sum(Order::DATE, Order::TOTAL));
        let revenue_by_date = self.engine.filter_and_group(&orders, &by_date);

        debug!(orders = orders.len(), days = revenue_by_date.len(), revenue = metrics.revenue, "dashboard");
        Ok(DashboardOutput { metrics, revenue_by_date })
    }
}
