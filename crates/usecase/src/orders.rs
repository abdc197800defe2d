use arqa_domain::{Order, Query, QueryEngine, QueryResult};
use arqa_ports::datasource::{OrderFetchPlan, OrderSource};
use arqa_shared_kernel::Result;
use tracing::debug;

use crate::unavailable;

pub struct BrowseOrders<'a> {
    source: &'a dyn OrderSource,
    engine: QueryEngine,
}

impl<'a> BrowseOrders<'a> {
    pub fn new(source: &'a dyn OrderSource) -> Self {
        Self { source, engine: QueryEngine::for_orders() }
    }

    /// Replaces the default order search fields.
    pub fn with_engine(mut self, engine: QueryEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn run(&self, plan: &OrderFetchPlan, query: &Query) -> Result<QueryResult<Order>> {
        let orders = self.source.orders(plan).map_err(unavailable("orders"))?;
        let result = self.engine.execute(&orders, query);
        debug!(loaded = orders.len(), returned = result.len(), grouped = query.is_grouped(), "orders query");
        Ok(result)
    }
}
