use arqa_domain::{Customer, Order, Query, QueryEngine, QueryResult, distinct_values};
use arqa_ports::datasource::{CustomerSource, OrderFetchPlan, OrderSource};
use arqa_shared_kernel::Result;
use tracing::debug;

use crate::{dto::CustomerProfile, unavailable};

pub struct BrowseCustomers<'a> {
    source: &'a dyn CustomerSource,
    engine: QueryEngine,
}

impl<'a> BrowseCustomers<'a> {
    pub fn new(source: &'a dyn CustomerSource) -> Self {
        Self { source, engine: QueryEngine::for_customers() }
    }

    pub fn with_engine(mut self, engine: QueryEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn run(&self, query: &Query) -> Result<QueryResult<Customer>> {
        let customers = self.load()?;
        let result = self.engine.execute(&customers, query);
        debug!(loaded = customers.len(), returned = result.len(), "customers query");
        Ok(result)
    }

    /// Cities offered as filter chips, in first-appearance order.
    pub fn cities(&self) -> Result<Vec<String>> {
        let customers = self.load()?;
        Ok(distinct_values(&customers, Customer::CITY)
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect())
    }

    fn load(&self) -> Result<Vec<Customer>> {
        self.source.customers().map_err(unavailable("customers"))
    }
}

/// One customer's card: profile plus order history.
pub struct CustomerDetail<'a> {
    customers: &'a dyn CustomerSource,
    orders: &'a dyn OrderSource,
}

impl<'a> CustomerDetail<'a> {
    pub fn new(customers: &'a dyn CustomerSource, orders: &'a dyn OrderSource) -> Self {
        Self { customers, orders }
    }

    /// `None` when no customer has `id`.
    pub fn run(&self, id: &str) -> Result<Option<CustomerProfile>> {
        let customers = self.customers.customers().map_err(unavailable("customers"))?;
        let Some(customer) = customers.into_iter().find(|c| c.id == id) else {
            debug!(id, "customer not found");
            return Ok(None);
        };

        let mut orders: Vec<Order> = self
            .orders
            .orders(&OrderFetchPlan::default())
            .map_err(unavailable("orders"))?
            .into_iter()
            .filter(|o| o.customer_id == id)
            .collect();
        // ISO dates sort lexically; same-day orders keep file order.
        orders.sort_by(|a, b| b.date.cmp(&a.date));

        debug!(id, orders = orders.len(), "customer profile");
        Ok(Some(CustomerProfile { customer, orders }))
    }
}
