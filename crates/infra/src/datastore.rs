// crates/infra/src/datastore.rs
use std::path::{Path, PathBuf};

use arqa_domain::{Customer, Order};
use arqa_ports::datasource::{CustomerSource, OrderFetchPlan, OrderSource};
use arqa_shared_kernel::{ErrorContext, Result};
use serde::Deserialize;
use tracing::debug;

use crate::persistence::FileReader;

pub const ORDERS_FILE: &str = "orders.json";
pub const CUSTOMERS_FILE: &str = "customers.json";

#[derive(Deserialize)]
struct OrdersDocument {
    orders: Vec<Order>,
}

#[derive(Deserialize)]
struct CustomersDocument {
    customers: Vec<Customer>,
}

/// A directory holding `orders.json` and `customers.json`.
#[derive(Debug, Clone)]
pub struct JsonDataStore {
    dir: PathBuf,
}

impl JsonDataStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn orders_path(&self) -> PathBuf {
        self.dir.join(ORDERS_FILE)
    }

    pub fn customers_path(&self) -> PathBuf {
        self.dir.join(CUSTOMERS_FILE)
    }
}

impl OrderSource for JsonDataStore {
    fn orders(&self, plan: &OrderFetchPlan) -> Result<Vec<Order>> {
        let path = self.orders_path();
        let doc: OrdersDocument =
            FileReader::read_json(&path).with_context(|| format!("loading orders from {}", path.display()))?;
        let loaded = doc.orders.len();
        let orders: Vec<Order> = doc.orders.into_iter().filter(|o| plan.matches(o)).collect();
        debug!(path = %path.display(), loaded, kept = orders.len(), "orders loaded");
        Ok(orders)
    }
}

impl CustomerSource for JsonDataStore {
    fn customers(&self) -> Result<Vec<Customer>> {
        let path = self.customers_path();
        let doc: CustomersDocument =
            FileReader::read_json(&path).with_context(|| format!("loading customers from {}", path.display()))?;
        debug!(path = %path.display(), loaded = doc.customers.len(), "customers loaded");
        Ok(doc.customers)
    }
}
