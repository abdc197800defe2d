// crates/domain/src/model/customer.rs
use arqa_shared_kernel::{Cell, Tabular};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub city: String,
    /// Lifetime value.
    pub ltv: f64,
    pub orders_count: u32,
}

impl Customer {
    pub const ID: &'static str = "id";
    pub const NAME: &'static str = "name";
    pub const EMAIL: &'static str = "email";
    pub const CITY: &'static str = "city";
    pub const LTV: &'static str = "ltv";
    pub const ORDERS_COUNT: &'static str = "ordersCount";

    pub const COLUMNS: &'static [&'static str] =
        &[Self::ID, Self::NAME, Self::EMAIL, Self::CITY, Self::LTV, Self::ORDERS_COUNT];

    pub const SEARCH_FIELDS: &'static [&'static str] = &[Self::NAME, Self::EMAIL, Self::ID];
}

impl Tabular for Customer {
    fn cell(&self, field: &str) -> Option<Cell<'_>> {
        let cell = match field {
            Self::ID => Cell::Text(&self.id),
            Self::NAME => Cell::Text(&self.name),
            Self::EMAIL => Cell::Text(&self.email),
            Self::CITY => Cell::Text(&self.city),
            Self::LTV => Cell::Number(self.ltv),
            Self::ORDERS_COUNT => Cell::Number(f64::from(self.orders_count)),
            _ => return None,
        };
        Some(cell)
    }
}
