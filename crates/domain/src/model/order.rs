// crates/domain/src/model/order.rs
use arqa_shared_kernel::{Cell, Tabular};
use serde::{Deserialize, Serialize};

/// A line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub sku: String,
    pub name: String,
    pub qty: u32,
    pub price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        f64::from(self.qty) * self.price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub customer_id: String,
    pub city: String,
    pub channel: String,
    pub status: String,
    pub total: f64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Order {
    pub const ID: &'static str = "id";
    pub const DATE: &'static str = "date";
    pub const CUSTOMER_ID: &'static str = "customerId";
    pub const CITY: &'static str = "city";
    pub const CHANNEL: &'static str = "channel";
    pub const STATUS: &'static str = "status";
    pub const TOTAL: &'static str = "total";
    pub const COMMENT: &'static str = "comment";
    pub const ITEM_COUNT: &'static str = "itemCount";

    /// Table columns, in display order.
    pub const COLUMNS: &'static [&'static str] = &[
        Self::ID,
        Self::DATE,
        Self::CUSTOMER_ID,
        Self::CITY,
        Self::CHANNEL,
        Self::STATUS,
        Self::TOTAL,
    ];

    pub const SEARCH_FIELDS: &'static [&'static str] =
        &[Self::ID, Self::CUSTOMER_ID, Self::CITY, Self::CHANNEL, Self::STATUS];
}

impl Tabular for Order {
    fn cell(&self, field: &str) -> Option<Cell<'_>> {
        let cell = match field {
            Self::ID => Cell::Text(&self.id),
            Self::DATE => Cell::Text(&self.date),
            Self::CUSTOMER_ID => Cell::Text(&self.customer_id),
            Self::CITY => Cell::Text(&self.city),
            Self::CHANNEL => Cell::Text(&self.channel),
            Self::STATUS => Cell::Text(&self.status),
            Self::TOTAL => Cell::Number(self.total),
            Self::ITEM_COUNT => Cell::Number(self.items.len() as f64),
            Self::COMMENT => return self.comment.as_deref().map(Cell::Text),
            _ => return None,
        };
        Some(cell)
    }
}
