// crates/ports/src/datasource.rs
use arqa_domain::{Customer, Order};
use arqa_shared_kernel::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Server-side narrowing applied before rows reach the query engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFetchPlan {
    /// Only orders dated on or after this day.
    pub since: Option<NaiveDate>,
    pub city: Option<String>,
    pub channel: Option<String>,
}

impl OrderFetchPlan {
    pub fn since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Whether `order` is inside the plan. Dates are ISO strings, so the
    /// lower bound compares lexically.
    pub fn matches(&self, order: &Order) -> bool {
        let since = self.since.map(|date| date.format("%Y-%m-%d").to_string());
        let after_start = since.as_deref().is_none_or(|since| order.date.as_str() >= since);
        let city = self.city.as_deref().is_none_or(|city| order.city == city);
        let channel = self.channel.as_deref().is_none_or(|channel| order.channel == channel);
        after_start && city && channel
    }
}

/// Port for loading orders.
pub trait OrderSource: Send + Sync {
    fn orders(&self, plan: &OrderFetchPlan) -> Result<Vec<Order>>;
}

/// Port for loading customers.
pub trait CustomerSource: Send + Sync {
    fn customers(&self) -> Result<Vec<Customer>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(date: &str, city: &str, channel: &str) -> Order {
        Order {
            id: "1".into(),
            date: date.into(),
            customer_id: "c1".into(),
            city: city.into(),
            channel: channel.into(),
            status: "Новый".into(),
            total: 1.0,
            items: Vec::new(),
            comment: None,
        }
    }

    #[test]
    fn default_plan_takes_everything() {
        assert!(OrderFetchPlan::default().matches(&order("2020-01-01", "Алматы", "Web")));
    }

    #[test]
    fn since_is_inclusive() {
        let plan = OrderFetchPlan::default().since(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert!(!plan.matches(&order("2024-01-01", "Алматы", "Web")));
        assert!(plan.matches(&order("2024-01-02", "Алматы", "Web")));
        assert!(plan.matches(&order("2024-02-01", "Алматы", "Web")));
    }

    #[test]
    fn city_and_channel_must_both_match() {
        let plan = OrderFetchPlan::default().city("Алматы").channel("Kaspi");
        assert!(plan.matches(&order("2024-01-01", "Алматы", "Kaspi")));
        assert!(!plan.matches(&order("2024-01-01", "Алматы", "Web")));
        assert!(!plan.matches(&order("2024-01-01", "Шымкент", "Kaspi")));
    }
}
