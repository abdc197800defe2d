//! # Use Cases
//!
//! Page-level orchestration on top of the query engine.
//!
//! Each use case borrows its data sources as port trait objects, loads the
//! rows, and hands them to [`arqa_domain::QueryEngine`]:
//!
//! - [`orders`]: the orders list
//! - [`customers`]: the customers list and a single customer's profile
//! - [`dashboard`]: headline metrics and revenue by day
//! - [`records`]: ad-hoc queries over any record source
//! - [`dto`]: outputs crossing the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod customers;
pub mod dashboard;
pub mod dto;
pub mod orders;
pub mod records;

pub use customers::{BrowseCustomers, CustomerDetail};
pub use dashboard::DashboardReport;
pub use dto::{CustomerProfile, DashboardOutput};
pub use orders::BrowseOrders;
pub use records::QueryRecords;

use arqa_shared_kernel::{AnalyticsError, ApplicationError};

/// Wraps a source failure as "dataset unavailable".
pub(crate) fn unavailable(dataset: &str) -> impl FnOnce(AnalyticsError) -> AnalyticsError + '_ {
    move |err| {
        ApplicationError::DataUnavailable {
            dataset: dataset.to_string(),
            reason: err.to_string(),
            source: Some(Box::new(err)),
        }
        .into()
    }
}
