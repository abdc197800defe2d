//! # Domain
//!
//! The tabular query engine and the dashboard's domain model.
//!
//! - [`query`]: `Query` and its parts (search, equality filters, sort, grouping)
//! - [`analytics`]: filtering, collation/sorting and bucketing primitives
//! - [`engine`]: [`QueryEngine`], the two public entry points
//! - [`model`]: typed `Order` and `Customer` rows
//! - [`metrics`]: headline dashboard figures
//! - [`period`]: reporting periods for the dashboard

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod engine;
pub mod metrics;
pub mod model;
pub mod period;
pub mod query;

pub use analytics::{Bucket, GroupKey, compare_cells, distinct_values};
pub use engine::{QueryEngine, QueryResult};
pub use metrics::DashboardMetrics;
pub use model::{Customer, Order, OrderItem};
pub use period::Period;
pub use query::{AggregateOp, FieldFilter, GroupSpec, Query, SearchFields, SortOrder, SortSpec};
