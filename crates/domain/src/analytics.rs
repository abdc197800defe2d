// crates/domain/src/analytics.rs
pub mod aggregate;
pub mod filter;
pub mod sort;

pub use aggregate::{Bucket, GroupKey, bucketize, distinct_values};
pub use filter::RowFilter;
pub use sort::{collate, compare_cells, sort_rows};
