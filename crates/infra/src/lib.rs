//! # Infrastructure
//!
//! File-backed adapters for the ports crate.
//!
//! - [`datastore`]: the `orders.json` / `customers.json` data directory
//! - [`records`]: arbitrary JSON record files for ad-hoc queries
//! - [`persistence`]: read and write helpers with consistent errors

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod datastore;
pub mod persistence;
pub mod records;

pub use datastore::JsonDataStore;
pub use records::JsonRecordFile;
