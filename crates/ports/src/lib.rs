//! # Ports
//!
//! Interface definitions for the data the analytics layer reads.
//!
//! - [`datasource`]: typed order and customer collections
//! - [`records`]: untyped record collections for ad-hoc queries
//!
//! Use cases depend only on these traits, so the JSON files read by the
//! infrastructure crate can be swapped for any other backing store.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod datasource;
pub mod records;
