//! # arqa_analytics
//!
//! Command-line front end for the orders and customers analytics engine.
//! The heavy lifting lives in the workspace crates; this crate parses
//! arguments, merges the YAML settings file, runs a use case and renders
//! the result as a table, CSV, TSV or JSON.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
