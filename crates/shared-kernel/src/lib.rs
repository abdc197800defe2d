// crates/shared-kernel/src/lib.rs
//! # Shared Kernel
//!
//! Types shared by every layer of the workspace:
//!
//! - [`value_objects`]: scalar field values, borrowed cells and ordered records
//! - [`tabular`]: the field-accessor trait the query engine reads through
//! - [`error`]: the layered error hierarchy and [`ErrorContext`]

pub use error::{
    AnalyticsError, ApplicationError, ApplicationResult, DomainError, DomainResult, ErrorContext,
    InfraResult, InfrastructureError, PresentationError, PresentationResult, Result,
};

pub mod error;
pub mod tabular;
pub mod value_objects;

pub use tabular::Tabular;
pub use value_objects::{Cell, Record, Value};
