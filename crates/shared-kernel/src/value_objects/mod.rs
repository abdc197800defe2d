// crates/shared-kernel/src/value_objects/mod.rs
pub mod record;
pub mod value;

pub use record::Record;
pub use value::{Cell, Value};
