// crates/ports/src/records.rs
use arqa_shared_kernel::{Record, Result};

/// Port for loading a collection of flat records of unknown schema.
pub trait RecordSource: Send + Sync {
    /// Human-readable origin, used in logs and error messages.
    fn describe(&self) -> String;

    fn records(&self) -> Result<Vec<Record>>;
}
