// crates/infra/src/records.rs
use std::path::{Path, PathBuf};

use arqa_ports::records::RecordSource;
use arqa_shared_kernel::{ErrorContext, InfraResult, InfrastructureError, Record, Result};
use serde_json::Value as Json;
use tracing::{debug, warn};

use crate::persistence::FileReader;

/// A JSON file holding flat records.
///
/// Accepted shapes are a top-level array of objects, or an object with a
/// single member that is such an array (`{"orders": [...]}`). Members that
/// are not objects are skipped.
#[derive(Debug, Clone)]
pub struct JsonRecordFile {
    path: PathBuf,
}

impl JsonRecordFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rows(&self, doc: Json) -> InfraResult<Vec<Json>> {
        let shape_error = |details: &str| InfrastructureError::UnexpectedShape {
            path: self.path.clone(),
            details: details.to_string(),
        };
        match doc {
            Json::Array(rows) => Ok(rows),
            Json::Object(map) if map.len() == 1 => match map.into_iter().next() {
                Some((_, Json::Array(rows))) => Ok(rows),
                _ => Err(shape_error("the single member is not an array")),
            },
            Json::Object(_) => Err(shape_error("expected an object with exactly one array member")),
            _ => Err(shape_error("expected an array of objects")),
        }
    }
}

impl RecordSource for JsonRecordFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn records(&self) -> Result<Vec<Record>> {
        let doc: Json = FileReader::read_json(&self.path)?;
        let rows = self.rows(doc).context("reading records")?;

        let total = rows.len();
        let records: Vec<Record> = rows.iter().filter_map(Record::from_json).collect();
        if records.len() < total {
            warn!(path = %self.path.display(), skipped = total - records.len(), "skipped non-object rows");
        }
        debug!(path = %self.path.display(), rows = records.len(), "records loaded");
        Ok(records)
    }
}
