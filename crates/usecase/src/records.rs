use arqa_domain::{Query, QueryEngine, QueryResult};
use arqa_ports::records::RecordSource;
use arqa_shared_kernel::{Record, Result};
use tracing::debug;

use crate::unavailable;

/// Ad-hoc query over records of any schema.
pub struct QueryRecords<'a> {
    source: &'a dyn RecordSource,
    engine: QueryEngine,
}

impl<'a> QueryRecords<'a> {
    /// `engine` decides which fields free-text search looks at.
    pub fn new(source: &'a dyn RecordSource, engine: QueryEngine) -> Self {
        Self { source, engine }
    }

    pub fn run(&self, query: &Query) -> Result<QueryResult<Record>> {
        let origin = self.source.describe();
        let records = self.source.records().map_err(unavailable(&origin))?;
        let result = self.engine.execute(&records, query);
        debug!(origin = %origin, loaded = records.len(), returned = result.len(), "record query");
        Ok(result)
    }
}
