// src/presentation.rs
//! Turning query results into text.
//!
//! Every listing is first flattened into a [`Grid`], which the table and
//! delimited writers render. JSON skips the grid and serializes the
//! underlying rows so no typing is lost.

mod delimited;
mod table;

use std::{io::Write, path::Path};

use arqa_domain::{Bucket, GroupKey};
use arqa_infra::persistence::FileWriter;
use arqa_shared_kernel::{InfrastructureError, Result, Tabular, Value};
use serde::Serialize;

use crate::cli::OutputFormat;

pub use delimited::dashboard_csv;

/// Headers plus rows of optional scalar values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<Value>>>,
}

impl Grid {
    /// One row per record, one column per entry of `columns`.
    pub fn from_rows<R: Tabular>(rows: &[R], columns: &[&str]) -> Self {
        Self {
            headers: columns.iter().map(ToString::to_string).collect(),
            rows: rows
                .iter()
                .map(|row| columns.iter().map(|c| row.cell(c).map(|cell| cell.to_value())).collect())
                .collect(),
        }
    }

    /// `group | sum(aggregate) | count`.
    pub fn from_buckets(buckets: &[Bucket], group_field: &str, aggregate_field: &str) -> Self {
        Self {
            headers: vec![group_field.to_string(), format!("sum({aggregate_field})"), "count".to_string()],
            rows: buckets
                .iter()
                .map(|b| {
                    let key = match &b.group_key {
                        GroupKey::Value(value) => Some(value.clone()),
                        GroupKey::Missing => None,
                    };
                    vec![key, Some(Value::Number(b.aggregate_value)), Some(Value::from(b.count as i64))]
                })
                .collect(),
        }
    }

    /// Two-column `field | value` listing.
    pub fn key_values<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            headers: vec!["field".to_string(), "value".to_string()],
            rows: pairs.into_iter().map(|(k, v)| vec![Some(Value::Text(k.into())), Some(v)]).collect(),
        }
    }

    /// Renders as a table or delimited text; `None` for JSON.
    pub fn render(&self, format: OutputFormat) -> Option<String> {
        match format {
            OutputFormat::Table => Some(table::render(self)),
            OutputFormat::Csv | OutputFormat::Tsv => {
                format.separator().map(|sep| delimited::render(self, sep))
            }
            OutputFormat::Json => None,
        }
    }
}

/// Pretty JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(data)?;
    text.push('\n');
    Ok(text)
}

/// Writes `text` to `path` atomically, or to stdout.
pub fn emit(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => FileWriter::atomic_write(path, text.as_bytes())?,
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(text.as_bytes())
                .and_then(|()| out.flush())
                .map_err(|e| InfrastructureError::OutputError {
                    message: "writing to stdout".to_string(),
                    source: Some(Box::new(e)),
                })?;
        }
    }
    Ok(())
}
