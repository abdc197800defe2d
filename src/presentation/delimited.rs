use std::fmt::Write;

use arqa_domain::{Bucket, GroupKey};
use arqa_shared_kernel::Value;

use super::Grid;

/// Header line, then one line per row. Text is quoted for CSV; numbers
/// and booleans are written bare.
pub fn render(grid: &Grid, sep: char) -> String {
    let mut out = String::new();
    let header: Vec<String> = grid.headers.iter().map(|h| escape_header(h, sep)).collect();
    out.push_str(&header.join(&sep.to_string()));
    out.push('\n');

    for row in &grid.rows {
        let fields: Vec<String> = row.iter().map(|v| field(v.as_ref(), sep)).collect();
        out.push_str(&fields.join(&sep.to_string()));
        out.push('\n');
    }
    out
}

fn field(value: Option<&Value>, sep: char) -> String {
    match value {
        None => String::new(),
        Some(Value::Text(s)) => escape_field(s, sep),
        Some(other) => other.to_string(),
    }
}

/// Headers are quoted only when they would otherwise break the line.
fn escape_header(h: &str, sep: char) -> String {
    if h.contains([sep, '"', '\n']) { escape_field(h, sep) } else { h.to_string() }
}

pub fn escape_field(s: &str, sep: char) -> String {
    if sep == ',' {
        let escaped = s.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}

/// Revenue by day as `date,revenue,orders`.
pub fn dashboard_csv(buckets: &[Bucket]) -> String {
    let mut out = String::from("date,revenue,orders\n");
    for bucket in buckets {
        let date = match &bucket.group_key {
            GroupKey::Value(value) => value.to_string(),
            GroupKey::Missing => String::new(),
        };
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{date},{},{}", bucket.aggregate_value, bucket.count);
    }
    out
}
