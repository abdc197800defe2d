// crates/domain/src/analytics/aggregate.rs
use std::collections::HashMap;

use arqa_shared_kernel::{Cell, Tabular, Value};
use serde::Serialize;

use super::sort::{compare_cells, stable_sort_by};
use crate::query::{AggregateOp, GroupSpec};

/// The value a bucket was formed on.
///
/// Rows that lack the grouping field still get a bucket of their own, so a
/// group-by never silently drops rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GroupKey {
    Value(Value),
    Missing,
}

impl GroupKey {
    pub fn as_cell(&self) -> Option<Cell<'_>> {
        match self {
            Self::Value(value) => Some(value.as_cell()),
            Self::Missing => None,
        }
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Missing => f.write_str("(none)"),
        }
    }
}

/// One output row of a group-by.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub group_key: GroupKey,
    pub aggregate_value: f64,
    /// Rows that fell into this bucket.
    pub count: usize,
}

impl Bucket {
    fn new(group_key: GroupKey) -> Self {
        Self { group_key, aggregate_value: 0.0, count: 0 }
    }

    fn absorb(&mut self, op: AggregateOp, cell: Option<Cell<'_>>) {
        match op {
            AggregateOp::Sum => {
                self.aggregate_value += cell.and_then(Cell::as_number).unwrap_or(0.0);
            }
        }
        self.count += 1;
    }
}

/// Hashable identity of a grouping value.
///
/// Numbers use SameValueZero semantics: `0.0` and `-0.0` share a bucket, and
/// so do all NaNs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum KeyId<'a> {
    Missing,
    Bool(bool),
    Number(u64),
    Text(&'a str),
}

impl<'a> KeyId<'a> {
    fn of(cell: Option<Cell<'a>>) -> Self {
        match cell {
            None => Self::Missing,
            Some(Cell::Bool(b)) => Self::Bool(b),
            Some(Cell::Text(s)) => Self::Text(s),
            Some(Cell::Number(n)) if n.is_nan() => Self::Number(f64::NAN.to_bits()),
            Some(Cell::Number(n)) if n == 0.0 => Self::Number(0.0f64.to_bits()),
            Some(Cell::Number(n)) => Self::Number(n.to_bits()),
        }
    }
}

/// Groups `rows` by `spec.field`, aggregating `spec.aggregate_field`.
///
/// Buckets come out in ascending key order under [`compare_cells`]; keys
/// that compare equal (mixed kinds, missing) keep first-appearance order.
pub fn bucketize<'a, R, I>(rows: I, spec: &GroupSpec) -> Vec<Bucket>
where
    R: Tabular + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut slots: HashMap<KeyId<'a>, usize> = HashMap::new();
    let mut buckets: Vec<Bucket> = Vec::new();

    for row in rows {
        let key_cell = row.cell(&spec.field);
        let slot = *slots.entry(KeyId::of(key_cell)).or_insert_with(|| {
            let key = key_cell.map_or(GroupKey::Missing, |cell| GroupKey::Value(cell.to_value()));
            buckets.push(Bucket::new(key));
            buckets.len() - 1
        });
        buckets[slot].absorb(spec.op, row.cell(&spec.aggregate_field));
    }

    stable_sort_by(buckets, &mut |a: &Bucket, b: &Bucket| {
        compare_cells(a.group_key.as_cell(), b.group_key.as_cell())
    })
}

/// Distinct values of `field`, in first-appearance order. Rows without the
/// field contribute nothing.
pub fn distinct_values<R: Tabular>(rows: &[R], field: &str) -> Vec<Value> {
    let mut seen = std::collections::HashSet::new();
    rows.iter()
        .filter_map(|row| row.cell(field))
        .filter(|cell| seen.insert(KeyId::of(Some(*cell))))
        .map(Cell::to_value)
        .collect()
}
