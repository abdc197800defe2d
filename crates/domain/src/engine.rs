// crates/domain/src/engine.rs
//! The tabular query engine.
//!
//! Two entry points, both pure: [`QueryEngine::filter_and_sort`] returns the
//! matching rows, [`QueryEngine::filter_and_group`] returns per-key
//! aggregates over them. Inputs are borrowed and never modified, and no state
//! survives between calls. Malformed rows degrade to "no match", "tie" or
//! "contributes zero" instead of producing errors.

use arqa_shared_kernel::Tabular;

use crate::{
    analytics::{Bucket, RowFilter, bucketize, sort_rows},
    model::{Customer, Order},
    query::{Query, SearchFields},
};

/// Output of [`QueryEngine::execute`].
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult<R> {
    Rows(Vec<R>),
    Buckets(Vec<Bucket>),
}

impl<R> QueryResult<R> {
    pub fn len(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            Self::Buckets(buckets) => buckets.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows(&self) -> Option<&[R]> {
        match self {
            Self::Rows(rows) => Some(rows),
            Self::Buckets(_) => None,
        }
    }

    pub fn buckets(&self) -> Option<&[Bucket]> {
        match self {
            Self::Rows(_) => None,
            Self::Buckets(buckets) => Some(buckets),
        }
    }
}

/// Filter, sort and group-by over in-memory rows.
///
/// The engine only carries the list of fields free-text search looks at.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    search_fields: SearchFields,
}

impl QueryEngine {
    pub fn new(search_fields: SearchFields) -> Self {
        Self { search_fields }
    }

    pub fn for_orders() -> Self {
        Self::new(SearchFields::new(Order::SEARCH_FIELDS.iter().copied()))
    }

    pub fn for_customers() -> Self {
        Self::new(SearchFields::new(Customer::SEARCH_FIELDS.iter().copied()))
    }

    pub fn search_fields(&self) -> &SearchFields {
        &self.search_fields
    }

    /// Whether `row` passes the query's search term and equality filters.
    pub fn matches<R: Tabular + ?Sized>(&self, row: &R, query: &Query) -> bool {
        RowFilter::new(query, &self.search_fields).matches(row)
    }

    /// Rows passing the filters, ordered by `query.sort` (stable) or left in
    /// input order when there is no sort. `query.group_by` is ignored.
    pub fn filter_and_sort<R: Tabular + Clone>(&self, records: &[R], query: &Query) -> Vec<R> {
        let filter = RowFilter::new(query, &self.search_fields);
        let kept: Vec<R> = records.iter().filter(|r| filter.matches(*r)).cloned().collect();
        match &query.sort {
            Some(spec) => sort_rows(kept, spec),
            None => kept,
        }
    }

    /// Per-key aggregates over the rows passing the filters, in ascending key
    /// order. `query.sort` is ignored; without `query.group_by` there is
    /// nothing to bucket and the result is empty.
    pub fn filter_and_group<R: Tabular>(&self, records: &[R], query: &Query) -> Vec<Bucket> {
        let Some(spec) = &query.group_by else {
            return Vec::new();
        };
        let filter = RowFilter::new(query, &self.search_fields);
        bucketize(records.iter().filter(|r| filter.matches(*r)), spec)
    }

    /// Runs `filter_and_group` when the query groups, `filter_and_sort`
    /// otherwise.
    pub fn execute<R: Tabular + Clone>(&self, records: &[R], query: &Query) -> QueryResult<R> {
        if query.is_grouped() {
            QueryResult::Buckets(self.filter_and_group(records, query))
        } else {
            QueryResult::Rows(self.filter_and_sort(records, query))
        }
    }
}
