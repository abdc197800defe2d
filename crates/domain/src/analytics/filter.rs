// crates/domain/src/analytics/filter.rs
use arqa_shared_kernel::{Tabular, Value};

use crate::query::{Query, SearchFields};

/// Row predicate built once per query.
///
/// A row passes when the search term is empty or appears (ignoring case) in
/// at least one searchable text field, AND every equality filter matches
/// exactly. Missing fields never match; nothing is coerced.
pub struct RowFilter<'q> {
    needle: Option<String>,
    search_fields: &'q SearchFields,
    constraints: Vec<(&'q str, &'q Value)>,
}

impl<'q> RowFilter<'q> {
    pub fn new(query: &'q Query, search_fields: &'q SearchFields) -> Self {
        let needle = (!query.search_term.is_empty()).then(|| query.search_term.to_lowercase());
        let constraints = query
            .equality_filters
            .iter()
            .filter(|(_, value)| !is_blank(value))
            .map(|(field, value)| (field.as_str(), value))
            .collect();
        Self { needle, search_fields, constraints }
    }

    pub fn matches<R: Tabular + ?Sized>(&self, row: &R) -> bool {
        self.matches_search(row) && self.matches_constraints(row)
    }

    fn matches_search<R: Tabular + ?Sized>(&self, row: &R) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        self.search_fields.iter().any(|field| {
            row.cell(field)
                .and_then(|cell| cell.as_str())
                .is_some_and(|text| text.to_lowercase().contains(needle.as_str()))
        })
    }

    fn matches_constraints<R: Tabular + ?Sized>(&self, row: &R) -> bool {
        self.constraints
            .iter()
            .all(|(field, expected)| row.cell(field) == Some(expected.as_cell()))
    }
}

/// An empty text filter is an unset filter chip.
fn is_blank(value: &Value) -> bool {
    matches!(value, Value::Text(s) if s.is_empty())
}
