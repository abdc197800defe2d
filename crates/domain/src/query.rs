// crates/domain/src/query.rs
use std::{cmp::Ordering, fmt, str::FromStr};

use arqa_shared_kernel::{DomainError, Value};
use indexmap::IndexMap;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(desc: bool) -> Self {
        if desc { Self::Descending } else { Self::Ascending }
    }
}

/// Which field to sort on, and in which direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    field: String,
    order: SortOrder,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self { field: field.into(), order }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Ascending)
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Descending)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Column-header behaviour: clicking the active column flips the
    /// direction, clicking another column sorts it ascending.
    pub fn toggled(current: Option<&Self>, field: &str) -> Self {
        match current {
            Some(spec) if spec.field == field => Self::new(field, spec.order.flipped()),
            _ => Self::ascending(field),
        }
    }
}

/// Parses `field`, `field:asc` or `field:desc`.
impl FromStr for SortSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidSortSpec { spec: s.to_string() };
        let (field, order) = match s.split_once(':') {
            Some((field, dir)) => {
                let order = match dir.trim().to_ascii_lowercase().as_str() {
                    "asc" => SortOrder::Ascending,
                    "desc" => SortOrder::Descending,
                    _ => return Err(invalid()),
                };
                (field.trim(), order)
            }
            None => (s.trim(), SortOrder::Ascending),
        };
        if field.is_empty() {
            return Err(invalid());
        }
        Ok(Self::new(field, order))
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.order {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        };
        write!(f, "{}:{dir}", self.field)
    }
}

/// Aggregation applied inside each bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum AggregateOp {
    #[default]
    Sum,
}

/// Bucket rows by `field` and aggregate `aggregate_field` per bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec {
    pub field: String,
    pub aggregate_field: String,
    pub op: AggregateOp,
}

impl GroupSpec {
    pub fn sum(field: impl Into<String>, aggregate_field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            aggregate_field: aggregate_field.into(),
            op: AggregateOp::Sum,
        }
    }
}

/// An equality constraint parsed from user input.
///
/// `field=value` compares against text. `field:=literal` takes a JSON
/// literal, so `total:=10000` is a number and `vip:=true` a boolean.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: String,
    pub value: Value,
}

impl FromStr for FieldFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |details: &str| DomainError::InvalidFilter {
            filter: s.to_string(),
            details: details.to_string(),
        };
        let (lhs, rhs) = s.split_once('=').ok_or_else(|| invalid("expected field=value"))?;

        let (field, value) = match lhs.strip_suffix(':') {
            Some(field) => {
                let json: serde_json::Value =
                    serde_json::from_str(rhs).map_err(|e| invalid(&e.to_string()))?;
                let value = Value::from_json(&json)
                    .ok_or_else(|| invalid("literal must be a string, number or boolean"))?;
                (field, value)
            }
            None => (lhs, Value::Text(rhs.to_string())),
        };

        let field = field.trim();
        if field.is_empty() {
            return Err(invalid("field name is empty"));
        }
        Ok(Self { field: field.to_string(), value })
    }
}

/// The string fields a free-text search looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFields(Vec<String>);

impl SearchFields {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single request against a collection of rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Case-insensitive substring looked for in the searchable fields.
    pub search_term: String,
    /// Exact-match constraints. Empty text means "no constraint".
    pub equality_filters: IndexMap<String, Value>,
    pub sort: Option<SortSpec>,
    pub group_by: Option<GroupSpec>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.equality_filters.insert(field.into(), value.into());
        self
    }

    pub fn filters<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = FieldFilter>,
    {
        self.equality_filters
            .extend(filters.into_iter().map(|f| (f.field, f.value)));
        self
    }

    pub fn sort_by(mut self, spec: SortSpec) -> Self {
        self.sort = Some(spec);
        self
    }

    /// Sorts by `spec` unless the query already names a sort.
    pub fn sort_or(mut self, spec: SortSpec) -> Self {
        self.sort.get_or_insert(spec);
        self
    }

    pub fn group_by(mut self, spec: GroupSpec) -> Self {
        self.group_by = Some(spec);
        self
    }

    pub fn is_grouped(&self) -> bool {
        self.group_by.is_some()
    }
}
