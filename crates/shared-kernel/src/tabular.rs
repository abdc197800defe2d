// crates/shared-kernel/src/tabular.rs
use crate::value_objects::{Cell, Record};

/// Read access to the named scalar fields of a row.
///
/// This is the accessor the query engine goes through instead of indexing
/// rows by string at every call site. Typed models map field names onto
/// their struct members; [`Record`] looks the name up in its map.
/// `None` means the field is absent or not a scalar.
pub trait Tabular {
    fn cell(&self, field: &str) -> Option<Cell<'_>>;
}

impl Tabular for Record {
    fn cell(&self, field: &str) -> Option<Cell<'_>> {
        self.get(field).map(|value| value.as_cell())
    }
}

impl<T: Tabular + ?Sized> Tabular for &T {
    fn cell(&self, field: &str) -> Option<Cell<'_>> {
        (**self).cell(field)
    }
}

impl<T: Tabular + ?Sized> Tabular for Box<T> {
    fn cell(&self, field: &str) -> Option<Cell<'_>> {
        (**self).cell(field)
    }
}
