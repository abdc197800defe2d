// crates/domain/src/analytics/sort.rs
use std::cmp::Ordering;

use arqa_shared_kernel::{Cell, Tabular};

use crate::query::SortSpec;

/// Compares two optional cells.
///
/// Text against text collates, number against number compares numerically.
/// Every other pairing (absent field, mixed kinds, booleans, `NaN`) is a tie,
/// which a stable sort turns into "keep input order".
pub fn compare_cells(a: Option<Cell<'_>>, b: Option<Cell<'_>>) -> Ordering {
    match (a, b) {
        (Some(Cell::Text(a)), Some(Cell::Text(b))) => collate(a, b),
        (Some(Cell::Number(a)), Some(Cell::Number(b))) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// Locale-style string ordering.
///
/// Three levels, as a Russian or Kazakh collator ranks them:
/// letters compare case-insensitively with `ё` as a variant of `е`, then
/// `е` sorts before `ё`, and only strings equal up to case are split by
/// case, lowercase first (`"a" < "A" < "b"`).
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| b.cmp(a))
}

fn lowercase(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    lowercase(s).map(|c| if c == 'ё' { 'е' } else { c })
}

/// Stable sort by `spec`.
///
/// Descending reverses each comparison rather than the output, so ties keep
/// their input order in both directions.
pub fn sort_rows<R: Tabular>(rows: Vec<R>, spec: &SortSpec) -> Vec<R> {
    let field = spec.field();
    let order = spec.order();
    stable_sort_by(rows, &mut |a: &R, b: &R| order.apply(compare_cells(a.cell(field), b.cell(field))))
}

/// Stable sort that leaves no adjacent pair out of order.
///
/// `compare_cells` is not transitive across kinds (`"b" = 1 = "a"` but
/// `"a" < "b"`), so a plain merge sort may reorder its own output on a
/// second pass. Input that is already settled comes back untouched;
/// anything else is merge sorted and then settled by insertion, which moves
/// an item left only while it is strictly less than its neighbour. The
/// result is always a permutation of the input and sorting it again is a
/// no-op.
pub(crate) fn stable_sort_by<T, F>(items: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if is_settled(&items, cmp) {
        return items;
    }
    let mut items = merge_sort(items, cmp);
    settle(&mut items, cmp);
    items
}

fn is_settled<T, F>(items: &[T], cmp: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items.windows(2).all(|w| cmp(&w[1], &w[0]) != Ordering::Less)
}

fn settle<T, F>(items: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j], &items[j - 1]) == Ordering::Less {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Top-down merge that takes from the left run unless the right item is
/// strictly less.
fn merge_sort<T, F>(mut items: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, cmp);
    let right = merge_sort(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if cmp(r, l) == Ordering::Less { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
