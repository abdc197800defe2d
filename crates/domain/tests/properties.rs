use arqa_domain::{GroupSpec, Query, QueryEngine, SearchFields, SortSpec};
use arqa_shared_kernel::{Record, Value};
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        3 => (0u32..50).prop_map(|n| Some(Value::Number(f64::from(n) * 250.0))),
        2 => prop::sample::select(vec!["Алматы", "алматы", "Шымкент", "Астана", ""])
            .prop_map(|s| Some(Value::from(s))),
        1 => any::<bool>().prop_map(|b| Some(Value::Bool(b))),
        1 => Just(None),
    ]
}

fn rows() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((cell(), cell(), cell()), 0..40).prop_map(|cols| {
        cols.into_iter()
            .enumerate()
            .map(|(i, (city, total, date))| {
                let mut record = Record::new().with("id", i.to_string());
                for (name, value) in [("city", city), ("total", total), ("date", date)] {
                    if let Some(value) = value {
                        record.insert(name, value);
                    }
                }
                record
            })
            .collect()
    })
}

/// Rows whose fields always hold the same kind, so every sort key is totally
/// ordered.
fn typed_rows() -> impl Strategy<Value = Vec<Record>> {
    let city = prop::sample::select(vec!["Алматы", "алматы", "Шымкент", "Астана"]);
    prop::collection::vec((city, 0u32..20, 1u32..5), 0..40).prop_map(|cols| {
        cols.into_iter()
            .enumerate()
            .map(|(i, (city, total, day))| {
                Record::new()
                    .with("id", i.to_string())
                    .with("city", city)
                    .with("total", f64::from(total) * 500.0)
                    .with("date", format!("2024-01-0{day}"))
            })
            .collect()
    })
}

fn query() -> impl Strategy<Value = Query> {
    let term = prop::sample::select(vec!["", "а", "АЛМ", "1", "x"]);
    let sort = prop::option::of((prop::sample::select(vec!["city", "total", "date", "id"]), any::<bool>()));
    let filter = prop::option::of(prop::sample::select(vec!["Алматы", "Шымкент", ""]));
    (term, sort, filter).prop_map(|(term, sort, filter)| {
        let mut query = Query::new().search(term);
        if let Some((field, desc)) = sort {
            query = query.sort_by(if desc { SortSpec::descending(field) } else { SortSpec::ascending(field) });
        }
        if let Some(city) = filter {
            query = query.filter("city", city);
        }
        query
    })
}

fn engine() -> QueryEngine {
    QueryEngine::new(SearchFields::new(["id", "city"]))
}

/// Whether `row` carries `term`, ignoring case, in a searchable text field.
fn mentions(row: &Record, term: &str) -> bool {
    let term = term.to_lowercase();
    ["id", "city"]
        .iter()
        .filter_map(|field| row.get(field).and_then(Value::as_str))
        .any(|text| text.to_lowercase().contains(&term))
}

fn ids(rows: &[Record]) -> Vec<String> {
    rows.iter()
        .map(|r| r.get("id").map(ToString::to_string).unwrap_or_default())
        .collect()
}

proptest! {
    #[test]
    fn result_is_a_subset_no_larger_than_input(rows in rows(), query in query()) {
        let out = engine().filter_and_sort(&rows, &query);
        prop_assert!(out.len() <= rows.len());
        let input_ids = ids(&rows);
        for id in ids(&out) {
            prop_assert!(input_ids.contains(&id));
        }
        if !query.search_term.is_empty() {
            for row in &out {
                prop_assert!(mentions(row, &query.search_term));
            }
        }
    }

    #[test]
    fn filtering_and_sorting_is_idempotent(rows in typed_rows(), query in query()) {
        let engine = engine();
        let once = engine.filter_and_sort(&rows, &query);
        let twice = engine.filter_and_sort(&once, &query);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn resorting_mixed_and_missing_keys_is_idempotent(rows in rows(), query in query()) {
        let engine = engine();
        let once = engine.filter_and_sort(&rows, &query);
        let twice = engine.filter_and_sort(&once, &query);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn unsorted_results_keep_input_order(rows in rows(), query in query()) {
        let query = Query { sort: None, ..query };
        let out = ids(&engine().filter_and_sort(&rows, &query));
        let positions: Vec<usize> = out.iter().filter_map(|id| id.parse().ok()).collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn numeric_sort_is_stable(totals in prop::collection::vec(0u8..4, 0..30), desc in any::<bool>()) {
        let rows: Vec<Record> = totals
            .iter()
            .enumerate()
            .map(|(i, t)| Record::new().with("id", i.to_string()).with("total", f64::from(*t)))
            .collect();
        let spec = if desc { SortSpec::descending("total") } else { SortSpec::ascending("total") };
        let out = engine().filter_and_sort(&rows, &Query::new().sort_by(spec));

        for pair in out.windows(2) {
            let a = pair[0].get("total").and_then(Value::as_number).unwrap_or_default();
            let b = pair[1].get("total").and_then(Value::as_number).unwrap_or_default();
            if a == b {
                let ia: usize = pair[0].get("id").and_then(Value::as_str).and_then(|s| s.parse().ok()).unwrap();
                let ib: usize = pair[1].get("id").and_then(Value::as_str).and_then(|s| s.parse().ok()).unwrap();
                prop_assert!(ia < ib);
            } else if desc {
                prop_assert!(a > b);
            } else {
                prop_assert!(a < b);
            }
        }
    }

    #[test]
    fn bucket_sums_match_the_filtered_rows(rows in rows(), query in query()) {
        let engine = engine();
        let grouped = query.clone().group_by(GroupSpec::sum("date", "total"));
        let buckets = engine.filter_and_group(&rows, &grouped);
        let kept = engine.filter_and_sort(&rows, &query);

        let expected: f64 = kept.iter().filter_map(|r| r.get("total").and_then(Value::as_number)).sum();
        let actual: f64 = buckets.iter().map(|b| b.aggregate_value).sum();
        prop_assert!((expected - actual).abs() < 1e-6);

        let counted: usize = buckets.iter().map(|b| b.count).sum();
        prop_assert_eq!(counted, kept.len());
        prop_assert!(buckets.iter().all(|b| b.count > 0));
    }

    #[test]
    fn bucket_keys_are_distinct(rows in rows()) {
        let buckets = engine().filter_and_group(&rows, &Query::new().group_by(GroupSpec::sum("city", "total")));
        for (i, a) in buckets.iter().enumerate() {
            for b in &buckets[i + 1..] {
                prop_assert_ne!(&a.group_key, &b.group_key);
            }
        }
    }
}

#[test]
fn empty_input_gives_empty_output() {
    let engine = engine();
    let rows: Vec<Record> = Vec::new();
    let query = Query::new().search("x").sort_by(SortSpec::ascending("total"));
    assert!(engine.filter_and_sort(&rows, &query).is_empty());
    assert!(engine.filter_and_group(&rows, &query.group_by(GroupSpec::sum("date", "total"))).is_empty());
}
