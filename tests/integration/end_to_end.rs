use predicates::prelude::*;

use crate::common::{arqa, json_stdout};

#[test]
fn city_filter_sorted_by_total_descending() {
    let json = json_stdout(arqa().args([
        "--format", "json", "orders", "--where", "city=Алматы", "--sort", "total:desc",
    ]));
    let ids: Vec<&str> = json.as_array().unwrap().iter().map(|o| o["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["ORD-1005", "ORD-1008", "ORD-1001", "ORD-1003"]);
}

#[test]
fn orders_default_to_newest_first() {
    let json = json_stdout(arqa().args(["--format", "json", "orders"]));
    let ids: Vec<&str> = json.as_array().unwrap().iter().map(|o| o["id"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        vec!["ORD-1007", "ORD-1008", "ORD-1006", "ORD-1005", "ORD-1004", "ORD-1002", "ORD-1001", "ORD-1003"]
    );
}

#[test]
fn customers_default_to_name_order() {
    let json = json_stdout(arqa().args(["--format", "json", "customers"]));
    let ids: Vec<&str> = json.as_array().unwrap().iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["CUST-01", "CUST-03", "CUST-02", "CUST-04", "CUST-05"]);
}

#[test]
fn typed_filter_matches_numbers_only() {
    let json = json_stdout(arqa().args(["--format", "json", "orders", "--where", "total:=5000"]));
    assert_eq!(json.as_array().unwrap().len(), 1);

    let json = json_stdout(arqa().args(["--format", "json", "orders", "--where", "total=5000"]));
    assert!(json.as_array().unwrap().is_empty());
}

#[test]
fn revenue_grouped_by_city_in_collation_order() {
    let json = json_stdout(arqa().args(["--format", "json", "orders", "--group-by", "city", "--sum", "total"]));
    let buckets: Vec<(String, f64)> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|b| (b["groupKey"].as_str().unwrap().to_string(), b["aggregateValue"].as_f64().unwrap()))
        .collect();
    assert_eq!(
        buckets,
        vec![
            ("Алматы".to_string(), 55000.0),
            ("Астана".to_string(), 27500.0),
            ("Караганда".to_string(), 3000.0),
            ("Шымкент".to_string(), 7500.0),
        ]
    );
}

#[test]
fn customer_search_is_case_insensitive() {
    let json = json_stdout(arqa().args(["--format", "json", "customers", "--search", "АЙГУЛЬ"]));
    let customers = json.as_array().unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0]["id"], "CUST-01");
    assert_eq!(customers[0]["ordersCount"], 3);
}

#[test]
fn customer_profile_lists_newest_orders_first() {
    let json = json_stdout(arqa().args(["--format", "json", "customer", "CUST-01"]));
    assert_eq!(json["customer"]["name"], "Айгуль Серикова");
    let ids: Vec<&str> = json["orders"].as_array().unwrap().iter().map(|o| o["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["ORD-1008", "ORD-1001", "ORD-1003"]);
}

#[test]
fn unknown_customer_exits_with_code_two() {
    arqa()
        .args(["customer", "CUST-99"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("CUST-99"));
}

#[test]
fn dashboard_over_a_fixed_week() {
    let json = json_stdout(arqa().args(["--format", "json", "dashboard", "--period", "7d", "--today", "2024-01-10"]));
    assert_eq!(json["metrics"]["revenue"], 63000.0);
    assert_eq!(json["metrics"]["ordersCount"], 5);
    assert_eq!(json["metrics"]["aov"], 12600.0);
    assert_eq!(json["metrics"]["conversionRate"], 0.25);
    assert_eq!(json["revenueByDate"].as_array().unwrap().len(), 4);
}

#[test]
fn dashboard_export_writes_daily_csv() {
    let dir = tempfile::tempdir().unwrap();
    let export = dir.path().join("revenue.csv");
    arqa()
        .args(["dashboard", "--period", "ytd", "--today", "2024-01-31", "--export"])
        .arg(&export)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&export).unwrap();
    assert_eq!(
        csv,
        "date,revenue,orders\n\
         2024-01-01,15000,2\n\
         2024-01-02,15000,1\n\
         2024-01-03,7500,1\n\
         2024-01-04,22000,1\n\
         2024-01-05,12500,1\n\
         2024-01-06,21000,2\n"
    );
}

#[test]
fn settings_file_supplies_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("arqa.yaml");
    std::fs::write(&settings, "format: json\nperiod: ytd\n").unwrap();

    let json = json_stdout(arqa().arg("--config").arg(&settings).args(["dashboard", "--today", "2024-02-01"]));
    assert_eq!(json["metrics"]["ordersCount"], 8);
}

#[test]
fn ad_hoc_query_over_a_record_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("stock.json");
    std::fs::write(
        &file,
        r#"{"stock": [
            {"sku": "TEA-GRN", "warehouse": "Алматы", "qty": 40},
            {"sku": "COF-ARB", "warehouse": "Астана", "qty": 12},
            {"sku": "TEA-BLK", "warehouse": "Алматы", "qty": 25}
        ]}"#,
    )
    .unwrap();

    let json = json_stdout(arqa().args(["--format", "json", "query"]).arg(&file).args(["--search", "tea", "--sort", "qty"]));
    let skus: Vec<&str> = json.as_array().unwrap().iter().map(|r| r["sku"].as_str().unwrap()).collect();
    assert_eq!(skus, vec!["TEA-BLK", "TEA-GRN"]);

    let json = json_stdout(
        arqa().args(["--format", "json", "query"]).arg(&file).args(["--group-by", "warehouse", "--sum", "qty"]),
    );
    assert_eq!(json[0]["groupKey"], "Алматы");
    assert_eq!(json[0]["aggregateValue"], 65.0);
    assert_eq!(json[0]["count"], 2);
}
