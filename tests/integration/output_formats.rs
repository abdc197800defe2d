use predicates::prelude::*;

use crate::common::arqa;

#[test]
fn csv_quotes_text_and_leaves_numbers_bare() {
    arqa()
        .args(["--format", "csv", "orders", "--where", "id=ORD-1004"])
        .assert()
        .success()
        .stdout(
            "id,date,customerId,city,channel,status,total\n\
             \"ORD-1004\",\"2024-01-03\",\"CUST-03\",\"Шымкент\",\"Instagram\",\"Новый\",7500\n",
        );
}

#[test]
fn tsv_uses_tabs() {
    arqa()
        .args(["--format", "tsv", "customers", "--cities"])
        .assert()
        .success()
        .stdout("city\nАлматы\nАстана\nШымкент\nКараганда\n");
}

#[test]
fn grouped_csv_names_the_aggregate() {
    arqa()
        .args(["--format", "csv", "orders", "--group-by", "channel", "--sum", "total"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("channel,sum(total),count\n\"Instagram\",25500,2\n"));
}

#[test]
fn output_flag_writes_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("customers.json");
    arqa().args(["--format", "json", "customers", "--output"]).arg(&out).assert().success();

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 5);
}

#[test]
fn dashboard_table_shows_metrics() {
    arqa()
        .args(["dashboard", "--period", "30d", "--today", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("revenue").and(predicate::str::contains("93000")));
}
