use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::arqa;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_arqa"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"));
}

#[test]
fn lists_orders_as_a_table() {
    arqa()
        .arg("orders")
        .assert()
        .success()
        .stdout(predicate::str::contains("ORD-1001").and(predicate::str::contains("customerId")));
}

#[test]
fn rejects_a_malformed_sort_spec() {
    arqa()
        .args(["orders", "--sort", "total:sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("total:sideways"));
}

#[test]
fn missing_data_directory_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_arqa"))
        .arg("--data-dir")
        .arg(dir.path())
        .arg("orders")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("loading orders"));
}
