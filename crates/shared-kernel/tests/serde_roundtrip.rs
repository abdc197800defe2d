// crates/shared-kernel/tests/serde_roundtrip.rs
use arqa_shared_kernel::{Record, Value};

#[test]
fn record_serializes_as_a_flat_object_in_field_order() {
    let record = Record::new()
        .with("id", "3")
        .with("total", 5000.0)
        .with("paid", true);

    let json = serde_json::to_string(&record).expect("serialize");
    assert_eq!(json, r#"{"id":"3","total":5000.0,"paid":true}"#);

    let back: Record = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, record);
    assert_eq!(back.get("paid"), Some(&Value::Bool(true)));
}
