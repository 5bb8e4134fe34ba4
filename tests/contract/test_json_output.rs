//! Contract test for JSON output shape

use crate::fixtures::{failure, failure_at};
use parity_report::cli::output::format_json;

#[test]
fn test_json_output_fields() {
    let mut first = failure_at("dw", 3, 4);
    first.failure_messages = vec!["boom".to_string()];
    let failures = vec![first, failure("p")];

    let json: serde_json::Value = serde_json::from_str(&format_json(&failures)).unwrap();

    assert_eq!(json["total"], 2);
    assert_eq!(json["failures"][0]["name"], "dw");
    assert_eq!(json["failures"][0]["feature"], "delete");
    assert_eq!(json["failures"][0]["line"], 3);
    assert_eq!(json["failures"][0]["column"], 4);
    assert_eq!(json["failures"][0]["messages"][0], "boom");
    assert!(json["failures"][1].get("line").is_none());
    assert_eq!(json["failures"][1]["feature"], "paste");

    let aggregate = json["aggregate"].as_array().unwrap();
    assert_eq!(aggregate.len(), 2);
    assert_eq!(aggregate[0]["feature"], "delete");
    assert_eq!(aggregate[0]["count"], 1);
}
