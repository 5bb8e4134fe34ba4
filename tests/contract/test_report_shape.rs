//! Contract test for the runner's JSON report shape

use parity_report::io::report::parse_report;
use parity_report::services::extract::collect_failures;

#[test]
fn test_runner_fields_are_accepted() {
    // Extra top-level and per-assertion fields written by the runner are ignored
    let text = r#"{
      "numTotalTests": 1,
      "success": false,
      "startTime": 1700000000000,
      "testResults": [{
        "name": "/repo/a.test.ts",
        "status": "failed",
        "message": "",
        "assertionResults": [{
          "ancestorTitles": [],
          "fullName": "ci( changes inside parens",
          "status": "failed",
          "title": "ci( changes inside parens",
          "duration": 3.5,
          "failureMessages": ["AssertionError"],
          "meta": {},
          "location": {"line": 1, "column": 2}
        }]
      }]
    }"#;

    let report = parse_report(text).unwrap();
    let failures = collect_failures(&report);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].line(), 1);
}

#[test]
fn test_partial_location() {
    let report = parse_report(
        r#"{"testResults": [{"assertionResults": [{"status": "failed", "location": {"line": 9}}]}]}"#,
    )
    .unwrap();
    let failures = collect_failures(&report);
    let loc = failures[0].location.unwrap();
    assert_eq!((loc.line, loc.column), (9, 0));
}
