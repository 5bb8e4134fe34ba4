//! Unit tests for text rendering

use crate::fixtures::{failure, failure_at};
use parity_report::Failure;
use parity_report::cli::output::{
    NO_MATCHES, format_aggregate, format_details, format_summary,
};

#[test]
fn test_summary_truncates_to_limit() {
    let failures: Vec<Failure> = ["a", "b", "c", "x", "z"].into_iter().map(failure).collect();

    let out = format_summary(&failures, 2);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, ["Failed cases: 5", "1. a", "2. b", "... (3 more)"]);
}

#[test]
fn test_summary_location_suffix() {
    let failures = vec![failure_at("dw", 12, 3), failure("x")];

    let out = format_summary(&failures, 10);
    assert!(out.contains("1. dw (line 12, col 3)\n"));
    assert!(out.contains("2. x\n"));
    assert!(!out.contains("more"));
}

#[test]
fn test_summary_with_exact_limit_has_no_remainder() {
    let failures = vec![failure("a"), failure("b")];
    assert!(!format_summary(&failures, 2).contains("more"));
}

#[test]
fn test_aggregate_section() {
    let failures = vec![failure("dd"), failure("dw"), failure("p")];

    let out = format_aggregate(&failures);
    assert_eq!(out, "Aggregate by feature:\n- delete: 2\n- paste: 1\n");
}

#[test]
fn test_details_empty_prints_only_no_match_line() {
    assert_eq!(format_details(&[]), format!("{NO_MATCHES}\n"));
}

#[test]
fn test_details_layout() {
    let mut with_messages = failure_at("dw deletes word", 42, 7);
    with_messages.failure_messages = vec!["first".to_string(), "second".to_string()];
    let failures = vec![with_messages, failure("x")];

    let heavy = "=".repeat(60);
    let light = "-".repeat(40);
    let expected = [
        heavy.as_str(),
        "dw deletes word",
        "Location: line 42, column 7",
        light.as_str(),
        "first",
        light.as_str(),
        "second",
        heavy.as_str(),
        "x",
        heavy.as_str(),
        "Matched 2 failure(s).",
    ];

    let out = format_details(&failures);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, expected);
}
