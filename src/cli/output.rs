//! Output formatting for CLI

use crate::models::Failure;
use crate::services::aggregate::aggregate_by_feature;
use crate::services::classify::{Feature, guess_feature};
use serde::Serialize;
use std::fmt::Write;

const DETAIL_RULE_WIDTH: usize = 60;
const MESSAGE_RULE_WIDTH: usize = 40;

/// Printed when the report contains no failed assertions at all
pub const NO_FAILURES: &str = "No failures found in report.";

/// Printed by detail mode when the filters removed every failure
pub const NO_MATCHES: &str = "No failures matched the given filters.";

/// Format the numbered list of the first `limit` failures
#[must_use]
pub fn format_summary(failures: &[Failure], limit: usize) -> String {
    let total = failures.len();
    let mut out = String::new();

    let _ = writeln!(out, "Failed cases: {total}");
    for (idx, failure) in failures.iter().take(limit).enumerate() {
        let loc = failure
            .location
            .map(|loc| format!(" (line {}, col {})", loc.line, loc.column))
            .unwrap_or_default();
        let _ = writeln!(out, "{}. {}{loc}", idx + 1, failure.display_name());
    }
    if total > limit {
        let _ = writeln!(out, "... ({} more)", total - limit);
    }

    out
}

/// Format the per-feature histogram
#[must_use]
pub fn format_aggregate(failures: &[Failure]) -> String {
    let mut out = String::from("Aggregate by feature:\n");
    for (feature, count) in aggregate_by_feature(failures) {
        let _ = writeln!(out, "- {feature}: {count}");
    }
    out
}

/// Format every failure with its location and failure messages
#[must_use]
pub fn format_details(failures: &[Failure]) -> String {
    if failures.is_empty() {
        return format!("{NO_MATCHES}\n");
    }

    let heavy = "=".repeat(DETAIL_RULE_WIDTH);
    let light = "-".repeat(MESSAGE_RULE_WIDTH);
    let mut out = String::new();

    for failure in failures {
        let _ = writeln!(out, "{heavy}");
        let _ = writeln!(out, "{}", failure.display_name());
        if let Some(loc) = failure.location {
            let _ = writeln!(out, "Location: line {}, column {}", loc.line, loc.column);
        }
        for message in &failure.failure_messages {
            let _ = writeln!(out, "{light}");
            let _ = writeln!(out, "{message}");
        }
    }
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "Matched {} failure(s).", failures.len());

    out
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    name: String,
    feature: Feature,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<u32>,
    messages: &'a [String],
}

#[derive(Serialize)]
struct JsonBucket {
    feature: Feature,
    count: usize,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    total: usize,
    failures: Vec<JsonFailure<'a>>,
    aggregate: Vec<JsonBucket>,
}

/// Format failures and the feature histogram as pretty-printed JSON
#[must_use]
pub fn format_json(failures: &[Failure]) -> String {
    let output = JsonOutput {
        total: failures.len(),
        failures: failures
            .iter()
            .map(|failure| {
                let name = failure.display_name();
                JsonFailure {
                    feature: guess_feature(&name),
                    name,
                    line: failure.location.map(|loc| loc.line),
                    column: failure.location.map(|loc| loc.column),
                    messages: &failure.failure_messages,
                }
            })
            .collect(),
        aggregate: aggregate_by_feature(failures)
            .into_iter()
            .map(|(feature, count)| JsonBucket { feature, count })
            .collect(),
    };

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}
