//! Failed-assertion extraction

use crate::models::{Failure, Report};

const FAILED_STATUS: &str = "failed";

/// Collect every failed assertion, file by file, in report order.
#[must_use]
pub fn collect_failures(report: &Report) -> Vec<Failure> {
    let failures: Vec<Failure> = report
        .test_results
        .iter()
        .flat_map(|file| file.assertion_results.iter())
        .filter(|assertion| assertion.status.as_deref() == Some(FAILED_STATUS))
        .cloned()
        .map(Failure::from)
        .collect();

    log::debug!("Extracted {} failed assertion(s)", failures.len());
    failures
}
