//! JSON report loading
//!
//! Reads the report written by the test runner's JSON reporter and parses it
//! into a [`Report`]. A missing file and malformed content are reported as
//! distinct errors so the CLI can map them to different exit codes.

use crate::models::Report;
use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Read and parse a report file.
pub fn load_report<P: AsRef<Path>>(path: P) -> Result<Report> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    let report = parse_report(&text).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    log::debug!(
        "Loaded {} with {} file result(s)",
        path.display(),
        report.test_results.len()
    );

    Ok(report)
}

/// Parse report text that is already in memory.
pub fn parse_report(text: &str) -> serde_json::Result<Report> {
    serde_json::from_str(text)
}
