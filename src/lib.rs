//! Vim Parity Report Library
//!
//! This library reads the JSON report produced by the test runner for the Vim
//! parity suite, extracts failed assertions, classifies them into feature
//! buckets and renders them as a summary or as full failure detail.

pub mod cli;
pub mod io;
pub mod models;
pub mod services;

pub use models::{Assertion, Failure, FileResult, Location, Report};
pub use services::classify::{Feature, guess_feature};

use std::path::{Path, PathBuf};
use std::result;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    NotFound(PathBuf),
    Parse { path: PathBuf, message: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::NotFound(path) => write!(f, "Report not found: {}", path.display()),
            Error::Parse { path, message } => {
                write!(f, "Failed to load {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl Error {
    /// Process exit code the CLI reports for this error
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NotFound(_) => 2,
            Error::Io(_) | Error::Parse { .. } => 1,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Load a report and return its failed assertions in report order
///
/// # Arguments
/// * `path` - Path to the JSON report
///
/// # Returns
/// Every assertion whose status is `failed`, or an error if the report is
/// missing or cannot be parsed
pub fn load_failures<P: AsRef<Path>>(path: P) -> Result<Vec<Failure>> {
    let report = io::report::load_report(path)?;
    Ok(services::extract::collect_failures(&report))
}
