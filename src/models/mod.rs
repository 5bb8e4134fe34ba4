//! Data models for the test report and the failures extracted from it

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level report document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default, deserialize_with = "null_as_default")]
    pub test_results: Vec<FileResult>,
}

/// Results for one test file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub assertion_results: Vec<Assertion>,
}

/// One reported test-case outcome
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assertion {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ancestor_titles: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub failure_messages: Vec<String>,
}

/// Source position of a test case
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "null_as_default")]
    pub line: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub column: u32,
}

/// A failed assertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    pub full_name: Option<String>,
    pub title: String,
    pub ancestor_titles: Vec<String>,
    pub location: Option<Location>,
    pub failure_messages: Vec<String>,
}

impl Failure {
    /// Full name, or ancestor titles and title joined by spaces when it is absent or empty
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.full_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                let mut parts: Vec<&str> =
                    self.ancestor_titles.iter().map(String::as_str).collect();
                parts.push(&self.title);
                parts.join(" ")
            }
        }
    }

    /// Source line, or 0 when the location is unknown
    #[must_use]
    pub fn line(&self) -> u32 {
        self.location.map_or(0, |loc| loc.line)
    }
}

impl From<Assertion> for Failure {
    fn from(assertion: Assertion) -> Self {
        Self {
            full_name: assertion.full_name,
            title: assertion.title,
            ancestor_titles: assertion.ancestor_titles,
            location: assertion.location,
            failure_messages: assertion.failure_messages,
        }
    }
}
