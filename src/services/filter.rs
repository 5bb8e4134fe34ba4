//! Keyword and feature filtering, and ordering of failures

use crate::models::Failure;
use crate::services::classify::{Feature, guess_feature};
use std::str::FromStr;

/// Sort failures by a specified field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Name,
    Feature,
    Line,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortBy::Name),
            "feature" => Ok(SortBy::Feature),
            "line" => Ok(SortBy::Line),
            _ => Err(format!(
                "Invalid sort: {s}. Use 'name', 'feature' or 'line'"
            )),
        }
    }
}

/// Keep failures whose display name contains every keyword, ignoring case
#[must_use]
pub fn filter_by_keywords(failures: Vec<Failure>, keywords: &[String]) -> Vec<Failure> {
    if keywords.is_empty() {
        return failures;
    }

    let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    failures
        .into_iter()
        .filter(|failure| {
            let name = failure.display_name().to_lowercase();
            lowered.iter().all(|k| name.contains(k.as_str()))
        })
        .collect()
}

/// Keep failures classified under `feature`, compared case-insensitively
#[must_use]
pub fn filter_by_feature(failures: Vec<Failure>, feature: Option<&str>) -> Vec<Failure> {
    let Some(feature) = feature.filter(|f| !f.is_empty()) else {
        return failures;
    };

    if Feature::from_str(feature).is_err() {
        log::warn!("Unknown feature '{feature}', no failures will match");
    }

    failures
        .into_iter()
        .filter(|failure| {
            guess_feature(&failure.display_name())
                .as_str()
                .eq_ignore_ascii_case(feature)
        })
        .collect()
}

/// Stable sort; equal keys keep their extraction order
#[must_use]
pub fn sort_failures(mut failures: Vec<Failure>, sort_by: SortBy) -> Vec<Failure> {
    match sort_by {
        SortBy::Name => failures.sort_by_cached_key(Failure::display_name),
        SortBy::Feature => {
            failures.sort_by_cached_key(|f| guess_feature(&f.display_name()).as_str());
        }
        SortBy::Line => failures.sort_by_key(Failure::line),
    }

    failures
}
