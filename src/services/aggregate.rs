//! Per-feature failure counts

use crate::models::Failure;
use crate::services::classify::{Feature, guess_feature};

/// Count failures per feature, largest bucket first.
///
/// Buckets with equal counts keep the order in which their feature first
/// appears in `failures`.
#[must_use]
pub fn aggregate_by_feature(failures: &[Failure]) -> Vec<(Feature, usize)> {
    let mut buckets: Vec<(Feature, usize)> = Vec::new();

    for failure in failures {
        let feature = guess_feature(&failure.display_name());
        match buckets.iter_mut().find(|(f, _)| *f == feature) {
            Some((_, count)) => *count += 1,
            None => buckets.push((feature, 1)),
        }
    }

    buckets.sort_by(|a, b| b.1.cmp(&a.1));
    buckets
}
