//! Generated destination and location names.

use crate::constants::{DEFAULT_CLASSROOM_PREFIX, DEFAULT_LOCATION_PREFIX};

/// `{prefix}{n}` for n in `1..=count`, zero padded to `width` digits.
pub fn numbered_names(prefix: &str, count: usize, width: usize) -> Vec<String> {
    (1..=count)
        .map(|n| format!("{prefix}{n:0width$}"))
        .collect()
}

/// `Class_01 .. Class_NN`; padding widens past 99 classes so names sort.
pub fn classroom_names(count: usize) -> Vec<String> {
    classroom_names_with_prefix(DEFAULT_CLASSROOM_PREFIX, count)
}

pub fn classroom_names_with_prefix(prefix: &str, count: usize) -> Vec<String> {
    let width = count.to_string().len().max(2);
    numbered_names(prefix, count, width)
}

/// `Location-1 .. Location-N`
pub fn location_names(count: usize) -> Vec<String> {
    location_names_with_prefix(DEFAULT_LOCATION_PREFIX, count)
}

pub fn location_names_with_prefix(prefix: &str, count: usize) -> Vec<String> {
    numbered_names(prefix, count, 0)
}
