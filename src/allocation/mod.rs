//! # Allocation
//!
//! The two balanced-partition pipelines:
//!
//! - [`stratified`] - classroom mode. Every `(category-A, category-B)` stratum
//!   is dealt round-robin across a fixed, ordered list of destination groups,
//!   so per-stratum counts in any two groups differ by at most one.
//! - [`bucketing`] - team mode. A shuffled roster is cut into consecutive
//!   teams of a nominal size, the final remainder is kept whole or absorbed
//!   into the previous team, and teams are dealt round-robin onto locations.
//!
//! Both are pure in-memory computations. Preconditions are checked once when
//! an allocator is constructed; allocation itself cannot fail.

pub mod bucketing;
pub mod destinations;
pub mod stratified;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use bucketing::{bucket, bucket_seeded, plan_bucket_sizes, BucketOptions, FixedSizeBucketer};
pub use destinations::{classroom_names, location_names, numbered_names};
pub use stratified::{allocate, group_by_stratum, Allocation, StratifiedAllocator};

/// Identity of a stratum: records sharing category-A and category-B values.
///
/// Ordering is by category-B, then category-A, which fixes the order strata
/// are dealt in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StratumKey {
    pub category_b: String,
    pub category_a: String,
}

impl StratumKey {
    pub fn new(category_a: &str, category_b: &str) -> Self {
        Self {
            category_b: category_b.to_string(),
            category_a: category_a.to_string(),
        }
    }
}

impl fmt::Display for StratumKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category_b, self.category_a)
    }
}
