//! # Fixed-Size Bucketer
//!
//! Team mode. The roster is shuffled, then cut into consecutive teams of
//! `target_size`. The final remainder is handled specially:
//!
//! - a remainder of `target_size` or `target_size - 1` becomes the last team
//! - anything smaller is appended to the previous team, so only the last team
//!   may exceed `target_size`
//!
//! Teams are named `{prefix}{n}` from 1 and dealt round-robin onto the
//! location list by creation order. Branch diversity inside a team comes
//! only from the shuffle.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use super::destinations::location_names;
use crate::constants::{
    DEFAULT_LOCATION_COUNT, DEFAULT_TEAM_NAME_PREFIX, DEFAULT_TEAM_SIZE, MIN_TEAM_SIZE,
};
use crate::error::Result;
use crate::logging::log_allocation_operation;
use crate::models::{Record, Team};
use crate::validation::{validate_locations, validate_team_name_prefix, validate_team_size};

/// Team-mode options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketOptions {
    pub target_size: usize,
    pub locations: Vec<String>,
    pub team_name_prefix: String,
}

impl Default for BucketOptions {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TEAM_SIZE,
            locations: location_names(DEFAULT_LOCATION_COUNT),
            team_name_prefix: DEFAULT_TEAM_NAME_PREFIX.to_string(),
        }
    }
}

impl BucketOptions {
    pub fn new(
        target_size: usize,
        locations: Vec<String>,
        team_name_prefix: impl Into<String>,
    ) -> Self {
        Self {
            target_size,
            locations,
            team_name_prefix: team_name_prefix.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_team_size(self.target_size)?;
        validate_locations(&self.locations)?;
        validate_team_name_prefix(&self.team_name_prefix)
    }
}

/// Sizes of the teams cut from a roster of `total`, in creation order.
///
/// Independent of the shuffle: the sizes depend only on the roster size.
pub fn plan_bucket_sizes(total: usize, target_size: usize) -> Vec<usize> {
    let mut sizes = Vec::with_capacity(total / target_size.max(1) + 1);
    let mut remaining = total;

    while remaining > 0 {
        if remaining == target_size || remaining + 1 == target_size {
            sizes.push(remaining);
            break;
        }

        if remaining + 1 < target_size {
            match sizes.last_mut() {
                Some(last) => *last += remaining,
                None => sizes.push(remaining),
            }
            break;
        }

        sizes.push(target_size);
        remaining -= target_size;
    }

    sizes
}

/// Cuts a shuffled roster into teams and places them on locations.
#[derive(Debug, Clone)]
pub struct FixedSizeBucketer {
    options: BucketOptions,
}

impl FixedSizeBucketer {
    /// Create a bucketer; rejects unsupported team sizes, empty or duplicate
    /// location lists and blank prefixes.
    pub fn new(options: BucketOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &BucketOptions {
        &self.options
    }

    /// Shuffle `records` with `rng` and bucket them.
    pub fn bucket<R: Rng + ?Sized>(&self, records: &[Record], rng: &mut R) -> Vec<Team> {
        let mut shuffled = records.to_vec();
        shuffled.shuffle(rng);
        self.bucket_in_order(shuffled)
    }

    /// Bucket with a `ChaCha8Rng` seeded from `seed`, or from OS entropy
    /// when no seed is given.
    pub fn bucket_seeded(&self, records: &[Record], seed: Option<u64>) -> Vec<Team> {
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        self.bucket(records, &mut rng)
    }

    fn bucket_in_order(&self, shuffled: Vec<Record>) -> Vec<Team> {
        let total = shuffled.len();
        let sizes = plan_bucket_sizes(total, self.options.target_size);

        if total > 0 && total < MIN_TEAM_SIZE {
            warn!(
                records = total,
                min_team_size = MIN_TEAM_SIZE,
                "Roster too small for a full team, emitting a single undersized team"
            );
        }

        let mut members = shuffled.into_iter();
        let teams: Vec<Team> = sizes
            .iter()
            .enumerate()
            .map(|(index, &size)| {
                let team = Team {
                    name: format!("{}{}", self.options.team_name_prefix, index + 1),
                    members: members.by_ref().take(size).collect(),
                    location: self.options.locations[index % self.options.locations.len()]
                        .clone(),
                };
                debug!(
                    team = %team.name,
                    size = team.len(),
                    location = %team.location,
                    branches = team.category_b_diversity(),
                    "Formed team"
                );
                team
            })
            .collect();

        info!(
            records = total,
            teams = teams.len(),
            locations = self.options.locations.len(),
            target_size = self.options.target_size,
            "Team bucketing completed"
        );
        log_allocation_operation(
            "fixed_size_bucket",
            total,
            teams.len(),
            "completed",
            None,
        );

        teams
    }
}

/// Shuffle with `rng`, then bucket `records` per `options`.
pub fn bucket<R: Rng + ?Sized>(
    records: &[Record],
    options: &BucketOptions,
    rng: &mut R,
) -> Result<Vec<Team>> {
    let bucketer = FixedSizeBucketer::new(options.clone())?;
    Ok(bucketer.bucket(records, rng))
}

/// [`bucket`] with a seedable `ChaCha8Rng`.
pub fn bucket_seeded(
    records: &[Record],
    options: &BucketOptions,
    seed: Option<u64>,
) -> Result<Vec<Team>> {
    let bucketer = FixedSizeBucketer::new(options.clone())?;
    Ok(bucketer.bucket_seeded(records, seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CohortError;

    fn roster(size: usize) -> Vec<Record> {
        let branches = ["CSE", "ECE", "ME", "CE"];
        (0..size)
            .map(|i| {
                Record::new(
                    format!("Student {i}"),
                    format!("ID{i:04}"),
                    if i % 2 == 0 { "M" } else { "F" },
                    branches[i % branches.len()],
                )
            })
            .collect()
    }

    fn options(locations: usize) -> BucketOptions {
        BucketOptions::new(6, location_names(locations), "S1-B")
    }

    #[test]
    fn test_plan_bucket_sizes() {
        assert_eq!(plan_bucket_sizes(17, 6), vec![6, 6, 5]);
        assert_eq!(plan_bucket_sizes(23, 6), vec![6, 6, 6, 5]);
        assert_eq!(plan_bucket_sizes(12, 6), vec![6, 6]);
        assert_eq!(plan_bucket_sizes(20, 6), vec![6, 6, 8]);
        assert_eq!(plan_bucket_sizes(7, 6), vec![7]);
        assert_eq!(plan_bucket_sizes(4, 6), vec![4]);
        assert_eq!(plan_bucket_sizes(5, 6), vec![5]);
        assert!(plan_bucket_sizes(0, 6).is_empty());
    }

    #[test]
    fn test_plan_with_larger_target() {
        assert_eq!(plan_bucket_sizes(15, 8), vec![8, 7]);
        assert_eq!(plan_bucket_sizes(16, 8), vec![8, 8]);
        assert_eq!(plan_bucket_sizes(22, 8), vec![8, 14]);
    }

    #[test]
    fn test_team_names_and_locations() {
        let teams = bucket_seeded(&roster(30), &options(3), Some(7)).unwrap();

        let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["S1-B1", "S1-B2", "S1-B3", "S1-B4", "S1-B5"]);

        let locations: Vec<&str> = teams.iter().map(|t| t.location.as_str()).collect();
        assert_eq!(
            locations,
            vec!["Location-1", "Location-2", "Location-3", "Location-1", "Location-2"]
        );
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let records = roster(41);
        let first = bucket_seeded(&records, &options(8), Some(42)).unwrap();
        let second = bucket_seeded(&records, &options(8), Some(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_conservation() {
        let records = roster(29);
        let teams = bucket_seeded(&records, &options(4), Some(1)).unwrap();

        let mut ids: Vec<String> = teams
            .iter()
            .flat_map(|t| t.members.iter().map(|r| r.identifier.clone()))
            .collect();
        ids.sort();
        let mut expected: Vec<String> = records.iter().map(|r| r.identifier.clone()).collect();
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_tiny_roster_yields_single_undersized_team() {
        let teams = bucket_seeded(&roster(4), &options(2), Some(3)).unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].len(), 4);
        assert_eq!(teams[0].location, "Location-1");
    }

    #[test]
    fn test_empty_roster_yields_no_teams() {
        let teams = bucket_seeded(&[], &options(2), Some(3)).unwrap();
        assert!(teams.is_empty());
    }

    #[test]
    fn test_rejects_invalid_options() {
        let records = roster(10);

        let small = BucketOptions::new(5, location_names(2), "T");
        assert!(matches!(
            bucket_seeded(&records, &small, None),
            Err(CohortError::ConfigurationError(_))
        ));

        let no_locations = BucketOptions::new(6, Vec::new(), "T");
        assert!(bucket_seeded(&records, &no_locations, None).is_err());

        let no_prefix = BucketOptions::new(6, location_names(2), "");
        assert!(bucket_seeded(&records, &no_prefix, None).is_err());
    }

    #[test]
    fn test_injected_rng() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let teams = bucket(&roster(18), &options(2), &mut rng).unwrap();
        let sizes: Vec<usize> = teams.iter().map(Team::len).collect();
        assert_eq!(sizes, vec![6, 6, 6]);
    }
}
