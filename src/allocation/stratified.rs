//! # Stratified Allocator
//!
//! Classroom mode. Records are grouped into strata by `(category-A,
//! category-B)` and each stratum is dealt independently across the
//! destination list: member `i` of a stratum goes to destination
//! `i mod D`. Within a stratum of size `S` every destination receives
//! `floor(S / D)` or `ceil(S / D)` members, and the extra members land on
//! exactly the first `S mod D` destinations in list order.
//!
//! Overall gender and branch proportions per classroom follow from the
//! per-stratum deal; no separate target distribution is computed.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use super::StratumKey;
use crate::error::Result;
use crate::logging::log_allocation_operation;
use crate::models::{DestinationGroup, Record};
use crate::validation::validate_destination_names;

/// Result of a stratified allocation: destination groups in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    groups: Vec<DestinationGroup>,
}

impl Allocation {
    pub fn groups(&self) -> &[DestinationGroup] {
        &self.groups
    }

    pub fn get(&self, name: &str) -> Option<&DestinationGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    pub fn destination_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.name.as_str())
    }

    /// Total number of assigned records across all groups.
    pub fn total(&self) -> usize {
        self.groups.iter().map(DestinationGroup::len).sum()
    }

    pub fn into_groups(self) -> Vec<DestinationGroup> {
        self.groups
    }

    /// Destination name -> members, for callers that only need the mapping.
    pub fn into_map(self) -> HashMap<String, Vec<Record>> {
        self.groups
            .into_iter()
            .map(|group| (group.name, group.members))
            .collect()
    }
}

/// Partition records into strata, keeping input order inside each stratum.
pub fn group_by_stratum(records: &[Record]) -> BTreeMap<StratumKey, Vec<&Record>> {
    let mut strata: BTreeMap<StratumKey, Vec<&Record>> = BTreeMap::new();
    for record in records {
        strata.entry(record.stratum_key()).or_default().push(record);
    }
    strata
}

/// Deals each stratum round-robin across a fixed destination list.
#[derive(Debug, Clone)]
pub struct StratifiedAllocator {
    destination_names: Vec<String>,
}

impl StratifiedAllocator {
    /// Create an allocator for the given destinations.
    ///
    /// Fails with a configuration error when the list is empty, contains a
    /// blank name or repeats a name.
    pub fn new(destination_names: Vec<String>) -> Result<Self> {
        validate_destination_names(&destination_names)?;
        Ok(Self { destination_names })
    }

    pub fn destination_names(&self) -> &[String] {
        &self.destination_names
    }

    pub fn allocate(&self, records: &[Record]) -> Allocation {
        let destination_count = self.destination_names.len();
        let mut groups: Vec<DestinationGroup> = self
            .destination_names
            .iter()
            .map(|name| DestinationGroup::new(name.as_str()))
            .collect();

        let strata = group_by_stratum(records);

        for (key, members) in &strata {
            debug!(
                stratum = %key,
                members = members.len(),
                destinations = destination_count,
                "Distributing stratum"
            );

            for (position, record) in members.iter().enumerate() {
                groups[position % destination_count].push((*record).clone());
            }
        }

        info!(
            records = records.len(),
            strata = strata.len(),
            destinations = destination_count,
            "Stratified allocation completed"
        );
        log_allocation_operation(
            "stratified_allocate",
            records.len(),
            destination_count,
            "completed",
            None,
        );

        Allocation { groups }
    }
}

/// Allocate `records` across `destination_names` with per-stratum round-robin.
pub fn allocate(records: &[Record], destination_names: &[String]) -> Result<Allocation> {
    let allocator = StratifiedAllocator::new(destination_names.to_vec())?;
    Ok(allocator.allocate(records))
}
