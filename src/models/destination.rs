use serde::{Deserialize, Serialize};

use super::Record;

/// Counts per category value, kept in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts(Vec<(String, usize)>);

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, value: &str) {
        match self.0.iter_mut().find(|(key, _)| key == value) {
            Some((_, count)) => *count += 1,
            None => self.0.push((value.to_string(), 1)),
        }
    }

    pub fn get(&self, value: &str) -> usize {
        self.0
            .iter()
            .find(|(key, _)| key == value)
            .map_or(0, |(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(key, count)| (key.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders as `"M: 3, F: 2"`.
    pub fn render(&self) -> String {
        self.iter()
            .map(|(key, count)| format!("{key}: {count}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A named bucket (classroom) that accumulates records during allocation.
///
/// Members are append-only; the running counts are updated on every push so
/// reporting never has to rescan the member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationGroup {
    pub name: String,
    pub members: Vec<Record>,
    pub category_a_counts: CategoryCounts,
    pub category_b_counts: CategoryCounts,
}

impl DestinationGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            category_a_counts: CategoryCounts::new(),
            category_b_counts: CategoryCounts::new(),
        }
    }

    pub fn push(&mut self, record: Record) {
        self.category_a_counts.increment(&record.category_a);
        self.category_b_counts.increment(&record.category_b);
        self.members.push(record);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members of this group falling in the given stratum.
    pub fn stratum_count(&self, category_a: &str, category_b: &str) -> usize {
        self.members
            .iter()
            .filter(|r| r.category_a == category_a && r.category_b == category_b)
            .count()
    }
}
