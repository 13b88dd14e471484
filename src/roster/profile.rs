//! Roster profiling: the category sets and counts observed in the data.
//!
//! The set of category values is derived from the roster on every run rather
//! than configured up front.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::models::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterProfile {
    pub total: usize,
    pub category_a_counts: BTreeMap<String, usize>,
    pub category_b_counts: BTreeMap<String, usize>,
    pub strata: usize,
}

impl RosterProfile {
    pub fn from_records(records: &[Record]) -> Self {
        let mut category_a_counts = BTreeMap::new();
        let mut category_b_counts = BTreeMap::new();
        let mut strata = BTreeMap::new();

        for record in records {
            *category_a_counts
                .entry(record.category_a.clone())
                .or_insert(0) += 1;
            *category_b_counts
                .entry(record.category_b.clone())
                .or_insert(0) += 1;
            *strata.entry(record.stratum_key()).or_insert(0usize) += 1;
        }

        Self {
            total: records.len(),
            category_a_counts,
            category_b_counts,
            strata: strata.len(),
        }
    }

    /// Counts ordered by descending frequency, ties by label.
    pub fn ranked(counts: &BTreeMap<String, usize>) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> =
            counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// Console rendering, e.g. `Gender distribution: M: 3, F: 1`.
    pub fn render(&self) -> String {
        let join = |counts: &BTreeMap<String, usize>| {
            Self::ranked(counts)
                .iter()
                .map(|(label, count)| format!("{label}: {count}"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "Total students: {}\nGender distribution: {}\nBranch distribution: {}\n",
            self.total,
            join(&self.category_a_counts),
            join(&self.category_b_counts)
        )
    }

    pub fn log(&self) {
        info!(
            total = self.total,
            genders = ?Self::ranked(&self.category_a_counts),
            branches = ?Self::ranked(&self.category_b_counts),
            strata = self.strata,
            "Roster profile"
        );
    }
}
