//! Roster builders for allocation and reporting tests.

#![allow(dead_code)]

use cohort_core::models::Record;

/// Builder for a single test record with sensible defaults.
pub struct RecordBuilder {
    name: Option<String>,
    identifier: Option<String>,
    category_a: String,
    category_b: String,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            identifier: None,
            category_a: "F".to_string(),
            category_b: "CSE".to_string(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_identifier(mut self, identifier: &str) -> Self {
        self.identifier = Some(identifier.to_string());
        self
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.category_a = gender.to_string();
        self
    }

    pub fn with_branch(mut self, branch: &str) -> Self {
        self.category_b = branch.to_string();
        self
    }

    pub fn build(self, index: usize) -> Record {
        Record::new(
            self.name.unwrap_or_else(|| format!("Student {index}")),
            self.identifier.unwrap_or_else(|| format!("ADM{index:04}")),
            self.category_a,
            self.category_b,
        )
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a roster made of `(gender, branch, count)` blocks, numbered
/// consecutively in the order the blocks are added.
pub struct RosterBuilder {
    blocks: Vec<(String, String, usize)>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    pub fn with_stratum(mut self, gender: &str, branch: &str, count: usize) -> Self {
        self.blocks
            .push((gender.to_string(), branch.to_string(), count));
        self
    }

    pub fn build(self) -> Vec<Record> {
        let mut records = Vec::new();
        for (gender, branch, count) in self.blocks {
            for _ in 0..count {
                let index = records.len();
                records.push(
                    RecordBuilder::new()
                        .with_gender(&gender)
                        .with_branch(&branch)
                        .build(index),
                );
            }
        }
        records
    }
}

impl Default for RosterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render records as CSV text with the given header line.
pub fn roster_csv(header: &str, records: &[Record]) -> String {
    let mut csv = format!("{header}\n");
    for record in records {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            record.name, record.identifier, record.category_a, record.category_b
        ));
    }
    csv
}

pub fn names(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{prefix}{i}")).collect()
}
