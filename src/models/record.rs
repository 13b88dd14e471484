use serde::{Deserialize, Serialize};

use crate::allocation::StratumKey;

/// One individual from the roster.
///
/// Records are immutable once loaded; the allocators clone them into their
/// destination groups rather than mutating the roster in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Admission_No")]
    pub identifier: String,
    /// Category-A label, e.g. gender (`M` / `F` after normalization)
    #[serde(rename = "Gender")]
    pub category_a: String,
    /// Category-B label, e.g. branch or department
    #[serde(rename = "Branch")]
    pub category_b: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        identifier: impl Into<String>,
        category_a: impl Into<String>,
        category_b: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            category_a: category_a.into(),
            category_b: category_b.into(),
        }
    }

    pub fn stratum_key(&self) -> StratumKey {
        StratumKey::new(&self.category_a, &self.category_b)
    }

    /// Fields in canonical column order.
    pub fn as_row(&self) -> [&str; 4] {
        [
            &self.name,
            &self.identifier,
            &self.category_a,
            &self.category_b,
        ]
    }
}

/// A record annotated with its team and location (team mode output).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedRecord {
    #[serde(flatten)]
    pub record: Record,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Location")]
    pub location: String,
}

impl AssignedRecord {
    pub fn as_row(&self) -> [&str; 6] {
        let [name, identifier, category_a, category_b] = self.record.as_row();
        [
            name,
            identifier,
            category_a,
            category_b,
            &self.team,
            &self.location,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_canonical_headers() {
        let record = Record::new("Asha", "A001", "F", "CSE");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Name"], "Asha");
        assert_eq!(json["Admission_No"], "A001");
        assert_eq!(json["Gender"], "F");
        assert_eq!(json["Branch"], "CSE");
    }

    #[test]
    fn test_assigned_record_flattens() {
        let assigned = AssignedRecord {
            record: Record::new("Ravi", "A002", "M", "ECE"),
            team: "S1-B1".to_string(),
            location: "Location-1".to_string(),
        };
        let json = serde_json::to_value(&assigned).unwrap();
        assert_eq!(json["Name"], "Ravi");
        assert_eq!(json["Team"], "S1-B1");
        assert_eq!(json["Location"], "Location-1");
        assert_eq!(
            assigned.as_row(),
            ["Ravi", "A002", "M", "ECE", "S1-B1", "Location-1"]
        );
    }
}
