//! Row normalization: canonical records out of raw string rows.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::{ColumnMapping, RosterError, RosterProfile};
use crate::models::Record;

/// Normalize a category-A (gender) label.
///
/// `M`/`MALE` become `M` and `F`/`FEMALE` become `F`, case-insensitively;
/// anything else is kept upper-cased.
pub fn normalize_category_a(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    match upper.as_str() {
        "M" | "MALE" => "M".to_string(),
        "F" | "FEMALE" => "F".to_string(),
        _ => upper,
    }
}

/// A validated roster ready for allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub records: Vec<Record>,
    /// Rows dropped for missing a canonical field
    pub dropped: usize,
    /// Identifiers seen more than once (kept, but reported)
    pub duplicate_identifiers: Vec<String>,
}

impl Roster {
    /// Build a roster from a header row and raw data rows.
    pub fn from_rows<H, R, F>(headers: &[H], rows: R) -> Result<Self, RosterError>
    where
        H: AsRef<str>,
        R: IntoIterator<Item = Vec<F>>,
        F: AsRef<str>,
    {
        let mapping = ColumnMapping::resolve(headers)?;
        debug!(?mapping, "Resolved roster columns");

        let mut records = Vec::new();
        let mut dropped = 0;

        for row in rows {
            match Self::record_from_row(&mapping, &row) {
                Some(record) => records.push(record),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            warn!(dropped, "Removed rows with missing critical data");
        }

        let duplicate_identifiers = Self::find_duplicates(&records);
        if !duplicate_identifiers.is_empty() {
            warn!(
                duplicates = duplicate_identifiers.len(),
                "Roster contains repeated identifiers"
            );
        }

        Ok(Self {
            records,
            dropped,
            duplicate_identifiers,
        })
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        let duplicate_identifiers = Self::find_duplicates(&records);
        Self {
            records,
            dropped: 0,
            duplicate_identifiers,
        }
    }

    fn record_from_row<F: AsRef<str>>(mapping: &ColumnMapping, row: &[F]) -> Option<Record> {
        let field = |index: usize| {
            row.get(index)
                .map(|value| value.as_ref().trim())
                .filter(|value| !value.is_empty())
        };

        let name = field(mapping.name)?;
        let identifier = field(mapping.identifier)?;
        let category_a = field(mapping.category_a)?;
        let category_b = field(mapping.category_b)?;

        Some(Record::new(
            name,
            identifier,
            normalize_category_a(category_a),
            category_b,
        ))
    }

    fn find_duplicates(records: &[Record]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for record in records {
            if !seen.insert(record.identifier.as_str())
                && !duplicates.contains(&record.identifier)
            {
                duplicates.push(record.identifier.clone());
            }
        }
        duplicates
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn profile(&self) -> RosterProfile {
        RosterProfile::from_records(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_category_a_normalization() {
        assert_eq!(normalize_category_a("male"), "M");
        assert_eq!(normalize_category_a(" Female "), "F");
        assert_eq!(normalize_category_a("m"), "M");
        assert_eq!(normalize_category_a("other"), "OTHER");
    }

    #[test]
    fn test_rows_are_mapped_and_filtered() {
        let headers = ["Branch", "Name", "Gender", "USN"];
        let rows = vec![
            row(&["CSE", "Asha", "female", "1"]),
            row(&["ECE", "", "M", "2"]),
            row(&["ME", "Ravi", "Male", "3"]),
            row(&["CE", "Short"]),
        ];

        let roster = Roster::from_rows(&headers, rows).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.dropped, 2);
        assert_eq!(roster.records[0], Record::new("Asha", "1", "F", "CSE"));
        assert_eq!(roster.records[1], Record::new("Ravi", "3", "M", "ME"));
    }

    #[test]
    fn test_duplicate_identifiers_reported_not_removed() {
        let roster = Roster::from_records(vec![
            Record::new("A", "7", "M", "CSE"),
            Record::new("B", "7", "F", "CSE"),
            Record::new("C", "7", "F", "ECE"),
            Record::new("D", "8", "F", "ECE"),
        ]);
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.duplicate_identifiers, vec!["7"]);
    }
}
