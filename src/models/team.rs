use serde::{Deserialize, Serialize};

use super::{AssignedRecord, Record};

/// A fixed-size micro-team placed at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub members: Vec<Record>,
    pub location: String,
}

impl Team {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members annotated with this team's name and location.
    pub fn assigned_members(&self) -> impl Iterator<Item = AssignedRecord> + '_ {
        self.members.iter().map(move |record| AssignedRecord {
            record: record.clone(),
            team: self.name.clone(),
            location: self.location.clone(),
        })
    }

    /// Number of distinct category-B values among members.
    pub fn category_b_diversity(&self) -> usize {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.members {
            if !seen.contains(&record.category_b.as_str()) {
                seen.push(&record.category_b);
            }
        }
        seen.len()
    }
}
