//! Header resolution: maps whatever column names a roster uses onto the four
//! canonical fields.

use std::fmt;

use super::RosterError;
use crate::constants::{aliases, columns};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Name,
    Identifier,
    CategoryA,
    CategoryB,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 4] = [
        CanonicalField::Name,
        CanonicalField::Identifier,
        CanonicalField::CategoryA,
        CanonicalField::CategoryB,
    ];

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CanonicalField::Name => aliases::NAME,
            CanonicalField::Identifier => aliases::IDENTIFIER,
            CanonicalField::CategoryA => aliases::CATEGORY_A,
            CanonicalField::CategoryB => aliases::CATEGORY_B,
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            CanonicalField::Name => columns::NAME,
            CanonicalField::Identifier => columns::IDENTIFIER,
            CanonicalField::CategoryA => columns::CATEGORY_A,
            CanonicalField::CategoryB => columns::CATEGORY_B,
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            CanonicalField::Name => "name",
            CanonicalField::Identifier => "admission_no",
            CanonicalField::CategoryA => "gender",
            CanonicalField::CategoryB => "branch",
        };
        f.write_str(key)
    }
}

/// Column index of each canonical field within the source headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub name: usize,
    pub identifier: usize,
    pub category_a: usize,
    pub category_b: usize,
}

/// Shortest header accepted as a truncated alias (`adm` for `admission no`).
const MIN_ABBREVIATED_HEADER_LEN: usize = 3;

/// A header shorter than the alias matches only as a leading abbreviation.
fn is_abbreviation_of(header: &str, alias: &str) -> bool {
    header.chars().count() >= MIN_ABBREVIATED_HEADER_LEN && alias.starts_with(header)
}

impl ColumnMapping {
    /// Resolve canonical fields against `headers`.
    ///
    /// Headers are compared trimmed and lower-cased. For each field the
    /// aliases are tried in order. A header matches when it contains the
    /// alias, or when it is a leading abbreviation of the alias at least
    /// three characters long. A header claimed by one field is not offered to
    /// the next.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self, RosterError> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.as_ref().trim().to_lowercase())
            .collect();

        let mut claimed = vec![false; normalized.len()];
        let mut resolved = [None; 4];
        let mut missing = Vec::new();

        for (slot, field) in CanonicalField::ALL.iter().enumerate() {
            let found = field.aliases().iter().find_map(|alias| {
                normalized.iter().enumerate().find_map(|(index, header)| {
                    let matches = !header.is_empty()
                        && !claimed[index]
                        && (header.contains(alias) || is_abbreviation_of(header, alias));
                    matches.then_some(index)
                })
            });

            match found {
                Some(index) => {
                    claimed[index] = true;
                    resolved[slot] = Some(index);
                }
                None => missing.push(field.to_string()),
            }
        }

        match resolved {
            [Some(name), Some(identifier), Some(category_a), Some(category_b)] => Ok(Self {
                name,
                identifier,
                category_a,
                category_b,
            }),
            _ => Err(RosterError::MissingColumns {
                missing,
                available: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            }),
        }
    }

    pub fn index_of(&self, field: CanonicalField) -> usize {
        match field {
            CanonicalField::Name => self.name,
            CanonicalField::Identifier => self.identifier,
            CanonicalField::CategoryA => self.category_a,
            CanonicalField::CategoryB => self.category_b,
        }
    }
}
