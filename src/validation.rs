//! Input validation for Cohort Core
//!
//! Precondition checks shared by the allocators, the configuration loader and
//! the CLI. Every failure here is a configuration error: it is raised before
//! any record is assigned.

use crate::constants::MIN_TEAM_SIZE;
use crate::error::{CohortError, Result};

/// Validates a destination (classroom or location) list
pub fn validate_destination_names(names: &[String]) -> Result<()> {
    validate_name_list(names, "destination")
}

/// Validates the location list used for round-robin team placement
pub fn validate_locations(locations: &[String]) -> Result<()> {
    validate_name_list(locations, "location")
}

fn validate_name_list(names: &[String], kind: &str) -> Result<()> {
    if names.is_empty() {
        return Err(CohortError::ConfigurationError(format!(
            "At least one {kind} name is required"
        )));
    }

    for (index, name) in names.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(CohortError::ConfigurationError(format!(
                "{kind} name at position {} is blank",
                index + 1
            )));
        }

        if names[..index].contains(name) {
            return Err(CohortError::ConfigurationError(format!(
                "Duplicate {kind} name: {name}"
            )));
        }
    }

    Ok(())
}

/// Validates the nominal team size.
///
/// A final remainder of `team_size - 1` is kept whole, so `team_size - 1`
/// must itself satisfy the minimum team size.
pub fn validate_team_size(team_size: usize) -> Result<()> {
    if team_size == 0 {
        return Err(CohortError::ConfigurationError(
            "team_size must be positive".to_string(),
        ));
    }

    if team_size < MIN_TEAM_SIZE + 1 {
        return Err(CohortError::ConfigurationError(format!(
            "team_size {team_size} is not supported (minimum {}): a final team of {} would fall below {MIN_TEAM_SIZE} members",
            MIN_TEAM_SIZE + 1,
            team_size.saturating_sub(1)
        )));
    }

    Ok(())
}

/// Validates a positive count (classes, locations)
pub fn validate_positive_count(count: usize, field: &str) -> Result<()> {
    if count == 0 {
        Err(CohortError::ConfigurationError(format!(
            "{field} must be positive"
        )))
    } else {
        Ok(())
    }
}

/// Validates the team name prefix
pub fn validate_team_name_prefix(prefix: &str) -> Result<()> {
    if prefix.trim().is_empty() {
        Err(CohortError::ConfigurationError(
            "team name prefix must not be empty".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Parses a comma separated classroom list, e.g. `"AIML-CR001, BT-217"`
pub fn parse_classroom_list(raw: &str) -> Result<Vec<String>> {
    let names: Vec<String> = raw.split(',').map(|name| name.trim().to_string()).collect();

    if names.iter().any(String::is_empty) {
        return Err(CohortError::ConfigurationError(format!(
            "Classroom list contains an empty entry: '{raw}'"
        )));
    }

    validate_destination_names(&names)?;
    Ok(names)
}
