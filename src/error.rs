//! Error types for the cohort allocation system.
//!

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CohortError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Roster error: {0}")]
    RosterError(String),
    #[error("Report error: {0}")]
    ReportError(String),
    #[error("I/O error: {0}")]
    Io(String),
}

impl CohortError {
    /// True for errors raised before any allocation work began.
    pub fn is_configuration(&self) -> bool {
        matches!(self, CohortError::ConfigurationError(_))
    }
}

impl From<std::io::Error> for CohortError {
    fn from(error: std::io::Error) -> Self {
        CohortError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for CohortError {
    fn from(error: serde_json::Error) -> Self {
        CohortError::ReportError(format!("JSON serialization error: {error}"))
    }
}

impl From<csv::Error> for CohortError {
    fn from(error: csv::Error) -> Self {
        CohortError::ReportError(format!("CSV error: {error}"))
    }
}

impl From<crate::config::ConfigurationError> for CohortError {
    fn from(error: crate::config::ConfigurationError) -> Self {
        CohortError::ConfigurationError(error.to_string())
    }
}

impl From<crate::roster::RosterError> for CohortError {
    fn from(error: crate::roster::RosterError) -> Self {
        CohortError::RosterError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CohortError>;
