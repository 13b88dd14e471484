//! # Cohort Configuration System
//!
//! YAML-based configuration with environment-specific overrides, loaded by
//! [`ConfigManager`]. Command line flags layer on top of the loaded values.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cohort_core::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//! let team_size = manager.config().teams.team_size;
//! let locations = manager.config().teams.location_names();
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use serde::{Deserialize, Serialize};

use crate::allocation::destinations::{classroom_names_with_prefix, location_names_with_prefix};
use crate::allocation::BucketOptions;
use crate::constants::{
    OutputFormat, DEFAULT_CLASSROOM_PREFIX, DEFAULT_LOCATION_COUNT, DEFAULT_LOCATION_PREFIX,
    DEFAULT_OUTPUT_DIRECTORY, DEFAULT_TEAM_NAME_PREFIX, DEFAULT_TEAM_SIZE,
};
use crate::validation;

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigManager;

/// Root configuration structure mirroring cohort-config.yaml
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CohortConfig {
    /// Classroom mode settings
    pub classrooms: ClassroomConfig,

    /// Team mode settings
    pub teams: TeamConfig,

    /// Report output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassroomConfig {
    /// Prefix for generated classroom names (`Class_01`, ...)
    pub name_prefix: String,
    /// Classroom names used when no count is given on the command line
    pub names: Vec<String>,
}

impl Default for ClassroomConfig {
    fn default() -> Self {
        Self {
            name_prefix: DEFAULT_CLASSROOM_PREFIX.to_string(),
            names: Vec::new(),
        }
    }
}

impl ClassroomConfig {
    /// `count` generated names when a count is given, otherwise the
    /// configured names.
    pub fn destination_names(&self, count: Option<usize>) -> Vec<String> {
        match count {
            Some(count) => classroom_names_with_prefix(&self.name_prefix, count),
            None => self.names.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TeamConfig {
    pub team_size: usize,
    pub location_count: usize,
    pub location_prefix: String,
    /// Explicit location names; take precedence over `location_count`
    pub locations: Vec<String>,
    pub team_name_prefix: String,
    /// Fixed shuffle seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            location_count: DEFAULT_LOCATION_COUNT,
            location_prefix: DEFAULT_LOCATION_PREFIX.to_string(),
            locations: Vec::new(),
            team_name_prefix: DEFAULT_TEAM_NAME_PREFIX.to_string(),
            seed: None,
        }
    }
}

impl TeamConfig {
    pub fn location_names(&self) -> Vec<String> {
        if self.locations.is_empty() {
            location_names_with_prefix(&self.location_prefix, self.location_count)
        } else {
            self.locations.clone()
        }
    }

    pub fn bucket_options(&self) -> BucketOptions {
        BucketOptions::new(
            self.team_size,
            self.location_names(),
            self.team_name_prefix.clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: String,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_OUTPUT_DIRECTORY.to_string(),
            format: OutputFormat::Csv,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl CohortConfig {
    /// Validate configuration constraints before any allocation runs.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.classrooms.names.is_empty() {
            validation::validate_destination_names(&self.classrooms.names)
                .map_err(|e| ConfigurationError::validation_error(e.to_string()))?;
        }

        if self.teams.locations.is_empty() && self.teams.location_count == 0 {
            return Err(ConfigurationError::invalid_value(
                "teams.location_count",
                "0",
                "location_count must be positive",
            ));
        }

        self.teams
            .bucket_options()
            .validate()
            .map_err(|e| ConfigurationError::validation_error(e.to_string()))?;

        if self.output.directory.trim().is_empty() {
            return Err(ConfigurationError::invalid_value(
                "output.directory",
                "",
                "output directory must not be empty",
            ));
        }

        Ok(())
    }
}
