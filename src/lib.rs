#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Cohort Core
//!
//! Balanced partitioning of a student roster into classrooms or teams.
//!
//! ## Overview
//!
//! A roster of individuals (name, identifier, gender, branch) is split into
//! groups whose categorical make-up is as even as a round-robin deal allows.
//! Two independent pipelines share the same roster loading and reporting:
//!
//! - **Classroom mode**: N named classrooms. Each `(gender, branch)` stratum
//!   is dealt round-robin across the classroom list, so per-stratum counts in
//!   any two classrooms differ by at most one.
//! - **Team mode**: micro-teams of a nominal size (6 by default, never fewer
//!   than 5 members). The roster is shuffled with an injectable, seedable
//!   random source, cut into consecutive teams with the remainder kept whole
//!   or absorbed into the previous team, and teams are dealt round-robin onto
//!   locations.
//!
//! ## Module Organization
//!
//! - [`models`] - Records and the groups they are assigned to
//! - [`allocation`] - Stratified allocator and fixed-size bucketer
//! - [`roster`] - CSV loading, header mapping and normalization
//! - [`report`] - Summaries and CSV/JSON output
//! - [`config`] - YAML configuration with environment overrides
//! - [`validation`] - Precondition checks
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust
//! use cohort_core::allocation::{allocate, bucket_seeded, location_names, BucketOptions};
//! use cohort_core::models::Record;
//!
//! # fn main() -> cohort_core::Result<()> {
//! let roster: Vec<Record> = (0..17)
//!     .map(|i| Record::new(format!("Student {i}"), format!("{i}"), "F", "CSE"))
//!     .collect();
//!
//! let classrooms = allocate(&roster, &["A".to_string(), "B".to_string()])?;
//! assert_eq!(classrooms.get("A").map(|g| g.len()), Some(9));
//!
//! let options = BucketOptions::new(6, location_names(2), "S1-B");
//! let teams = bucket_seeded(&roster, &options, Some(7))?;
//! let sizes: Vec<usize> = teams.iter().map(|t| t.len()).collect();
//! assert_eq!(sizes, vec![6, 6, 5]);
//! # Ok(())
//! # }
//! ```

pub mod allocation;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod roster;
pub mod validation;

pub use allocation::{
    allocate, bucket, bucket_seeded, Allocation, BucketOptions, FixedSizeBucketer,
    StratifiedAllocator, StratumKey,
};
pub use config::{CohortConfig, ConfigManager};
pub use constants::{OutputFormat, DEFAULT_TEAM_SIZE, MIN_TEAM_SIZE};
pub use error::{CohortError, Result};
pub use models::{AssignedRecord, DestinationGroup, Record, Team};
pub use report::{ClassroomReport, TeamReport};
pub use roster::{load_roster, Roster, RosterProfile};
