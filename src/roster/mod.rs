//! # Roster Normalizer
//!
//! Loads a tabular roster, maps heterogeneous headers onto the canonical
//! record shape, normalizes category labels and drops incomplete rows. The
//! allocators only ever see the validated [`Roster`] this module produces.

pub mod columns;
pub mod loader;
pub mod normalizer;
pub mod profile;

use std::path::PathBuf;
use thiserror::Error;

pub use columns::{CanonicalField, ColumnMapping};
pub use loader::{load_roster, load_roster_from_reader};
pub use normalizer::{normalize_category_a, Roster};
pub use profile::RosterProfile;

/// Roster loading failures
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Roster file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Unsupported roster format '{extension}' for {path}: expected a .csv file")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Missing required columns: {missing:?}. Available columns: {available:?}")]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
