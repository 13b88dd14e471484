//! CSV roster loading.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::{Roster, RosterError};
use crate::logging::log_roster_operation;

/// Load and normalize a roster from a `.csv` file.
pub fn load_roster(path: &Path) -> Result<Roster, RosterError> {
    if !path.exists() {
        return Err(RosterError::FileNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if extension != "csv" {
        return Err(RosterError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        });
    }

    debug!("Reading roster file: {}", path.display());
    let file = std::fs::File::open(path)?;
    load_roster_from_reader(file, &path.display().to_string())
}

/// Load and normalize a roster from any CSV source with a header row.
pub fn load_roster_from_reader<R: Read>(reader: R, source: &str) -> Result<Roster, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();

    let rows = csv_reader
        .records()
        .map(|row| row.map(|r| r.iter().map(str::to_string).collect::<Vec<_>>()))
        .collect::<Result<Vec<_>, _>>()?;

    let roster = Roster::from_rows(&headers, rows)?;

    log_roster_operation("load", source, roster.len(), roster.dropped, "completed");
    Ok(roster)
}
