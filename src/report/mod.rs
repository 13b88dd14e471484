//! # Report Builder
//!
//! Turns finished allocations into summaries and output files. Reports hold
//! the groups read-only; nothing here changes an assignment.

pub mod summary;
pub mod writer;

pub use summary::{
    summarize_locations, ClassroomReport, ClassroomSummary, LocationSummary, TeamReport,
};
pub use writer::{
    sanitize_group_file_name, writer_for, CsvReportWriter, JsonReportWriter, ReportWriter,
};
