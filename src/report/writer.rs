//! Report output: CSV files per group or a single JSON document.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{ClassroomReport, TeamReport};
use crate::constants::{columns, report_files, OutputFormat, MAX_GROUP_FILE_NAME_LEN};
use crate::error::{CohortError, Result};
use crate::logging::log_report_operation;

/// Writes allocation reports somewhere; returns the paths written.
pub trait ReportWriter {
    fn write_classrooms(&self, report: &ClassroomReport) -> Result<Vec<PathBuf>>;

    fn write_teams(&self, report: &TeamReport) -> Result<Vec<PathBuf>>;
}

/// Writer for the requested format rooted at `directory`.
pub fn writer_for(format: OutputFormat, directory: impl Into<PathBuf>) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Csv => Box::new(CsvReportWriter::new(directory)),
        OutputFormat::Json => Box::new(JsonReportWriter::new(directory)),
    }
}

/// File-system safe group name: path separators become `-`, and the name is
/// cut to the 31 character spreadsheet sheet-name limit.
pub fn sanitize_group_file_name(name: &str) -> String {
    name.replace(['/', '\\'], "-")
        .chars()
        .take(MAX_GROUP_FILE_NAME_LEN)
        .collect()
}

fn ensure_directory(directory: &Path) -> Result<()> {
    fs::create_dir_all(directory).map_err(|e| {
        CohortError::ReportError(format!(
            "Failed to create output directory {}: {e}",
            directory.display()
        ))
    })
}

#[derive(Debug, Clone)]
pub struct CsvReportWriter {
    directory: PathBuf,
}

impl CsvReportWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn csv_path(&self, stem: &str) -> PathBuf {
        self.directory.join(format!("{stem}.csv"))
    }

    /// File stem for every classroom, in report order.
    ///
    /// Fails before anything touches the disk when two classrooms sanitize
    /// to the same stem or a classroom takes a reserved report name.
    /// Stems are compared case-insensitively.
    fn classroom_file_stems(report: &ClassroomReport) -> Result<Vec<String>> {
        let mut used = HashSet::new();
        let mut stems = Vec::with_capacity(report.classrooms.len());

        for classroom in &report.classrooms {
            let stem = sanitize_group_file_name(&classroom.name);
            if report_files::RESERVED_STEMS
                .iter()
                .any(|reserved| reserved.eq_ignore_ascii_case(&stem))
            {
                return Err(CohortError::ReportError(format!(
                    "Classroom '{}' uses the reserved report file name '{stem}'",
                    classroom.name
                )));
            }
            if !used.insert(stem.to_lowercase()) {
                return Err(CohortError::ReportError(format!(
                    "Classroom '{}' collides with another classroom after file name sanitizing ('{stem}')",
                    classroom.name
                )));
            }
            stems.push(stem);
        }

        Ok(stems)
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_classrooms(&self, report: &ClassroomReport) -> Result<Vec<PathBuf>> {
        let stems = Self::classroom_file_stems(report)?;
        ensure_directory(&self.directory)?;
        let mut written = Vec::with_capacity(report.classrooms.len() + 1);

        let summary_path = self.csv_path(report_files::CLASSROOM_SUMMARY);
        let mut summary = csv::Writer::from_path(&summary_path)?;
        for row in &report.summary {
            summary.serialize(row)?;
        }
        if report.summary.is_empty() {
            summary.write_record([
                columns::CLASSROOM,
                columns::TOTAL_STUDENTS,
                columns::GENDER_DISTRIBUTION,
                columns::BRANCH_DISTRIBUTION,
            ])?;
        }
        summary.flush()?;
        written.push(summary_path);

        for (classroom, stem) in report.classrooms.iter().zip(&stems) {
            let path = self.csv_path(stem);
            let mut writer = csv::Writer::from_path(&path)?;
            // Header written explicitly so empty classrooms still get one
            writer.write_record([
                columns::NAME,
                columns::IDENTIFIER,
                columns::CATEGORY_A,
                columns::CATEGORY_B,
            ])?;
            for record in &classroom.members {
                writer.write_record(record.as_row())?;
            }
            writer.flush()?;
            debug!(classroom = %classroom.name, path = %path.display(), "Wrote classroom file");
            written.push(path);
        }

        log_report_operation(
            "write_classrooms",
            &self.directory.display().to_string(),
            OutputFormat::Csv.as_str(),
            "completed",
        );
        Ok(written)
    }

    fn write_teams(&self, report: &TeamReport) -> Result<Vec<PathBuf>> {
        ensure_directory(&self.directory)?;

        let teams_path = self.csv_path(report_files::TEAMS);
        let mut writer = csv::Writer::from_path(&teams_path)?;
        writer.write_record([
            columns::NAME,
            columns::IDENTIFIER,
            columns::CATEGORY_A,
            columns::CATEGORY_B,
            columns::TEAM,
            columns::LOCATION,
        ])?;
        for member in report.assigned_members() {
            writer.write_record(member.as_row())?;
        }
        writer.flush()?;

        let summary_path = self.csv_path(report_files::LOCATION_SUMMARY);
        let mut summary = csv::Writer::from_path(&summary_path)?;
        summary.write_record([columns::LOCATION, columns::TEAMS, columns::STUDENTS])?;
        for row in &report.summary {
            summary.write_record([
                row.location.clone(),
                row.teams.to_string(),
                row.students.to_string(),
            ])?;
        }
        summary.flush()?;

        log_report_operation(
            "write_teams",
            &self.directory.display().to_string(),
            OutputFormat::Csv.as_str(),
            "completed",
        );
        Ok(vec![teams_path, summary_path])
    }
}

#[derive(Debug, Clone)]
pub struct JsonReportWriter {
    directory: PathBuf,
}

impl JsonReportWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn write_document<T: serde::Serialize>(&self, file_name: &str, value: &T) -> Result<PathBuf> {
        ensure_directory(&self.directory)?;
        let path = self.directory.join(file_name);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json)?;

        log_report_operation(
            file_name,
            &path.display().to_string(),
            OutputFormat::Json.as_str(),
            "completed",
        );
        Ok(path)
    }
}

impl ReportWriter for JsonReportWriter {
    fn write_classrooms(&self, report: &ClassroomReport) -> Result<Vec<PathBuf>> {
        Ok(vec![self.write_document(report_files::CLASSROOMS_JSON, report)?])
    }

    fn write_teams(&self, report: &TeamReport) -> Result<Vec<PathBuf>> {
        let document = serde_json::json!({
            "summary": report.summary,
            "members": report.assigned_members(),
        });
        Ok(vec![self.write_document(report_files::TEAMS_JSON, &document)?])
    }
}
