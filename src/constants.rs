//! # System Constants
//!
//! Core constants that define the operational boundaries of classroom and
//! team allocation, plus the canonical column vocabulary used by the roster
//! normalizer and the report writers.

/// Smallest team the bucketer will ever emit for a roster of at least this size.
pub const MIN_TEAM_SIZE: usize = 5;

/// Nominal team size when none is configured.
pub const DEFAULT_TEAM_SIZE: usize = 6;

/// Number of locations teams are spread across when none is configured.
pub const DEFAULT_LOCATION_COUNT: usize = 8;

pub const DEFAULT_CLASSROOM_PREFIX: &str = "Class_";
pub const DEFAULT_LOCATION_PREFIX: &str = "Location-";
pub const DEFAULT_TEAM_NAME_PREFIX: &str = "T";
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "grouped_students";

/// Spreadsheet-era limit kept for output file names.
pub const MAX_GROUP_FILE_NAME_LEN: usize = 31;

/// Report file names shared by both modes' output directories.
pub mod report_files {
    pub const CLASSROOM_SUMMARY: &str = "classroom_summary";
    pub const LOCATION_SUMMARY: &str = "location_summary";
    pub const TEAMS: &str = "teams";
    pub const CLASSROOMS_JSON: &str = "classrooms.json";
    pub const TEAMS_JSON: &str = "teams.json";

    /// Stems a classroom file may never take.
    pub const RESERVED_STEMS: &[&str] = &[CLASSROOM_SUMMARY, LOCATION_SUMMARY, TEAMS];
}

/// Canonical field headers, in output order.
pub mod columns {
    pub const NAME: &str = "Name";
    pub const IDENTIFIER: &str = "Admission_No";
    pub const CATEGORY_A: &str = "Gender";
    pub const CATEGORY_B: &str = "Branch";
    pub const TEAM: &str = "Team";
    pub const LOCATION: &str = "Location";

    pub const CLASSROOM: &str = "Classroom";
    pub const TOTAL_STUDENTS: &str = "Total_Students";
    pub const GENDER_DISTRIBUTION: &str = "Gender_Distribution";
    pub const BRANCH_DISTRIBUTION: &str = "Branch_Distribution";
    pub const TEAMS: &str = "Teams";
    pub const STUDENTS: &str = "Students";
}

/// Header aliases recognised for each canonical field.
pub mod aliases {
    pub const NAME: &[&str] = &["name", "student name", "full name", "student_name", "fullname"];

    pub const IDENTIFIER: &[&str] = &[
        "admission no",
        "admission number",
        "sap id",
        "usn",
        "student id",
        "admission_no",
        "admission_number",
        "sap_id",
        "student_id",
        "roll no",
        "roll number",
    ];

    pub const CATEGORY_A: &[&str] = &["gender", "sex", "male/female", "m/f"];

    pub const CATEGORY_B: &[&str] = &[
        "branch",
        "department",
        "course",
        "stream",
        "dept",
        "program",
    ];
}

/// Output format for allocation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected csv or json)")),
        }
    }
}
