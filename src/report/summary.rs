//! Per-group summary statistics and console rendering.

use std::fmt::Write as _;

use serde::Serialize;

use crate::allocation::Allocation;
use crate::models::{AssignedRecord, DestinationGroup, Team};

/// One summary row per classroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassroomSummary {
    #[serde(rename = "Classroom")]
    pub classroom: String,
    #[serde(rename = "Total_Students")]
    pub total_students: usize,
    #[serde(rename = "Gender_Distribution")]
    pub gender_distribution: String,
    #[serde(rename = "Branch_Distribution")]
    pub branch_distribution: String,
}

impl From<&DestinationGroup> for ClassroomSummary {
    fn from(group: &DestinationGroup) -> Self {
        Self {
            classroom: group.name.clone(),
            total_students: group.len(),
            gender_distribution: group.category_a_counts.render(),
            branch_distribution: group.category_b_counts.render(),
        }
    }
}

/// One summary row per location that received teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationSummary {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Teams")]
    pub teams: usize,
    #[serde(rename = "Students")]
    pub students: usize,
}

/// Classroom-mode report: groups in destination order plus their summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassroomReport {
    pub summary: Vec<ClassroomSummary>,
    pub classrooms: Vec<DestinationGroup>,
}

impl ClassroomReport {
    pub fn new(allocation: Allocation) -> Self {
        let classrooms = allocation.into_groups();
        let summary = classrooms.iter().map(ClassroomSummary::from).collect();
        Self {
            summary,
            classrooms,
        }
    }

    pub fn total_students(&self) -> usize {
        self.summary.iter().map(|s| s.total_students).sum()
    }

    /// Console rendering of the summary table.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.summary {
            let _ = writeln!(out, "{}: {} students", row.classroom, row.total_students);
            let _ = writeln!(out, "   Gender: {}", row.gender_distribution);
            let _ = writeln!(out, "   Branch: {}", row.branch_distribution);
            out.push('\n');
        }
        out
    }
}

/// Team-mode report: teams in creation order plus per-location totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamReport {
    pub summary: Vec<LocationSummary>,
    pub teams: Vec<Team>,
}

impl TeamReport {
    pub fn new(teams: Vec<Team>) -> Self {
        let summary = summarize_locations(&teams);
        Self { summary, teams }
    }

    /// Every member with its team and location, in team order.
    pub fn assigned_members(&self) -> Vec<AssignedRecord> {
        self.teams.iter().flat_map(Team::assigned_members).collect()
    }

    pub fn total_students(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for team in &self.teams {
            let _ = writeln!(
                out,
                "{}: {} members @ {}",
                team.name,
                team.len(),
                team.location
            );
        }
        out.push('\n');
        for row in &self.summary {
            let _ = writeln!(
                out,
                "{}: {} teams, {} students",
                row.location, row.teams, row.students
            );
        }
        out
    }
}

/// Location totals in order of first appearance among the teams.
pub fn summarize_locations(teams: &[Team]) -> Vec<LocationSummary> {
    let mut summary: Vec<LocationSummary> = Vec::new();
    for team in teams {
        match summary.iter_mut().find(|s| s.location == team.location) {
            Some(row) => {
                row.teams += 1;
                row.students += team.len();
            }
            None => summary.push(LocationSummary {
                location: team.location.clone(),
                teams: 1,
                students: team.len(),
            }),
        }
    }
    summary
}
