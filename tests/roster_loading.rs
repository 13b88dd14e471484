//! Roster loading from CSV files on disk.

mod common;

use cohort_core::roster::{load_roster, RosterError};
use common::{roster_csv, write_file, RosterBuilder};
use tempfile::TempDir;

#[test]
fn loads_canonical_headers() {
    let dir = TempDir::new().unwrap();
    let records = RosterBuilder::new()
        .with_stratum("M", "CSE", 3)
        .with_stratum("F", "ECE", 2)
        .build();
    let path = write_file(
        dir.path(),
        "students.csv",
        &roster_csv("Name,Admission_No,Gender,Branch", &records),
    );

    let roster = load_roster(&path).unwrap();

    assert_eq!(roster.records, records);
    assert_eq!(roster.dropped, 0);
    assert_eq!(roster.profile().strata, 2);
}

#[test]
fn maps_alias_headers_in_any_column_order() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "s1.csv",
        "Department,Sex,Roll Number,Student Name\n\
         CSE,female,101,Asha\n\
         ECE,MALE,102,Ravi\n\
         BT,f,103,Meera\n",
    );

    let roster = load_roster(&path).unwrap();

    assert_eq!(roster.len(), 3);
    let first = &roster.records[0];
    assert_eq!(first.name, "Asha");
    assert_eq!(first.identifier, "101");
    assert_eq!(first.category_a, "F");
    assert_eq!(first.category_b, "CSE");
    assert_eq!(roster.records[1].category_a, "M");
    assert_eq!(roster.records[2].category_a, "F");
}

#[test]
fn drops_rows_missing_critical_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "gaps.csv",
        "Name,Admission_No,Gender,Branch\n\
         Asha,1,F,CSE\n\
         Ravi,2,,ECE\n\
         ,3,M,ECE\n\
         Kiran,4,M,\n\
         Dev,5,M,ME\n",
    );

    let roster = load_roster(&path).unwrap();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.dropped, 3);
}

#[test]
fn missing_columns_are_reported_by_field() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "bad.csv", "Name,Email,Gender\nAsha,a@x.org,F\n");

    match load_roster(&path).unwrap_err() {
        RosterError::MissingColumns { missing, available } => {
            assert_eq!(missing, vec!["admission_no".to_string(), "branch".to_string()]);
            assert!(available.iter().any(|h| h == "Email"), "{available:?}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn spreadsheets_are_not_supported() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "students.xlsx", "not really a workbook");

    assert!(matches!(
        load_roster(&path).unwrap_err(),
        RosterError::UnsupportedFormat { .. }
    ));
}

#[test]
fn absent_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nowhere.csv");

    assert!(matches!(
        load_roster(&path).unwrap_err(),
        RosterError::FileNotFound(_)
    ));
}
