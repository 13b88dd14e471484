#![allow(dead_code)]

use cohort_core::models::Record;
use proptest::prelude::*;

/// Strategy for gender values, including a rare third category
pub fn gender_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => Just("M".to_string()),
        4 => Just("F".to_string()),
        1 => Just("X".to_string()),
    ]
}

/// Strategy for branch values
pub fn branch_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["CSE", "ECE", "MECH", "CIVIL", "BT"]).prop_map(str::to_string)
}

/// Strategy for rosters of up to `max` records with unique identifiers
pub fn roster_strategy(max: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((gender_strategy(), branch_strategy()), 0..=max).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (gender, branch))| {
                Record::new(format!("Student {i}"), format!("ADM{i:04}"), gender, branch)
            })
            .collect()
    })
}

/// Strategy for destination name lists of 1..=max unique names
pub fn destination_names_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    (1..=max).prop_map(|count| (1..=count).map(|i| format!("Room-{i}")).collect())
}
