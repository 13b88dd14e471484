//! Configuration Module Tests
//!
//! Loads the shipped cohort-config.yaml for each environment and checks how
//! configured values flow into allocation options.

use std::path::PathBuf;

use cohort_core::allocation::StratifiedAllocator;
use cohort_core::config::{CohortConfig, ConfigManager};
use cohort_core::OutputFormat;

fn shipped_config_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config")
}

#[test]
fn shipped_config_matches_defaults_in_development() {
    let manager =
        ConfigManager::load_from_directory_with_env(Some(shipped_config_dir()), "development")
            .expect("shipped config should load");
    let config = manager.config();

    let defaults = CohortConfig::default();
    assert_eq!(config.teams, defaults.teams);
    assert_eq!(config.output, defaults.output);
    assert_eq!(config.classrooms, defaults.classrooms);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_environment_pins_the_seed() {
    let manager = ConfigManager::load_from_directory_with_env(Some(shipped_config_dir()), "test")
        .expect("shipped config should load");

    assert_eq!(manager.config().teams.seed, Some(42));
    assert_eq!(manager.config().output.directory, "target/cohort-test-output");
}

#[test]
fn production_logs_as_json() {
    let manager =
        ConfigManager::load_from_directory_with_env(Some(shipped_config_dir()), "production")
            .expect("shipped config should load");
    let config = manager.config();

    assert!(config.logging.json);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.output.format, OutputFormat::Csv);
}

#[test]
fn configured_teams_produce_valid_bucket_options() {
    let config = CohortConfig::default();
    let options = config.teams.bucket_options();

    assert!(options.validate().is_ok());
    assert_eq!(options.target_size, 6);
    assert_eq!(options.locations.len(), 8);
    assert_eq!(options.team_name_prefix, "T");
}

#[test]
fn explicit_locations_override_the_count() {
    let mut config = CohortConfig::default();
    config.teams.locations = vec!["Library".to_string(), "Canteen".to_string()];
    config.teams.location_count = 5;

    assert_eq!(config.teams.location_names(), vec!["Library", "Canteen"]);
}

#[test]
fn generated_classroom_names_feed_the_allocator() {
    let config = CohortConfig::default();
    let names = config.classrooms.destination_names(Some(3));
    assert_eq!(names, vec!["Class_01", "Class_02", "Class_03"]);

    let allocator = StratifiedAllocator::new(names).unwrap();
    assert_eq!(allocator.destination_names().len(), 3);
}

#[test]
fn duplicate_configured_classrooms_fail_validation() {
    let mut config = CohortConfig::default();
    config.classrooms.names = vec!["A".to_string(), "A".to_string()];

    assert!(config.validate().is_err());
}
