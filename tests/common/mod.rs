//! Shared helpers for the integration tests.

#![allow(dead_code)]

pub mod builders;
pub mod strategies;

pub use builders::*;

use std::fs;
use std::path::{Path, PathBuf};

/// Write `contents` to `file_name` inside `dir` and return the path.
pub fn write_file(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, contents).expect("Failed to write test file");
    path
}
