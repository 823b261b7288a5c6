//! Integration tests for the mkdiary library

use chrono::NaiveDate;
use mkdiary::{entry, open, Error};
use std::path::PathBuf;
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

#[test]
fn test_open_todays_entry_end_to_end() {
    let temp = TempDir::new().expect("Failed to create temp directory");

    let entry = entry::parse(&[], today()).expect("Failed to parse empty arguments");
    let full_path = open::prepare(&entry, temp.path(), ".txt").expect("Failed to prepare entry");

    assert_eq!(
        full_path,
        temp.path().join("2024").join("03").join("10.txt")
    );
    assert!(full_path.parent().unwrap().is_dir());
    assert!(!full_path.exists(), "Entry file should be left for the editor");
}

#[test]
fn test_open_month_directory_end_to_end() {
    let temp = TempDir::new().expect("Failed to create temp directory");

    let entry = entry::parse(&["2023", "12"], today()).expect("Failed to parse arguments");
    assert!(entry.is_dir);

    let full_path = open::prepare(&entry, temp.path(), ".txt").expect("Failed to prepare entry");
    assert_eq!(full_path, temp.path().join("2023").join("12"));
    assert!(full_path.is_dir());
}

#[test]
fn test_relative_entry_lands_in_existing_tree() {
    let temp = TempDir::new().expect("Failed to create temp directory");

    // Two entries in the same month share the month directory
    let first = entry::parse(&["-5d"], today()).unwrap();
    let second = entry::parse(&["+1d"], today()).unwrap();

    let first_path = open::prepare(&first, temp.path(), ".md").unwrap();
    let second_path = open::prepare(&second, temp.path(), ".md").unwrap();

    assert_eq!(first_path, temp.path().join("2024").join("03").join("05.md"));
    assert_eq!(second_path, temp.path().join("2024").join("03").join("11.md"));
    assert_eq!(first_path.parent(), second_path.parent());
}

#[test]
fn test_configured_extension_is_appended() {
    let temp = TempDir::new().expect("Failed to create temp directory");

    let entry = entry::parse(&["2023", "12", "24"], today()).unwrap();
    let full_path = open::prepare(&entry, temp.path(), ".rst").unwrap();

    assert_eq!(full_path.extension().and_then(|e| e.to_str()), Some("rst"));
    assert_eq!(
        full_path.file_name().and_then(|n| n.to_str()),
        Some("24.rst")
    );
}

#[test]
fn test_bad_extension_fails_without_side_effects() {
    let temp = TempDir::new().expect("Failed to create temp directory");

    let entry = entry::parse(&["..."], today()).unwrap();
    let result = open::prepare(&entry, temp.path(), "no-dot");

    assert!(matches!(result, Err(Error::InvalidExtension(_))));
    assert_eq!(
        std::fs::read_dir(temp.path()).unwrap().count(),
        0,
        "Nothing should be created when the extension is rejected"
    );
}

#[test]
fn test_parse_failures_are_single_line_messages() {
    let args_err = entry::parse(&["not-a-date"], today()).unwrap_err();
    let date_err = entry::parse(&["2024", "2", "30"], today()).unwrap_err();

    for err in [args_err, date_err] {
        let message = err.to_string();
        assert!(!message.is_empty());
        assert!(
            !message.contains('\n'),
            "Error message should fit on one line: {:?}",
            message
        );
    }
}

#[test]
fn test_invalid_date_error_carries_resolved_numbers() {
    let err = entry::parse(&["2024", "+11", "31"], today()).unwrap_err();

    // Month resolved to 3 + 11 = 14 before calendar validation rejected it
    match err {
        Error::InvalidDate { year, month, day } => {
            assert_eq!((year, month, day), (2024, 14, 31));
        }
        other => panic!("Expected InvalidDate, got {:?}", other),
    }
}

#[test]
fn test_library_reexports() {
    // The crate root re-exports the parser entry points
    let entry = mkdiary::parse(&["."], today()).unwrap();
    assert_eq!(entry.path, PathBuf::from("2024"));
    assert!(entry.is_dir);
}
