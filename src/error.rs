//! Error types for the mkdiary library

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the mkdiary library
#[derive(Error, Debug)]
pub enum Error {
    /// Date arguments did not match any recognized form. Carries every token
    /// examined up to and including the one that failed to resolve.
    #[error("invalid date arguments: {}", .0.join(" "))]
    InvalidArgs(Vec<String>),

    /// Arguments resolved to numbers, but the numbers are not a real calendar date
    #[error("invalid date: year {year}, month {month}, day {day}")]
    InvalidDate { year: i64, month: i64, day: i64 },

    /// Configured entry file extension does not start with a dot
    #[error("invalid file extension (must start with a dot): {0}")]
    InvalidExtension(String),

    /// Editor process failed or exited nonzero
    #[error("editor command failed: {0}")]
    Editor(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
