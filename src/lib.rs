//! mkdiary library
//!
//! Keeps a diary as a plain `year/month/day` file tree and resolves the
//! compact date arguments of the `mkdiary` command into entry paths:
//! - Parse 0 to 3 date arguments (`.`, `..`, `...`, `+3d`, `2023 12 24`, ...)
//!   against today's date
//! - Create the year/month directories an entry needs
//! - Open the entry in an editor rooted at the diary base directory
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//! let entry = mkdiary::parse(&["+1d"], today).expect("Failed to parse date arguments");
//!
//! assert_eq!(entry.path, std::path::PathBuf::from("2024/03/11"));
//! assert!(!entry.is_dir);
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod open;

// Re-export commonly used items
pub use entry::{parse, parse_args, EntryPath};
pub use error::{Error, Result};
