//! Date argument parsing module
//!
//! Turns the compact date arguments of the `mkdiary` command into a relative
//! entry path under the diary base directory.
//!
//! Supported forms (0 to 3 whitespace-separated arguments):
//! - `` (no arguments) → today's entry file, e.g. `2024/03/10`
//! - `.` → this year's directory, `2024`
//! - `..` → this month's directory, `2024/03`
//! - `...` → today's entry file, `2024/03/10`
//! - `+3d`, `-10d` → entry file that many days from today
//! - `2023` → a year directory
//! - `2023 12` → a month directory
//! - `2023 12 24` → an entry file
//!
//! Wherever a year, month, or day is expected, `.` means today's value of that
//! field and an explicitly signed number (`+1`, `-2`) is an offset from it, so
//! `+1 .` is "this month next year".

use chrono::{Datelike, Duration, Local, NaiveDate};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// A resolved diary entry location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPath {
    /// Relative path under the diary base directory: year, year/month, or
    /// year/month/day. Month and day segments are zero-padded to two digits.
    pub path: PathBuf,
    /// True for year and year/month buckets (directories), false for a
    /// full-date entry (a file)
    pub is_dir: bool,
}

/// Recognized shapes of a single date argument, checked in declaration order.
/// The dot shorthands must win over the regular-value fallback: `.` alone is
/// "this year's directory", not the year number.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ArgForm {
    /// `.`
    ThisYear,
    /// `..`
    ThisYearMonth,
    /// `...`
    ThisFullDate,
    /// `+3d` / `-10d` (the sign is required)
    RelativeDays(i64),
    /// Candidate for regular-value resolution, or garbage
    Other,
}

/// Parse a raw argument string against the current local date.
///
/// The current date is sampled exactly once, so every relative argument in the
/// string resolves against the same day even across midnight.
pub fn parse_args(argstr: &str) -> Result<EntryPath> {
    let tokens: Vec<&str> = argstr.split_whitespace().collect();
    parse(&tokens, Local::now().date_naive())
}

/// Parse date argument tokens against an explicit `today`.
///
/// Fails with [`Error::InvalidArgs`] when the tokens do not match any form,
/// and with [`Error::InvalidDate`] when they resolve to numbers that are not a
/// real calendar date (e.g. February 30th).
pub fn parse(tokens: &[&str], today: NaiveDate) -> Result<EntryPath> {
    match tokens {
        [] => Ok(entry_file(today)),
        [arg] => parse_one(arg, today),
        [year_arg, month_arg] => parse_two(year_arg, month_arg, today),
        [year_arg, month_arg, day_arg] => parse_three(year_arg, month_arg, day_arg, today),
        _ => Err(invalid_args(tokens)),
    }
}

fn classify(arg: &str) -> ArgForm {
    match arg {
        "." => return ArgForm::ThisYear,
        ".." => return ArgForm::ThisYearMonth,
        "..." => return ArgForm::ThisFullDate,
        _ => {}
    }

    if let Some(num) = arg.strip_suffix('d').and_then(parse_signed) {
        return ArgForm::RelativeDays(num);
    }

    ArgForm::Other
}

fn parse_one(arg: &str, today: NaiveDate) -> Result<EntryPath> {
    match classify(arg) {
        ArgForm::ThisYear => Ok(year_dir(today)),
        ArgForm::ThisYearMonth => Ok(month_dir(today)),
        ArgForm::ThisFullDate => Ok(entry_file(today)),
        ArgForm::RelativeDays(days) => {
            let date = today
                .checked_add_signed(Duration::days(days))
                .ok_or_else(|| invalid_args(&[arg]))?;
            Ok(entry_file(date))
        }
        ArgForm::Other => {
            let year = resolve_regular(arg, i64::from(today.year()))
                .ok_or_else(|| invalid_args(&[arg]))?;
            Ok(year_dir(make_date(year, 1, 1)?))
        }
    }
}

fn parse_two(year_arg: &str, month_arg: &str, today: NaiveDate) -> Result<EntryPath> {
    let year = resolve_regular(year_arg, i64::from(today.year()))
        .ok_or_else(|| invalid_args(&[year_arg]))?;
    let month = resolve_regular(month_arg, i64::from(today.month()))
        .ok_or_else(|| invalid_args(&[year_arg, month_arg]))?;

    Ok(month_dir(make_date(year, month, 1)?))
}

fn parse_three(
    year_arg: &str,
    month_arg: &str,
    day_arg: &str,
    today: NaiveDate,
) -> Result<EntryPath> {
    let year = resolve_regular(year_arg, i64::from(today.year()))
        .ok_or_else(|| invalid_args(&[year_arg]))?;
    let month = resolve_regular(month_arg, i64::from(today.month()))
        .ok_or_else(|| invalid_args(&[year_arg, month_arg]))?;
    let day = resolve_regular(day_arg, i64::from(today.day()))
        .ok_or_else(|| invalid_args(&[year_arg, month_arg, day_arg]))?;

    Ok(entry_file(make_date(year, month, day)?))
}

/// Resolve a regular date-field argument against today's value of that field.
///
/// - `.` → today's value
/// - explicitly signed number (`+1`, `-2`) → today's value plus the offset
/// - unsigned digits → the absolute value
/// - anything else → `None`
///
/// A resolved value of zero is valid: `0`, `+0`, `-0`, and offsets that sum to
/// zero all resolve normally and are left to calendar validation.
///
/// Values are resolved in `i64` so that any digit run it can represent reaches
/// calendar validation instead of being mistaken for a malformed argument.
fn resolve_regular(arg: &str, today_value: i64) -> Option<i64> {
    if arg == "." {
        return Some(today_value);
    }

    if let Some(offset) = parse_signed(arg) {
        return today_value.checked_add(offset);
    }

    parse_unsigned(arg)
}

/// Parse an explicitly signed integer (`+12`, `-3`). An unsigned number is not
/// an offset; it means an absolute value.
fn parse_signed(arg: &str) -> Option<i64> {
    let digits = arg.strip_prefix(['+', '-'])?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    arg.parse().ok()
}

fn parse_unsigned(arg: &str) -> Option<i64> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    arg.parse().ok()
}

/// Validate a resolved year/month/day combination as a calendar date
fn make_date(year: i64, month: i64, day: i64) -> Result<NaiveDate> {
    i32::try_from(year)
        .ok()
        .zip(u32::try_from(month).ok())
        .zip(u32::try_from(day).ok())
        .and_then(|((y, m), d)| NaiveDate::from_ymd_opt(y, m, d))
        .ok_or(Error::InvalidDate { year, month, day })
}

fn invalid_args(args: &[&str]) -> Error {
    Error::InvalidArgs(args.iter().map(|a| a.to_string()).collect())
}

fn year_dir(date: NaiveDate) -> EntryPath {
    EntryPath {
        path: PathBuf::from(date.year().to_string()),
        is_dir: true,
    }
}

fn month_dir(date: NaiveDate) -> EntryPath {
    EntryPath {
        path: [date.year().to_string(), format!("{:02}", date.month())]
            .iter()
            .collect(),
        is_dir: true,
    }
}

fn entry_file(date: NaiveDate) -> EntryPath {
    EntryPath {
        path: [
            date.year().to_string(),
            format!("{:02}", date.month()),
            format!("{:02}", date.day()),
        ]
        .iter()
        .collect(),
        is_dir: false,
    }
}
