//! Date utilities: parsing user input and stored values.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Lenient parser for values read back from the progress file.
/// Accepts `YYYY-MM-DD` and `YYYY-MM-DD HH:MM:SS` (time dropped).
pub fn parse_stored_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    parse_date(s).or_else(|| {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
            .ok()
            .map(|dt| dt.date())
    })
}

/// Parse a date given on the command line: `YYYY-MM-DD` or `today`.
pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("today") {
        return Ok(today());
    }
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    if let Some(s) = input {
        Ok(Some(parse_date_arg(s)?))
    } else {
        Ok(None)
    }
}
