//! Calendar-date parsing and day arithmetic.
//!
//! Dates are plain calendar days (`NaiveDate`); no time zone or clock is
//! consulted here. Callers supply "today".

use chrono::NaiveDate;

use crate::error::{DomainError, DomainResult};

const ISO_DATE_LEN: usize = 10;

/// Parse a strict ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// chrono's `%Y-%m-%d` alone accepts signed years and unpadded fields, so the
/// shape is checked before handing off to it.
pub fn parse_iso_date(input: &str) -> DomainResult<NaiveDate> {
    let bytes = input.as_bytes();
    if bytes.len() != ISO_DATE_LEN {
        return Err(DomainError::invalid_date(input, "expected YYYY-MM-DD"));
    }

    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return Err(DomainError::invalid_date(input, "expected YYYY-MM-DD"));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|e| DomainError::invalid_date(input, e.to_string()))
}

/// Parse an optional date field, treating blank input as absent.
pub fn parse_optional_iso_date(input: Option<&str>) -> DomainResult<Option<NaiveDate>> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_iso_date(s).map(Some),
    }
}

/// Whole calendar days from `today` until `date` (negative once `date` has passed).
pub fn whole_days_between(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}
