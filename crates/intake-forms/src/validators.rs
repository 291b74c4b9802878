//! Low-level value checks used by the validation engine
//!
//! Format checks operate on the raw (untrimmed) value, mirroring what the user
//! typed. Blank detection trims whitespace first.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

// ASCII letters and whitespace.
static LETTERS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-Z\s]+$").expect("LETTERS_REGEX: invalid regex pattern")
});

// ASCII letters, digits and whitespace.
static ALPHANUMERIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-Z0-9\s]+$").expect("ALPHANUMERIC_REGEX: invalid regex pattern")
});

// ASCII digits only.
static NUMERIC_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("NUMERIC_REGEX: invalid regex pattern"));

/// Formats accepted for `datetime-local` style inputs.
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// `true` when the value is empty after trimming.
///
/// # Examples
///
/// ```
/// use intake_forms::validators::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("   \t"));
/// assert!(!is_blank(" a "));
/// ```
pub fn is_blank(value: &str) -> bool {
	value.trim().is_empty()
}

/// `true` when every character is an ASCII letter or whitespace.
///
/// # Examples
///
/// ```
/// use intake_forms::validators::is_letters;
///
/// assert!(is_letters("Summer Sale"));
/// assert!(!is_letters("Acme 2"));
/// assert!(!is_letters(""));
/// ```
pub fn is_letters(value: &str) -> bool {
	LETTERS_REGEX.is_match(value)
}

pub fn is_alphanumeric(value: &str) -> bool {
	ALPHANUMERIC_REGEX.is_match(value)
}

pub fn is_numeric(value: &str) -> bool {
	NUMERIC_REGEX.is_match(value)
}

/// Parse a date or date-time input value. A bare date is read as midnight.
pub fn parse_moment(value: &str) -> Option<NaiveDateTime> {
	let value = value.trim();
	for fmt in DATETIME_FORMATS {
		if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
			return Some(dt);
		}
	}
	NaiveDate::parse_from_str(value, DATE_FORMAT)
		.ok()
		.and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Order two date inputs.
///
/// Values that both parse are compared chronologically; otherwise the raw
/// strings are compared lexicographically, which is what ISO-formatted input
/// values reduce to anyway.
///
/// # Examples
///
/// ```
/// use intake_forms::validators::compare_dates;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_dates("2025-06-01", "2025-05-01"), Ordering::Greater);
/// assert_eq!(compare_dates("2025-06-01", "2025-06-01T00:00"), Ordering::Equal);
/// ```
pub fn compare_dates(start: &str, end: &str) -> Ordering {
	match (parse_moment(start), parse_moment(end)) {
		(Some(start), Some(end)) => start.cmp(&end),
		_ => start.cmp(end),
	}
}
