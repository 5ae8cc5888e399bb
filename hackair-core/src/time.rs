use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};

use crate::HackairError;

/// Timestamp layout used by the remote API, both in `date_str` and in request parameters.
pub const API_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Drop any sub-second component. Truncates, never rounds.
#[must_use]
pub fn truncate_to_seconds(t: DateTime<Utc>) -> DateTime<Utc> {
    t.trunc_subsecs(0)
}

/// Parse a caller-supplied instant such as `2016-10-31T06:33:44.866Z`.
///
/// The input must be RFC 3339 with an explicit UTC offset; the result is
/// normalised to UTC and truncated to whole seconds.
///
/// # Errors
/// Returns `InvalidTimeFormat` when the input is not RFC 3339 or lacks an offset.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>, HackairError> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|t| truncate_to_seconds(t.with_timezone(&Utc)))
        .map_err(|_| HackairError::invalid_time(input))
}

/// Parse a remote `date_str` in the strict `YYYY-MM-DDTHH:MM:SSZ` layout.
///
/// # Errors
/// Returns `InvalidTimeFormat` for anything else, including fractional seconds.
pub fn parse_api_date(input: &str) -> Result<DateTime<Utc>, HackairError> {
    NaiveDateTime::parse_from_str(input, API_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| HackairError::invalid_time(input))
}

/// Milliseconds since the Unix epoch, as an integer.
#[must_use]
pub fn to_epoch_millis(t: DateTime<Utc>) -> i64 {
    t.timestamp_millis()
}

/// Convert a remote `date_str` straight to epoch milliseconds.
///
/// # Errors
/// Propagates `InvalidTimeFormat` from [`parse_api_date`].
pub fn api_date_to_epoch_millis(input: &str) -> Result<i64, HackairError> {
    parse_api_date(input).map(to_epoch_millis)
}

/// Render an instant in the remote API's request layout.
#[must_use]
pub fn format_api_date(t: DateTime<Utc>) -> String {
    t.format(API_DATE_FORMAT).to_string()
}
