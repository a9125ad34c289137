//! Start-time composition for events.
//!
//! Clients submit a calendar date and, optionally, a separate time of day.
//! Storage holds one timestamp of the shape `YYYY-MM-DDTHH:MM:SS`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::CoreError;

/// Output shape of a composed timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted time-of-day inputs, tried in order.
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Combine a date and an optional time of day into a single timestamp.
///
/// A missing or blank time defaults to midnight.
///
/// ```
/// use gatherly_core::schedule::compose_timestamp;
///
/// assert_eq!(compose_timestamp("2025-12-10", None).unwrap(), "2025-12-10T00:00:00");
/// assert_eq!(
///     compose_timestamp("2025-11-20", Some("15:30")).unwrap(),
///     "2025-11-20T15:30:00"
/// );
/// ```
pub fn compose_timestamp(date: &str, time_of_day: Option<&str>) -> Result<String, CoreError> {
    let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!("Invalid date '{date}': expected YYYY-MM-DD"))
    })?;

    let time = match time_of_day.map(str::trim).filter(|t| !t.is_empty()) {
        Some(raw) => parse_time_of_day(raw)?,
        None => NaiveTime::MIN,
    };

    Ok(NaiveDateTime::new(date, time)
        .format(TIMESTAMP_FORMAT)
        .to_string())
}

/// Resolve a timestamp column (`start_time`, `end_time`) for a write.
///
/// - date and time: combined.
/// - date only: midnight on that date.
/// - time only: rejected, a time of day cannot be stored on its own.
/// - neither: `None`, the column is left untouched.
pub fn resolve_timestamp(
    date: Option<&str>,
    time_of_day: Option<&str>,
) -> Result<Option<String>, CoreError> {
    let date = date.map(str::trim).filter(|d| !d.is_empty());
    let time = time_of_day.map(str::trim).filter(|t| !t.is_empty());

    match (date, time) {
        (Some(d), t) => compose_timestamp(d, t).map(Some),
        (None, Some(_)) => Err(CoreError::Validation(
            "date is required when a time is provided".to_string(),
        )),
        (None, None) => Ok(None),
    }
}

fn parse_time_of_day(raw: &str) -> Result<NaiveTime, CoreError> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| CoreError::Validation(format!("Invalid time '{raw}': expected HH:MM")))
}
