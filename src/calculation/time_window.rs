//! Time-window normalization.
//!
//! This module splits an event's absolute start/end timestamps into a
//! sequence of day segments, one per calendar day the event touches, so
//! that weekly pricing slots can be matched against each portion
//! independently.

use chrono::{Datelike, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of seconds in one hour, for exact duration arithmetic.
const SECONDS_PER_HOUR: i64 = 3600;

/// A portion of an event window lying within a single calendar day.
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::DaySegment;
/// use chrono::{NaiveDateTime, Weekday};
/// use rust_decimal::Decimal;
///
/// let segment = DaySegment {
///     start: NaiveDateTime::parse_from_str("2026-03-13 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2026-03-14 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     day_of_week: Weekday::Fri,
///     hours: Decimal::new(20, 1), // 2.0 hours
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySegment {
    /// The start of this segment.
    pub start: NaiveDateTime,
    /// The end of this segment (at most the following midnight).
    pub end: NaiveDateTime,
    /// The day of the week the segment falls on.
    pub day_of_week: Weekday,
    /// The duration of this segment in hours (seconds divided by 3600).
    pub hours: Decimal,
}

/// Splits an event window at midnight boundaries.
///
/// Every returned segment lies within a single calendar day. Segments are
/// chronological, gap-free, and overlap-free; together they partition the
/// window exactly at second granularity. A same-day event yields exactly
/// one segment.
///
/// The per-segment `hours` field is seconds divided by 3600, which rounds
/// non-terminating quotients at `Decimal` precision; durations spanning
/// multiple segments must therefore be derived from the endpoints rather
/// than by summing segment hours.
///
/// # Arguments
///
/// * `start` - The start of the event window
/// * `end` - The end of the event window
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] when `end` is not after `start`.
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::normalize_window;
/// use chrono::{NaiveDateTime, Weekday};
/// use rust_decimal::Decimal;
///
/// // Friday 22:00 to Saturday 02:00
/// let start = NaiveDateTime::parse_from_str("2026-03-13 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-03-14 02:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let segments = normalize_window(start, end).unwrap();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].day_of_week, Weekday::Fri);
/// assert_eq!(segments[0].hours, Decimal::new(20, 1)); // 2.0 hours
/// assert_eq!(segments[1].day_of_week, Weekday::Sat);
/// assert_eq!(segments[1].hours, Decimal::new(20, 1)); // 2.0 hours
/// ```
pub fn normalize_window(
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> EngineResult<Vec<DaySegment>> {
    if end <= start {
        return Err(EngineError::InvalidRange { start, end });
    }

    let mut segments = Vec::new();
    let mut current_start = start;

    while current_start < end {
        // Midnight at the end of the current day
        let next_midnight = (current_start.date() + chrono::Duration::days(1))
            .and_hms_opt(0, 0, 0)
            .ok_or(EngineError::InvalidRange { start, end })?;

        let segment_end = if next_midnight <= end {
            next_midnight
        } else {
            end
        };

        segments.push(DaySegment {
            start: current_start,
            end: segment_end,
            day_of_week: current_start.weekday(),
            hours: hours_between(current_start, segment_end),
        });

        current_start = segment_end;
    }

    Ok(segments)
}

/// Returns the duration between two datetimes in hours, as seconds
/// divided by 3600 at `Decimal` precision.
pub(crate) fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let seconds = (end - start).num_seconds();
    Decimal::new(seconds, 0) / Decimal::new(SECONDS_PER_HOUR, 0)
}
