//! Pricing-slot matching.
//!
//! This module assigns pricing slots to the day segments of an event
//! window. Slot windows recur weekly and may wrap across midnight and
//! across the week boundary, so all comparisons are done with explicit
//! modular arithmetic over seconds-of-week rather than string or
//! day-number comparison.
//!
//! Week positions are measured in seconds from Sunday 00:00:00, matching
//! the 0-6 day indices of the persisted records (0 = Sunday).

use chrono::{Timelike, Weekday};

use crate::models::PricingSlot;

use super::time_window::DaySegment;

/// Number of seconds in one week.
pub const WEEK_SECONDS: i64 = 7 * 24 * 3600;

/// Number of seconds in one day.
const DAY_SECONDS: i64 = 24 * 3600;

/// Returns the 0-based day index used by persisted records (0 = Sunday).
fn day_index(day: Weekday) -> i64 {
    day.num_days_from_sunday() as i64
}

/// A slot's recurring window as a half-open interval of week seconds.
///
/// `start` lies in `[0, WEEK_SECONDS)`; `end` is strictly greater than
/// `start` and at most `start + WEEK_SECONDS`, so a wrapping window is
/// represented by an end beyond the week length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WeekInterval {
    start: i64,
    end: i64,
}

impl WeekInterval {
    /// Total width of the interval in seconds.
    fn span(&self) -> i64 {
        self.end - self.start
    }

    /// Returns whether this interval overlaps the half-open interval
    /// `[other_start, other_end)`, taking weekly recurrence into account.
    fn overlaps(&self, other_start: i64, other_end: i64) -> bool {
        // A wrapping interval extends past the week end; test both the
        // direct position and the copy shifted one week back so segments
        // early in the week see the wrapped tail.
        for shift in [0, -WEEK_SECONDS] {
            let start = self.start + shift;
            let end = self.end + shift;
            if start.max(other_start) < end.min(other_end) {
                return true;
            }
        }
        false
    }
}

/// Computes the week-seconds interval covered by a slot.
///
/// An end position at or before the start position wraps forward through
/// the week boundary; equal endpoints denote a full-week window.
fn slot_interval(slot: &PricingSlot) -> WeekInterval {
    let start =
        day_index(slot.start_day) * DAY_SECONDS + slot.start_time.num_seconds_from_midnight() as i64;
    let mut end =
        day_index(slot.end_day) * DAY_SECONDS + slot.end_time.num_seconds_from_midnight() as i64;
    if end <= start {
        end += WEEK_SECONDS;
    }
    WeekInterval { start, end }
}

/// Computes the week-seconds interval covered by a day segment.
///
/// Segments never cross midnight, so the interval is at most one day wide
/// and its end is at most `WEEK_SECONDS` (a segment ending at midnight
/// before Sunday closes the week).
fn segment_interval(segment: &DaySegment) -> (i64, i64) {
    let start = day_index(segment.day_of_week) * DAY_SECONDS
        + segment.start.time().num_seconds_from_midnight() as i64;
    let end = start + (segment.end - segment.start).num_seconds();
    (start, end)
}

/// Assigns each day segment the pricing slot that governs it.
///
/// Returns one entry per segment: the index into `slots` of the winning
/// slot, or `None` when no slot window intersects the segment (the caller
/// then prices the segment from the room's base price).
///
/// When multiple slots intersect a segment, the slot with the narrowest
/// total window wins; slots of equal width are broken by earliest position
/// in the input list. This tie-break is deterministic but inferred from
/// observed data rather than a confirmed business rule (see DESIGN.md).
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::{match_segments, normalize_window};
/// use pricing_engine::models::{ExclusiveType, PriceType, PricingLabel, PricingSlot};
/// use chrono::{NaiveDateTime, NaiveTime, Weekday};
/// use rust_decimal::Decimal;
///
/// // Friday 18:00 to Saturday 02:00 slot
/// let slot = PricingSlot {
///     start_day: Weekday::Fri,
///     end_day: Weekday::Sat,
///     start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
///     price: Decimal::new(120, 0),
///     price_type: PriceType::Hour,
///     pricing_label: PricingLabel::Exact,
///     exclusive_type: ExclusiveType::NotAvailable,
///     exclusive_price: None,
///     exclusive_price_type: None,
///     exclusive_pricing_label: None,
/// };
///
/// // Friday 23:00 to Saturday 01:00 event: both halves match the slot
/// let start = NaiveDateTime::parse_from_str("2026-03-13 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-03-14 01:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let segments = normalize_window(start, end).unwrap();
///
/// let assignments = match_segments(&segments, &[slot]);
/// assert_eq!(assignments, vec![Some(0), Some(0)]);
/// ```
pub fn match_segments(segments: &[DaySegment], slots: &[PricingSlot]) -> Vec<Option<usize>> {
    let intervals: Vec<WeekInterval> = slots.iter().map(slot_interval).collect();

    segments
        .iter()
        .map(|segment| {
            let (seg_start, seg_end) = segment_interval(segment);
            intervals
                .iter()
                .enumerate()
                .filter(|(_, interval)| interval.overlaps(seg_start, seg_end))
                .min_by_key(|(index, interval)| (interval.span(), *index))
                .map(|(index, _)| index)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::normalize_window;
    use crate::models::{ExclusiveType, PriceType, PricingLabel};
    use chrono::{NaiveDateTime, NaiveTime};
    use rust_decimal::Decimal;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M:%S").unwrap()
    }

    fn make_slot(
        start_day: Weekday,
        start_time: &str,
        end_day: Weekday,
        end_time: &str,
    ) -> PricingSlot {
        PricingSlot {
            start_day,
            end_day,
            start_time: make_time(start_time),
            end_time: make_time(end_time),
            price: Decimal::new(100, 0),
            price_type: PriceType::Hour,
            pricing_label: PricingLabel::Exact,
            exclusive_type: ExclusiveType::NotAvailable,
            exclusive_price: None,
            exclusive_price_type: None,
            exclusive_pricing_label: None,
        }
    }

    fn segments_for(start: &str, end: &str) -> Vec<DaySegment> {
        let (start_date, start_time) = start.split_once(' ').unwrap();
        let (end_date, end_time) = end.split_once(' ').unwrap();
        normalize_window(
            make_datetime(start_date, start_time),
            make_datetime(end_date, end_time),
        )
        .unwrap()
    }

    // ==========================================================================
    // SM-001: segment inside a same-day slot matches
    // ==========================================================================
    #[test]
    fn test_sm_001_segment_inside_slot_matches() {
        // 2026-03-11 is a Wednesday; slot covers Wednesday business hours
        let slots = vec![make_slot(Weekday::Wed, "08:00:00", Weekday::Wed, "20:00:00")];
        let segments = segments_for("2026-03-11 14:00:00", "2026-03-11 18:30:00");

        assert_eq!(match_segments(&segments, &slots), vec![Some(0)]);
    }

    // ==========================================================================
    // SM-002: segment outside every slot is unmatched
    // ==========================================================================
    #[test]
    fn test_sm_002_segment_outside_slot_unmatched() {
        // Slot covers Monday only; event is on Wednesday
        let slots = vec![make_slot(Weekday::Mon, "00:00:00", Weekday::Mon, "23:59:59")];
        let segments = segments_for("2026-03-11 14:00:00", "2026-03-11 18:30:00");

        assert_eq!(match_segments(&segments, &slots), vec![None]);
    }

    // ==========================================================================
    // SM-003: Friday-evening slot wrapping past midnight matches both
    // halves of a Friday 23:30 to Saturday 01:00 event
    // ==========================================================================
    #[test]
    fn test_sm_003_midnight_wrap_matches_both_halves() {
        let slots = vec![make_slot(Weekday::Fri, "18:00:00", Weekday::Sat, "02:00:00")];
        // 2026-03-13 is a Friday
        let segments = segments_for("2026-03-13 23:30:00", "2026-03-14 01:00:00");

        assert_eq!(segments.len(), 2);
        assert_eq!(match_segments(&segments, &slots), vec![Some(0), Some(0)]);
    }

    // ==========================================================================
    // SM-004: week-boundary wrap (Saturday 22:00 to Sunday 06:00) matches
    // the early-Sunday segment
    // ==========================================================================
    #[test]
    fn test_sm_004_week_boundary_wrap() {
        let slots = vec![make_slot(Weekday::Sat, "22:00:00", Weekday::Sun, "06:00:00")];
        // 2026-03-14 is a Saturday, 2026-03-15 a Sunday
        let segments = segments_for("2026-03-14 23:00:00", "2026-03-15 03:00:00");

        assert_eq!(segments.len(), 2);
        assert_eq!(match_segments(&segments, &slots), vec![Some(0), Some(0)]);
    }

    // ==========================================================================
    // SM-005: Sunday 23:00 to Monday 01:00 slot matches across the
    // reference-day boundary in the other direction
    // ==========================================================================
    #[test]
    fn test_sm_005_sunday_to_monday_wrap() {
        let slots = vec![make_slot(Weekday::Sun, "23:00:00", Weekday::Mon, "01:00:00")];
        // 2026-03-15 is a Sunday
        let segments = segments_for("2026-03-15 23:15:00", "2026-03-16 00:45:00");

        assert_eq!(match_segments(&segments, &slots), vec![Some(0), Some(0)]);
    }

    // ==========================================================================
    // SM-006: narrowest slot wins on overlap
    // ==========================================================================
    #[test]
    fn test_sm_006_narrowest_slot_wins() {
        let slots = vec![
            // Broad all-week slot
            make_slot(Weekday::Sun, "00:00:00", Weekday::Sat, "23:59:59"),
            // Narrow Wednesday-evening slot
            make_slot(Weekday::Wed, "17:00:00", Weekday::Wed, "23:00:00"),
        ];
        let segments = segments_for("2026-03-11 18:00:00", "2026-03-11 22:00:00");

        assert_eq!(match_segments(&segments, &slots), vec![Some(1)]);
    }

    // ==========================================================================
    // SM-007: equal spans tie-break to the earlier list position
    // ==========================================================================
    #[test]
    fn test_sm_007_equal_span_first_in_list_wins() {
        let slots = vec![
            make_slot(Weekday::Wed, "10:00:00", Weekday::Wed, "22:00:00"),
            make_slot(Weekday::Wed, "08:00:00", Weekday::Wed, "20:00:00"),
        ];
        // Both 12-hour slots cover the segment
        let segments = segments_for("2026-03-11 14:00:00", "2026-03-11 18:00:00");

        assert_eq!(match_segments(&segments, &slots), vec![Some(0)]);
    }

    // ==========================================================================
    // SM-008: different segments of one event may match different slots
    // ==========================================================================
    #[test]
    fn test_sm_008_segments_match_different_slots() {
        let slots = vec![
            make_slot(Weekday::Fri, "00:00:00", Weekday::Fri, "23:59:59"),
            make_slot(Weekday::Sat, "00:00:00", Weekday::Sat, "23:59:59"),
        ];
        let segments = segments_for("2026-03-13 20:00:00", "2026-03-14 04:00:00");

        assert_eq!(match_segments(&segments, &slots), vec![Some(0), Some(1)]);
    }

    // ==========================================================================
    // SM-009: equal endpoints denote a full-week slot
    // ==========================================================================
    #[test]
    fn test_sm_009_equal_endpoints_cover_full_week() {
        let slots = vec![make_slot(Weekday::Mon, "12:00:00", Weekday::Mon, "12:00:00")];

        // Any segment anywhere in the week matches
        let wednesday = segments_for("2026-03-11 14:00:00", "2026-03-11 18:00:00");
        assert_eq!(match_segments(&wednesday, &slots), vec![Some(0)]);

        let sunday = segments_for("2026-03-15 02:00:00", "2026-03-15 04:00:00");
        assert_eq!(match_segments(&sunday, &slots), vec![Some(0)]);
    }

    // ==========================================================================
    // SM-010: no slots means every segment is unmatched
    // ==========================================================================
    #[test]
    fn test_sm_010_no_slots_all_unmatched() {
        let segments = segments_for("2026-03-13 20:00:00", "2026-03-14 04:00:00");
        assert_eq!(match_segments(&segments, &[]), vec![None, None]);
    }

    #[test]
    fn test_slot_touching_segment_boundary_does_not_match() {
        // Slot ends exactly where the segment starts
        let slots = vec![make_slot(Weekday::Wed, "08:00:00", Weekday::Wed, "14:00:00")];
        let segments = segments_for("2026-03-11 14:00:00", "2026-03-11 18:00:00");

        assert_eq!(match_segments(&segments, &slots), vec![None]);
    }

    #[test]
    fn test_mon_to_fri_slot_matches_weekday_segment() {
        let slots = vec![make_slot(Weekday::Mon, "00:00:00", Weekday::Fri, "23:59:59")];

        let tuesday = segments_for("2026-03-10 09:00:00", "2026-03-10 17:00:00");
        assert_eq!(match_segments(&tuesday, &slots), vec![Some(0)]);

        let saturday = segments_for("2026-03-14 09:00:00", "2026-03-14 17:00:00");
        assert_eq!(match_segments(&saturday, &slots), vec![None]);
    }

    #[test]
    fn test_week_interval_spans() {
        let narrow = slot_interval(&make_slot(
            Weekday::Wed,
            "17:00:00",
            Weekday::Wed,
            "23:00:00",
        ));
        assert_eq!(narrow.span(), 6 * 3600);

        let wrapping = slot_interval(&make_slot(
            Weekday::Sat,
            "22:00:00",
            Weekday::Sun,
            "06:00:00",
        ));
        assert_eq!(wrapping.span(), 8 * 3600);

        let full_week = slot_interval(&make_slot(
            Weekday::Mon,
            "12:00:00",
            Weekday::Mon,
            "12:00:00",
        ));
        assert_eq!(full_week.span(), WEEK_SECONDS);
    }
}
