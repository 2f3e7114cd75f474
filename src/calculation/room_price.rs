//! Per-room price aggregation.
//!
//! A room's contribution is computed by normalizing the event window into
//! day segments, matching each segment to a pricing slot, resolving
//! exclusivity, and then grouping consecutive segments governed by the
//! same pricing definition into *pricing runs*. Each run is evaluated once
//! with its total duration, which is what makes a 30-hour stay two
//! day-units regardless of where midnight falls, and keeps a flat base
//! price from doubling across a multi-day window, while still letting one
//! booking straddle a day-rate slot and an hour-rate slot priced
//! separately.
//!
//! Run durations are derived from the run's endpoints, not by summing the
//! per-segment hour values, so partitioning at midnight never changes a
//! billed duration. A `Once`-typed charge applies at most once per
//! governing definition, even when an intervening slot splits its portions
//! into non-consecutive runs.

use chrono::NaiveDateTime;

use crate::error::EngineResult;
use crate::models::{BookingRoom, LineSubject, PriceLine, PriceType};

use super::exclusivity::resolve_pricing;
use super::price_evaluation::evaluate_price;
use super::slot_matching::match_segments;
use super::time_window::{hours_between, normalize_window};

/// A maximal stretch of consecutive day segments governed by the same
/// pricing assignment.
struct PricingRun {
    /// Index into the room's slot list, or `None` for base-priced runs.
    slot_index: Option<usize>,
    /// The start of the run.
    start: NaiveDateTime,
    /// The end of the run.
    end: NaiveDateTime,
}

/// Computes the quote lines for one room over the event window.
///
/// Returns one [`PriceLine`] per pricing run (flat-charged runs sharing a
/// governing definition collapse into one line), or `Ok(None)` when any
/// run resolves to no usable pricing (the room, and hence the booking, is
/// unpriceable).
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidRange`] for an empty or
/// reversed window and [`crate::error::EngineError::ExclusivityUnavailable`]
/// when the room is booked exclusively under a pricing definition that
/// does not offer exclusivity.
pub fn price_room(
    start: NaiveDateTime,
    end: NaiveDateTime,
    persons: u32,
    room: &BookingRoom,
) -> EngineResult<Option<Vec<PriceLine>>> {
    let segments = normalize_window(start, end)?;
    let assignments = match_segments(&segments, &room.pricing_slots);

    let mut runs: Vec<PricingRun> = Vec::new();
    for (segment, assignment) in segments.iter().zip(&assignments) {
        match runs.last_mut() {
            Some(run) if run.slot_index == *assignment => run.end = segment.end,
            _ => runs.push(PricingRun {
                slot_index: *assignment,
                start: segment.start,
                end: segment.end,
            }),
        }
    }

    let mut lines: Vec<PriceLine> = Vec::with_capacity(runs.len());
    // Assignments that already produced a flat line, with the line index
    let mut once_lines: Vec<(Option<usize>, usize)> = Vec::new();
    for run in &runs {
        let slot = run.slot_index.map(|index| &room.pricing_slots[index]);
        let Some(pricing) = resolve_pricing(room, slot)? else {
            return Ok(None);
        };
        let hours = hours_between(run.start, run.end);

        if pricing.price_type == PriceType::Once {
            if let Some(&(_, line_index)) = once_lines
                .iter()
                .find(|(assignment, _)| *assignment == run.slot_index)
            {
                // The flat charge was already billed for this definition;
                // only the covered duration accumulates
                lines[line_index].hours += hours;
                continue;
            }
            once_lines.push((run.slot_index, lines.len()));
        }

        lines.push(PriceLine {
            subject: LineSubject::Room,
            subject_id: room.id.clone(),
            price_type: pricing.price_type,
            pricing_label: pricing.pricing_label,
            unit_price: pricing.price,
            hours,
            amount: evaluate_price(pricing.price, pricing.price_type, hours, persons),
        });
    }

    Ok(Some(lines))
}
