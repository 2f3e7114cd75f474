//! Booking aggregation and public entry points.
//!
//! This module sums the per-room and per-package contributions into the
//! booking total. The itemized [`calculate_booking_quote`] is the primary
//! entry point; [`calculate_booking_total`] and [`calculate_room_price`]
//! are plain-number views of the same calculation.
//!
//! All three distinguish hard errors (invalid range, exclusivity
//! misconfiguration) from the *unpriceable* outcome: when any room lacks
//! both a matching slot and a usable base price, the result is `Ok(None)`
//! so callers can render "total cannot be calculated" instead of a wrong
//! zero.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Booking, BookingQuote, BookingRoom, QuoteTotals};

use super::package_price::price_package;
use super::room_price::price_room;
use super::time_window::hours_between;

/// Computes the itemized quote for a booking.
///
/// Rooms are priced over the normalized event window (one line per pricing
/// run); packages are priced over the whole window when eligible for the
/// booking's headcount. Lines appear rooms first, then packages, in input
/// order.
///
/// Returns `Ok(None)` when any room is unpriceable.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] for an empty or reversed window
/// and [`EngineError::ExclusivityUnavailable`] when a room is booked
/// exclusively under a pricing definition that does not offer exclusivity.
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::calculate_booking_quote;
/// use pricing_engine::models::{
///     Booking, BookingRoom, ExclusiveType, PriceType, PricingLabel,
/// };
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let booking = Booking {
///     start: NaiveDateTime::parse_from_str("2026-03-11 14:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2026-03-11 18:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     persons: 30,
///     rooms: vec![BookingRoom {
///         id: "room_saal".to_string(),
///         price: Some(Decimal::new(500, 0)),
///         price_type: Some(PriceType::Once),
///         pricing_label: PricingLabel::Exact,
///         pricing_slots: vec![],
///         exclusive: false,
///         exclusive_type: ExclusiveType::NotAvailable,
///         exclusive_price: None,
///         exclusive_price_type: None,
///         exclusive_pricing_label: None,
///     }],
///     packages: vec![],
/// };
///
/// let quote = calculate_booking_quote(&booking).unwrap().unwrap();
/// assert_eq!(quote.totals.total, Decimal::new(500, 0));
/// ```
pub fn calculate_booking_quote(booking: &Booking) -> EngineResult<Option<BookingQuote>> {
    if booking.end <= booking.start {
        return Err(EngineError::InvalidRange {
            start: booking.start,
            end: booking.end,
        });
    }

    let mut lines = Vec::new();
    let mut rooms_total = Decimal::ZERO;

    for room in &booking.rooms {
        let Some(room_lines) = price_room(booking.start, booking.end, booking.persons, room)?
        else {
            return Ok(None);
        };
        rooms_total += room_lines.iter().map(|line| line.amount).sum::<Decimal>();
        lines.extend(room_lines);
    }

    let window_hours = hours_between(booking.start, booking.end);
    let mut packages_total = Decimal::ZERO;

    for package in &booking.packages {
        if let Some(line) = price_package(package, window_hours, booking.persons) {
            packages_total += line.amount;
            lines.push(line);
        }
    }

    Ok(Some(BookingQuote {
        lines,
        totals: QuoteTotals {
            rooms_total,
            packages_total,
            total: rooms_total + packages_total,
        },
    }))
}

/// Computes the booking total as a plain amount.
///
/// Returns `Ok(None)` when the booking is unpriceable. See
/// [`calculate_booking_quote`] for the itemized form and the error
/// contract.
pub fn calculate_booking_total(booking: &Booking) -> EngineResult<Option<Decimal>> {
    Ok(calculate_booking_quote(booking)?.map(|quote| quote.totals.total))
}

/// Computes the price of a single room over an event window.
///
/// Returns `Ok(None)` when the room is unpriceable.
///
/// # Errors
///
/// Same contract as [`calculate_booking_quote`].
pub fn calculate_room_price(
    start: NaiveDateTime,
    end: NaiveDateTime,
    persons: u32,
    room: &BookingRoom,
) -> EngineResult<Option<Decimal>> {
    Ok(price_room(start, end, persons, room)?
        .map(|lines| lines.iter().map(|line| line.amount).sum()))
}
