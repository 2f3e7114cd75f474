//! Calculation logic for the booking price calculation engine.
//!
//! This module contains the pure calculation components: time-window
//! normalization, pricing-slot matching over seconds-of-week, price-type
//! evaluation, exclusivity resolution, and the per-room, per-package, and
//! booking-level aggregation. Every function here is a pure function of
//! its arguments; no component holds state between calls.

mod booking_total;
mod exclusivity;
mod package_price;
mod price_evaluation;
mod room_price;
mod slot_matching;
mod time_window;

pub use booking_total::{calculate_booking_quote, calculate_booking_total, calculate_room_price};
pub use exclusivity::{EffectivePricing, resolve_pricing};
pub use package_price::price_package;
pub use price_evaluation::evaluate_price;
pub use room_price::price_room;
pub use slot_matching::{WEEK_SECONDS, match_segments};
pub use time_window::{DaySegment, normalize_window};
