//! Core data models for the booking price calculation engine.
//!
//! This module contains all the request-scoped value objects used
//! throughout the engine.

mod booking;
mod price_type;
mod pricing_slot;
mod quote;

pub use booking::{Booking, BookingPackage, BookingRoom};
pub use price_type::{ExclusiveType, PriceType, PricingLabel};
pub use pricing_slot::PricingSlot;
pub use quote::{BookingQuote, LineSubject, PriceLine, QuoteTotals};
