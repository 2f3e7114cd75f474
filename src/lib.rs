//! Booking Price Calculation Engine for Event Venues
//!
//! This crate derives the monetary total a customer owes for an event-venue
//! booking: it resolves time-dependent, overlapping, exclusivity-sensitive
//! pricing rules for each reserved room, adds eligible add-on packages, and
//! returns a single deterministic amount used for customer-facing quotes
//! and partner-facing revenue management.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod catalog;
pub mod error;
pub mod models;
