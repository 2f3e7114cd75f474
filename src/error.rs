//! Error types for the booking price calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during price calculation and
//! catalog loading.
//!
//! Note that an *unpriceable* booking is not an error: the aggregation
//! entry points return `Ok(None)` for that outcome so callers can render
//! "cannot be calculated" instead of a wrong zero.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the booking price calculation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use pricing_engine::error::EngineError;
///
/// let error = EngineError::UnknownPriceType {
///     tag: "per_minute".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown price type: per_minute");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The event window is empty or reversed (end is not after start).
    #[error("Invalid event range: end {end} is not after start {start}")]
    InvalidRange {
        /// The start of the event window.
        start: NaiveDateTime,
        /// The end of the event window.
        end: NaiveDateTime,
    },

    /// A persisted price-type tag was not one of the recognized values.
    #[error("Unknown price type: {tag}")]
    UnknownPriceType {
        /// The unrecognized tag.
        tag: String,
    },

    /// A persisted pricing-label tag was not one of the recognized values.
    #[error("Unknown pricing label: {tag}")]
    UnknownPricingLabel {
        /// The unrecognized tag.
        tag: String,
    },

    /// A persisted exclusivity tag was not one of the recognized values.
    #[error("Unknown exclusivity type: {tag}")]
    UnknownExclusiveType {
        /// The unrecognized tag.
        tag: String,
    },

    /// A day-of-week value was outside 0..=6.
    #[error("Invalid day of week: {value} (expected 0-6, 0 = Sunday)")]
    InvalidDayOfWeek {
        /// The out-of-range value.
        value: i64,
    },

    /// A time-of-day string could not be parsed as HH:MM:SS.
    #[error("Invalid time of day: '{value}' (expected HH:MM:SS)")]
    InvalidTimeOfDay {
        /// The unparseable value.
        value: String,
    },

    /// An exclusive booking was requested for a room whose governing
    /// pricing does not define exclusivity parameters.
    #[error("Exclusivity is not available for room '{room_id}'")]
    ExclusivityUnavailable {
        /// The ID of the room.
        room_id: String,
    },

    /// Catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A requested room ID does not exist in the catalog.
    #[error("Room not found: {id}")]
    RoomNotFound {
        /// The room ID that was not found.
        id: String,
    },

    /// A requested package ID does not exist in the catalog.
    #[error("Package not found: {id}")]
    PackageNotFound {
        /// The package ID that was not found.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
