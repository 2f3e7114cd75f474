//! Request types for the booking quote API.
//!
//! This module defines the JSON request structures for the `/quote`
//! endpoint. Rooms and packages are referenced by catalog ID; the handler
//! resolves them against the loaded catalog and converts the records into
//! the engine's value objects.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Request body for the `/quote` endpoint.
///
/// Contains the event parameters plus the catalog IDs of the rooms and
/// packages to price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The event to price.
    pub event: EventRequest,
    /// The rooms reserved for the event.
    pub rooms: Vec<RoomSelection>,
    /// IDs of the add-on packages selected for the event.
    #[serde(default)]
    pub packages: Vec<String>,
}

/// Event parameters in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    /// The start of the event window.
    pub start: NaiveDateTime,
    /// The end of the event window.
    pub end: NaiveDateTime,
    /// Number of persons attending.
    pub persons: u32,
}

/// A room selection in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSelection {
    /// The catalog ID of the room.
    pub id: String,
    /// Whether the booking reserves the room for sole use.
    #[serde(default)]
    pub exclusive: bool,
}
