//! HTTP API module for the booking price calculation engine.
//!
//! This module provides the REST endpoint for server-side quote
//! generation. The calculation core stays HTTP-free; this layer only
//! resolves catalog records and shapes requests and responses.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EventRequest, QuoteRequest, RoomSelection};
pub use response::{ApiError, QuoteResponse};
pub use state::AppState;
