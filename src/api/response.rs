//! Response types for the booking quote API.
//!
//! This module defines the quote response body, the error response
//! structures, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{PriceLine, QuoteTotals};

/// Response body for a successful quote calculation.
///
/// `totals` is `null` for the unpriceable outcome: the booking parameters
/// were valid but no price could be derived, and the caller should render
/// "total cannot be calculated" rather than a zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was computed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the quote.
    pub engine_version: String,
    /// ISO currency code of all amounts, echoed from the catalog.
    pub currency: String,
    /// The start of the quoted event window.
    pub start: NaiveDateTime,
    /// The end of the quoted event window.
    pub end: NaiveDateTime,
    /// The quoted headcount.
    pub persons: u32,
    /// The itemized price lines; empty when the booking is unpriceable.
    pub lines: Vec<PriceLine>,
    /// Aggregated totals, or `null` when the booking is unpriceable.
    pub totals: Option<QuoteTotals>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidRange { start, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RANGE",
                    format!("Invalid event range: end {} is not after start {}", end, start),
                    "The event must end after it starts",
                ),
            },
            EngineError::UnknownPriceType { tag } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_PRICE_TYPE",
                    format!("Unknown price type: {}", tag),
                    "The catalog record carries an unrecognized price-type tag",
                ),
            },
            EngineError::UnknownPricingLabel { tag } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_PRICING_LABEL",
                    format!("Unknown pricing label: {}", tag),
                    "The catalog record carries an unrecognized pricing-label tag",
                ),
            },
            EngineError::UnknownExclusiveType { tag } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_EXCLUSIVE_TYPE",
                    format!("Unknown exclusivity type: {}", tag),
                    "The catalog record carries an unrecognized exclusivity tag",
                ),
            },
            EngineError::InvalidDayOfWeek { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "INVALID_DAY_OF_WEEK",
                    format!("Invalid day of week: {} (expected 0-6, 0 = Sunday)", value),
                ),
            },
            EngineError::InvalidTimeOfDay { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "INVALID_TIME_OF_DAY",
                    format!("Invalid time of day: '{}' (expected HH:MM:SS)", value),
                ),
            },
            EngineError::ExclusivityUnavailable { room_id } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "EXCLUSIVITY_UNAVAILABLE",
                    format!("Exclusivity is not available for room '{}'", room_id),
                    "The room was requested exclusively but its pricing does not define exclusivity",
                ),
            },
            EngineError::CatalogNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATALOG_ERROR",
                    "Catalog error",
                    format!("Catalog file not found: {}", path),
                ),
            },
            EngineError::CatalogParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATALOG_ERROR",
                    "Catalog parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::RoomNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "ROOM_NOT_FOUND",
                    format!("Room not found: {}", id),
                    format!("The room ID '{}' does not exist in the venue catalog", id),
                ),
            },
            EngineError::PackageNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "PACKAGE_NOT_FOUND",
                    format!("Package not found: {}", id),
                    format!("The package ID '{}' does not exist in the venue catalog", id),
                ),
            },
        }
    }
}
