//! HTTP request handlers for the booking quote API.
//!
//! This module contains the handler functions for all API endpoints. The
//! handler resolves catalog records, converts them into the engine's value
//! objects, and delegates the actual calculation to the pure functions in
//! [`crate::calculation`]; no pricing logic lives here.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_booking_quote;
use crate::error::EngineResult;
use crate::models::Booking;

use super::request::QuoteRequest;
use super::response::{ApiError, ApiErrorResponse, QuoteResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .with_state(state)
}

/// Handler for POST /quote endpoint.
///
/// Accepts a quote request and returns the itemized booking quote, with
/// `totals: null` when the booking is unpriceable.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match perform_quote(&request, &state) {
        Ok(response) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                quote_id = %response.quote_id,
                rooms_count = request.rooms.len(),
                persons = request.event.persons,
                total = ?response.totals.as_ref().map(|t| t.total),
                duration_us = duration.as_micros(),
                "Quote completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Quote failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Resolves the request against the catalog and runs the calculation.
fn perform_quote(request: &QuoteRequest, state: &AppState) -> EngineResult<QuoteResponse> {
    let catalog = state.catalog();

    let mut rooms = Vec::with_capacity(request.rooms.len());
    for selection in &request.rooms {
        let record = catalog.get_room(&selection.id)?;
        rooms.push(record.to_booking_room(selection.exclusive)?);
    }

    let mut packages = Vec::with_capacity(request.packages.len());
    for package_id in &request.packages {
        let record = catalog.get_package(package_id)?;
        packages.push(record.to_booking_package()?);
    }

    let booking = Booking {
        start: request.event.start,
        end: request.event.end,
        persons: request.event.persons,
        rooms,
        packages,
    };

    let quote = calculate_booking_quote(&booking)?;
    let (lines, totals) = match quote {
        Some(quote) => (quote.lines, Some(quote.totals)),
        None => (Vec::new(), None),
    };

    Ok(QuoteResponse {
        quote_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        currency: catalog.venue().currency.clone(),
        start: booking.start,
        end: booking.end,
        persons: booking.persons,
        lines,
        totals,
    })
}
