//! HTTP request handlers for the tool rental API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::checkout::{CheckoutRequest, process_checkout};
use crate::models::Tool;

use super::request::CheckoutRequestBody;
use super::response::{ApiError, ApiErrorResponse, CheckoutResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/checkout", post(checkout_handler))
        .route("/tools", get(tools_handler))
        .with_state(state)
}

/// Handler for GET /tools.
///
/// Lists every tool in the inventory, ordered by code.
async fn tools_handler(State(state): State<AppState>) -> Json<Vec<Tool>> {
    Json(state.inventory().tools().cloned().collect())
}

/// Handler for POST /checkout endpoint.
///
/// Accepts a checkout request and returns the computed rental agreement.
async fn checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequestBody>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing checkout request");

    // Handle JSON parsing errors
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
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

    let request: CheckoutRequest = body.into();

    let start_time = Instant::now();
    match process_checkout(state.inventory(), &request) {
        Ok(agreement) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                tool_code = %agreement.tool().code,
                rental_days = agreement.rental_days(),
                charge_days = agreement.charge_days(),
                final_charge = %agreement.final_charge(),
                duration_us = duration.as_micros(),
                "Checkout completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(CheckoutResponse::new(agreement)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                tool_code = %request.tool_code,
                error = %err,
                "Checkout rejected"
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
