//! Response types for the tool rental API.
//!
//! This module defines the success envelope for `/checkout`, the error
//! response structure, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RentalError;
use crate::models::RentalAgreement;

/// Successful response body of the `/checkout` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    /// Unique identifier for this agreement.
    pub agreement_id: Uuid,
    /// When the agreement was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the agreement.
    pub engine_version: String,
    /// The computed agreement.
    pub agreement: RentalAgreement,
    /// The agreement rendered as printable text.
    pub summary: String,
}

impl CheckoutResponse {
    /// Wraps an agreement with a fresh identifier and timestamp.
    pub fn new(agreement: RentalAgreement) -> Self {
        Self {
            agreement_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            summary: agreement.to_string(),
            agreement,
        }
    }
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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
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

impl From<RentalError> for ApiErrorResponse {
    fn from(error: RentalError) -> Self {
        let message = error.to_string();
        match error {
            RentalError::ConfigNotFound { .. } | RentalError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            RentalError::InvalidTool { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid inventory entry", message),
            },
            RentalError::ToolNotFound { available, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "TOOL_NOT_FOUND",
                    message,
                    format!("Available codes: {}", available),
                ),
            },
            RentalError::InvalidRentalDays { .. } | RentalError::RentalTooLong { .. } => {
                ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::new("INVALID_RENTAL_DAYS", message),
                }
            }
            RentalError::AmountOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("AMOUNT_OUT_OF_RANGE", message),
            },
            RentalError::InvalidDiscount { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_DISCOUNT", message),
            },
            RentalError::InvalidCheckoutDate { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_CHECKOUT_DATE", message),
            },
            RentalError::DateOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
        }
    }
}
