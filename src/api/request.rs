//! Request types for the tool rental API.
//!
//! This module defines the JSON request body of the `/checkout` endpoint.

use serde::{Deserialize, Serialize};

use crate::checkout::CheckoutRequest;

/// Request body for the `/checkout` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequestBody {
    /// The tool code to rent (e.g., "LADW").
    pub tool_code: String,
    /// Number of days to rent for.
    pub rental_days: i64,
    /// Whole-number discount percent; no discount when omitted.
    #[serde(default)]
    pub discount_percent: i64,
    /// Checkout date as `yyyy-MM-dd`.
    pub checkout_date: String,
}

impl From<CheckoutRequestBody> for CheckoutRequest {
    fn from(body: CheckoutRequestBody) -> Self {
        CheckoutRequest {
            tool_code: body.tool_code,
            rental_days: body.rental_days,
            discount_percent: body.discount_percent,
            checkout_date: body.checkout_date,
        }
    }
}
