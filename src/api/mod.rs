//! HTTP API module for the tool rental engine.
//!
//! This module provides the REST endpoints for pricing a checkout and
//! listing the rentable tools.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CheckoutRequestBody;
pub use response::{ApiError, ApiErrorResponse, CheckoutResponse};
pub use state::AppState;
