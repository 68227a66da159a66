//! Tool rental checkout engine.
//!
//! This crate computes rental agreements for equipment: which days of a
//! rental are billable under a tool's weekday, weekend and holiday charge
//! policy, and the pre-discount, discount and final amounts.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
