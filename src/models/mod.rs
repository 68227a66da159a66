//! Core data models for the tool rental engine.
//!
//! This module contains the tool policy and the rental agreement produced
//! for each checkout.

mod rental_agreement;
mod tool;

pub use rental_agreement::{AGREEMENT_DATE_FORMAT, DayCharge, RentalAgreement};
pub use tool::{Tool, ToolType};
