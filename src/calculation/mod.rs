//! Calculation logic for the tool rental engine.
//!
//! This module contains the charge engine: the observed holiday calendar,
//! day classification and chargeability, currency rounding, and the
//! agreement calculation that ties them together.

mod charges;
mod day_classification;
mod holidays;
mod rounding;

pub use charges::{
    MAX_DISCOUNT_PERCENT, MAX_RENTAL_DAYS, calculate_agreement, charge_days, due_date,
};
pub use day_classification::{DayType, get_day_type, is_chargeable_day};
pub use holidays::{Holiday, holiday_on, is_holiday, labor_day, observed_independence_day};
pub use rounding::{CURRENCY_SCALE, round_currency};
