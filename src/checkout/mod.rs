//! Checkout input validation and orchestration.
//!
//! This module turns raw, user-supplied checkout input into a validated
//! request, resolves the tool against an inventory and hands everything
//! to the charge calculation. Both the HTTP API and the command line go
//! through [`process_checkout`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::{MAX_DISCOUNT_PERCENT, MAX_RENTAL_DAYS, calculate_agreement};
use crate::config::ToolInventory;
use crate::error::{RentalError, RentalResult};
use crate::models::{RentalAgreement, Tool};

/// Accepted layout for checkout dates.
pub const CHECKOUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw checkout input, exactly as entered.
///
/// # Example
///
/// ```
/// use tool_rental::checkout::{CheckoutRequest, process_checkout};
/// use tool_rental::config::ToolInventory;
///
/// let request = CheckoutRequest {
///     tool_code: "JAKR".to_string(),
///     rental_days: 4,
///     discount_percent: 50,
///     checkout_date: "2020-07-02".to_string(),
/// };
///
/// let agreement = process_checkout(&ToolInventory::standard(), &request).unwrap();
/// assert_eq!(agreement.charge_days(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// The tool code to rent.
    pub tool_code: String,
    /// Number of days to rent for.
    pub rental_days: i64,
    /// Whole-number discount percent.
    pub discount_percent: i64,
    /// Checkout date as `yyyy-MM-dd`.
    pub checkout_date: String,
}

/// Checkout input that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCheckout<'a> {
    /// The resolved tool policy.
    pub tool: &'a Tool,
    /// Number of days to rent for, 1 to [`MAX_RENTAL_DAYS`].
    pub rental_days: u32,
    /// Discount percent within 0..=100.
    pub discount_percent: i32,
    /// The parsed checkout date.
    pub checkout_date: NaiveDate,
}

/// Validates a checkout request against an inventory.
///
/// Checks run in this order and the first failure is returned:
///
/// 1. The tool code exists (`ToolNotFound`)
/// 2. The rental day count is at least 1 (`InvalidRentalDays`) and at most
///    [`MAX_RENTAL_DAYS`] (`RentalTooLong`)
/// 3. The discount is within 0..=100 (`InvalidDiscount`)
/// 4. The checkout date parses as `yyyy-MM-dd` (`InvalidCheckoutDate`)
pub fn validate<'a>(
    inventory: &'a ToolInventory,
    request: &CheckoutRequest,
) -> RentalResult<ValidatedCheckout<'a>> {
    let tool = inventory.get(request.tool_code.trim())?;

    if request.rental_days < 1 {
        return Err(RentalError::InvalidRentalDays {
            days: request.rental_days,
        });
    }
    let rental_days = u32::try_from(request.rental_days)
        .ok()
        .filter(|days| *days <= MAX_RENTAL_DAYS)
        .ok_or(RentalError::RentalTooLong {
            days: request.rental_days,
            max: MAX_RENTAL_DAYS,
        })?;

    let discount_percent = i32::try_from(request.discount_percent)
        .ok()
        .filter(|percent| (0..=MAX_DISCOUNT_PERCENT).contains(percent))
        .ok_or(RentalError::InvalidDiscount {
            percent: request.discount_percent,
        })?;

    let checkout_date = parse_checkout_date(&request.checkout_date)?;

    Ok(ValidatedCheckout {
        tool,
        rental_days,
        discount_percent,
        checkout_date,
    })
}

/// Parses a checkout date in `yyyy-MM-dd` form.
pub fn parse_checkout_date(input: &str) -> RentalResult<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, CHECKOUT_DATE_FORMAT).map_err(|e| {
        RentalError::InvalidCheckoutDate {
            input: trimmed.to_string(),
            message: format!("{} (expected yyyy-MM-dd)", e),
        }
    })
}

/// Validates a request and computes its rental agreement.
pub fn process_checkout(
    inventory: &ToolInventory,
    request: &CheckoutRequest,
) -> RentalResult<RentalAgreement> {
    let checkout = validate(inventory, request)?;

    let agreement = calculate_agreement(
        checkout.tool,
        checkout.checkout_date,
        checkout.rental_days,
        checkout.discount_percent,
    )?;

    debug!(
        tool_code = %agreement.tool().code,
        checkout_date = %agreement.checkout_date(),
        rental_days = agreement.rental_days(),
        charge_days = agreement.charge_days(),
        final_charge = %agreement.final_charge(),
        "Computed rental agreement"
    );

    Ok(agreement)
}
