//! Charge calculation for a single checkout.
//!
//! This module walks the rental window day by day, counts the chargeable
//! days for the tool and derives the monetary totals of the agreement.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use super::day_classification::{get_day_type, is_chargeable_day};
use super::holidays::holiday_on;
use super::rounding::round_currency;
use crate::error::{RentalError, RentalResult};
use crate::models::{DayCharge, RentalAgreement, Tool};

/// Largest discount that can be applied, in percent.
pub const MAX_DISCOUNT_PERCENT: i32 = 100;

/// Longest rental accepted, in days.
pub const MAX_RENTAL_DAYS: u32 = 3_650;

/// Returns the due date, `rental_days` calendar days after checkout.
pub fn due_date(checkout_date: NaiveDate, rental_days: u32) -> RentalResult<NaiveDate> {
    checkout_date
        .checked_add_days(Days::new(u64::from(rental_days)))
        .ok_or(RentalError::DateOutOfRange {
            checkout_date,
            rental_days,
        })
}

/// Classifies every day of the rental window.
///
/// The window starts the day after checkout and ends on the due date, so
/// exactly `rental_days` entries are returned in date order. The checkout
/// day itself is never part of the window.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::charge_days;
/// use tool_rental::config::ToolInventory;
/// use chrono::NaiveDate;
///
/// let inventory = ToolInventory::standard();
/// let ladder = inventory.get("LADW").unwrap();
/// let checkout = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
///
/// let days = charge_days(ladder, checkout, 3).unwrap();
/// assert_eq!(days.len(), 3);
/// assert!(!days[0].chargeable); // observed Independence Day
/// assert!(days[1].chargeable);
/// assert!(days[2].chargeable);
/// ```
pub fn charge_days(
    tool: &Tool,
    checkout_date: NaiveDate,
    rental_days: u32,
) -> RentalResult<Vec<DayCharge>> {
    // Validates the whole window up front so the iteration below cannot overflow
    due_date(checkout_date, rental_days)?;

    Ok(checkout_date
        .iter_days()
        .skip(1)
        .take(rental_days as usize)
        .map(|date| DayCharge {
            date,
            day_type: get_day_type(date),
            holiday: holiday_on(date),
            chargeable: is_chargeable_day(tool, date),
        })
        .collect())
}

/// Computes the rental agreement for one checkout.
///
/// # Arguments
///
/// * `tool` - The tool policy being rented
/// * `checkout_date` - The day the tool leaves the store (never charged)
/// * `rental_days` - Number of days rented, at most [`MAX_RENTAL_DAYS`]; callers validate this is at least 1
/// * `discount_percent` - Whole-number discount, 0 to 100 inclusive
///
/// # Returns
///
/// The fully computed [`RentalAgreement`], or an error if:
/// - The discount is outside 0..=100 (`InvalidDiscount`); nothing is computed
/// - The rental is longer than [`MAX_RENTAL_DAYS`] (`RentalTooLong`)
/// - The due date cannot be represented (`DateOutOfRange`)
/// - A charge exceeds the range of `Decimal` (`AmountOutOfRange`)
///
/// The pre-discount charge, discount amount and final charge are each
/// rounded to cents on their own.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::calculate_agreement;
/// use tool_rental::config::ToolInventory;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let inventory = ToolInventory::standard();
/// let chainsaw = inventory.get("CHNS").unwrap();
/// let checkout = NaiveDate::from_ymd_opt(2015, 7, 2).unwrap();
///
/// let agreement = calculate_agreement(chainsaw, checkout, 5, 25).unwrap();
/// assert_eq!(agreement.due_date(), NaiveDate::from_ymd_opt(2015, 7, 7).unwrap());
/// assert_eq!(agreement.charge_days(), 3);
/// assert_eq!(agreement.pre_discount_charge(), Decimal::new(447, 2));
/// assert_eq!(agreement.discount_amount(), Decimal::new(112, 2));
/// assert_eq!(agreement.final_charge(), Decimal::new(335, 2));
/// ```
pub fn calculate_agreement(
    tool: &Tool,
    checkout_date: NaiveDate,
    rental_days: u32,
    discount_percent: i32,
) -> RentalResult<RentalAgreement> {
    if !(0..=MAX_DISCOUNT_PERCENT).contains(&discount_percent) {
        return Err(RentalError::InvalidDiscount {
            percent: i64::from(discount_percent),
        });
    }

    if rental_days > MAX_RENTAL_DAYS {
        return Err(RentalError::RentalTooLong {
            days: i64::from(rental_days),
            max: MAX_RENTAL_DAYS,
        });
    }

    let due_date = due_date(checkout_date, rental_days)?;
    let days = charge_days(tool, checkout_date, rental_days)?;
    let charge_day_count = days.iter().filter(|day| day.chargeable).count() as u32;

    let out_of_range = || RentalError::AmountOutOfRange {
        tool_code: tool.code.clone(),
        charge_days: charge_day_count,
    };

    let pre_discount_charge = tool
        .daily_charge
        .checked_mul(Decimal::from(charge_day_count))
        .map(round_currency)
        .ok_or_else(out_of_range)?;
    let discount_amount = pre_discount_charge
        .checked_mul(Decimal::from(discount_percent))
        .and_then(|amount| amount.checked_div(Decimal::ONE_HUNDRED))
        .map(round_currency)
        .ok_or_else(out_of_range)?;
    let final_charge = pre_discount_charge
        .checked_sub(discount_amount)
        .map(round_currency)
        .ok_or_else(out_of_range)?;

    Ok(RentalAgreement {
        tool: tool.clone(),
        checkout_date,
        rental_days,
        discount_percent,
        due_date,
        charge_days: charge_day_count,
        pre_discount_charge,
        discount_amount,
        final_charge,
        days,
    })
}
