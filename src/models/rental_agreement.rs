//! Rental agreement model.
//!
//! This module contains the [`RentalAgreement`] type, the immutable outcome
//! of one checkout, and [`DayCharge`], the per-day record of how each day
//! in the rental window was classified.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Tool;
use crate::calculation::{DayType, Holiday, calculate_agreement};
use crate::error::RentalResult;

/// Date layout used on the printed agreement.
pub const AGREEMENT_DATE_FORMAT: &str = "%m/%d/%y";

/// How a single day of the rental window was classified.
///
/// # Example
///
/// ```
/// use tool_rental::models::DayCharge;
/// use tool_rental::calculation::{DayType, Holiday};
/// use chrono::NaiveDate;
///
/// let day = DayCharge {
///     date: NaiveDate::from_ymd_opt(2020, 7, 3).unwrap(),
///     day_type: DayType::Weekday,
///     holiday: Some(Holiday::IndependenceDay),
///     chargeable: false,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCharge {
    /// The calendar day.
    pub date: NaiveDate,
    /// Weekday or weekend.
    pub day_type: DayType,
    /// The holiday observed on this day, if any.
    pub holiday: Option<Holiday>,
    /// Whether the day counts towards the charge days.
    pub chargeable: bool,
}

/// The outcome of renting one tool.
///
/// All derived values are computed once at construction. The struct exposes
/// read-only accessors only, so an agreement can never drift from the inputs
/// it was computed from.
///
/// # Example
///
/// ```
/// use tool_rental::models::RentalAgreement;
/// use tool_rental::config::ToolInventory;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let inventory = ToolInventory::standard();
/// let tool = inventory.get("JAKD").unwrap();
/// let checkout = NaiveDate::from_ymd_opt(2015, 9, 3).unwrap();
///
/// let agreement = RentalAgreement::new(tool, checkout, 6, 0).unwrap();
/// assert_eq!(agreement.charge_days(), 3);
/// assert_eq!(agreement.final_charge(), Decimal::new(897, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalAgreement {
    pub(crate) tool: Tool,
    pub(crate) checkout_date: NaiveDate,
    pub(crate) rental_days: u32,
    pub(crate) discount_percent: i32,
    pub(crate) due_date: NaiveDate,
    pub(crate) charge_days: u32,
    pub(crate) pre_discount_charge: Decimal,
    pub(crate) discount_amount: Decimal,
    pub(crate) final_charge: Decimal,
    pub(crate) days: Vec<DayCharge>,
}

impl RentalAgreement {
    /// Computes a new agreement.
    ///
    /// Equivalent to [`calculate_agreement`]; fails with `InvalidDiscount`
    /// when `discount_percent` is outside 0..=100.
    pub fn new(
        tool: &Tool,
        checkout_date: NaiveDate,
        rental_days: u32,
        discount_percent: i32,
    ) -> RentalResult<Self> {
        calculate_agreement(tool, checkout_date, rental_days, discount_percent)
    }

    /// Returns the tool policy the agreement was computed for.
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Returns the checkout date.
    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// Returns the number of rental days.
    pub fn rental_days(&self) -> u32 {
        self.rental_days
    }

    /// Returns the discount percent.
    pub fn discount_percent(&self) -> i32 {
        self.discount_percent
    }

    /// Returns the due date (checkout date plus rental days).
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the daily rental charge of the tool.
    pub fn daily_charge(&self) -> Decimal {
        self.tool.daily_charge
    }

    /// Returns the number of chargeable days in the rental window.
    pub fn charge_days(&self) -> u32 {
        self.charge_days
    }

    /// Returns the charge before discount, rounded to cents.
    pub fn pre_discount_charge(&self) -> Decimal {
        self.pre_discount_charge
    }

    /// Returns the discount amount, rounded to cents.
    pub fn discount_amount(&self) -> Decimal {
        self.discount_amount
    }

    /// Returns the amount due, rounded to cents.
    pub fn final_charge(&self) -> Decimal {
        self.final_charge
    }

    /// Returns the classification of each day in the rental window.
    pub fn days(&self) -> &[DayCharge] {
        &self.days
    }
}

impl std::fmt::Display for RentalAgreement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tool code: {}", self.tool.code)?;
        writeln!(f, "Tool type: {}", self.tool.tool_type)?;
        writeln!(f, "Tool brand: {}", self.tool.brand)?;
        writeln!(f, "Rental days: {}", self.rental_days)?;
        writeln!(
            f,
            "Checkout date: {}",
            self.checkout_date.format(AGREEMENT_DATE_FORMAT)
        )?;
        writeln!(f, "Due date: {}", self.due_date.format(AGREEMENT_DATE_FORMAT))?;
        writeln!(f, "Daily rental charge: ${:.2}", self.tool.daily_charge)?;
        writeln!(f, "Charge days: {}", self.charge_days)?;
        writeln!(f, "Pre-discount charge: ${:.2}", self.pre_discount_charge)?;
        writeln!(f, "Discount percent: {}%", self.discount_percent)?;
        writeln!(f, "Discount amount: ${:.2}", self.discount_amount)?;
        write!(f, "Final charge: ${:.2}", self.final_charge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ToolType;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn ladder() -> Tool {
        Tool {
            code: "LADW".to_string(),
            tool_type: ToolType::Ladder,
            brand: "Werner".to_string(),
            daily_charge: dec("1.99"),
            weekday_charge: true,
            weekend_charge: true,
            holiday_charge: false,
        }
    }

    fn jackhammer() -> Tool {
        Tool {
            code: "JAKD".to_string(),
            tool_type: ToolType::Jackhammer,
            brand: "DeWalt".to_string(),
            daily_charge: dec("2.99"),
            weekday_charge: true,
            weekend_charge: false,
            holiday_charge: false,
        }
    }

    #[test]
    fn test_new_rejects_invalid_discount() {
        let result = RentalAgreement::new(&ladder(), make_date("2020-07-02"), 3, 101);
        assert!(result.is_err());
    }

    #[test]
    fn test_daily_charge_comes_from_tool() {
        let agreement = RentalAgreement::new(&ladder(), make_date("2020-07-02"), 3, 10).unwrap();
        assert_eq!(agreement.daily_charge(), dec("1.99"));
    }

    #[test]
    fn test_days_cover_rental_window() {
        let agreement = RentalAgreement::new(&ladder(), make_date("2020-07-02"), 3, 10).unwrap();

        assert_eq!(agreement.days().len(), 3);
        let charged = agreement.days().iter().filter(|d| d.chargeable).count();
        assert_eq!(charged as u32, agreement.charge_days());
    }

    #[test]
    fn test_display_renders_every_field() {
        let agreement = RentalAgreement::new(&ladder(), make_date("2020-07-02"), 3, 10).unwrap();

        let expected = "\
Tool code: LADW
Tool type: Ladder
Tool brand: Werner
Rental days: 3
Checkout date: 07/02/20
Due date: 07/05/20
Daily rental charge: $1.99
Charge days: 2
Pre-discount charge: $3.98
Discount percent: 10%
Discount amount: $0.40
Final charge: $3.58";
        assert_eq!(agreement.to_string(), expected);
    }

    #[test]
    fn test_display_pads_zero_discount_to_cents() {
        let agreement =
            RentalAgreement::new(&jackhammer(), make_date("2015-09-03"), 6, 0).unwrap();

        let rendered = agreement.to_string();
        assert!(rendered.contains("Discount amount: $0.00"));
        assert!(rendered.contains("Final charge: $8.97"));
        assert!(rendered.contains("Due date: 09/09/15"));
    }

    #[test]
    fn test_serialize_agreement() {
        let agreement = RentalAgreement::new(&ladder(), make_date("2020-07-02"), 3, 10).unwrap();
        let json = serde_json::to_value(&agreement).unwrap();

        assert_eq!(json["tool"]["code"], "LADW");
        assert_eq!(json["checkout_date"], "2020-07-02");
        assert_eq!(json["due_date"], "2020-07-05");
        assert_eq!(json["charge_days"], 2);
        assert_eq!(json["final_charge"], "3.58");
        assert_eq!(json["days"][0]["holiday"], "independence_day");
        assert_eq!(json["days"][1]["holiday"], serde_json::Value::Null);
    }
}
