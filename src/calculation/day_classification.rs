//! Day classification and chargeability.
//!
//! This module determines the day type (weekday or weekend) of any calendar
//! date and decides, for a given tool policy, whether that date is charged.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::holidays::is_holiday;
use crate::models::Tool;

/// Represents the type of day for charge calculation.
///
/// Holidays are tracked separately because a holiday can also be a weekend.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::DayType;
///
/// let day_type = DayType::Weekend;
/// assert_eq!(format!("{:?}", day_type), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday or Sunday.
    Weekend,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2020-07-04 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2020, 7, 4).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Weekend);
///
/// // 2020-07-06 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2020, 7, 6).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ => DayType::Weekday,
    }
}

/// Decides whether `date` is a chargeable day for `tool`.
///
/// The rules are evaluated in this order and the first match wins:
///
/// 1. A holiday is free when the tool does not charge holidays.
/// 2. A weekend day is free when the tool does not charge weekends.
/// 3. A plain weekday (neither weekend nor holiday) is free when the tool
///    does not charge weekdays.
/// 4. Anything else is charged.
///
/// A weekend holiday therefore stays free for a tool that charges holidays
/// but not weekends.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::is_chargeable_day;
/// use tool_rental::models::{Tool, ToolType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let ladder = Tool {
///     code: "LADW".to_string(),
///     tool_type: ToolType::Ladder,
///     brand: "Werner".to_string(),
///     daily_charge: Decimal::new(199, 2),
///     weekday_charge: true,
///     weekend_charge: true,
///     holiday_charge: false,
/// };
///
/// // Observed Independence Day 2020 (Friday July 3)
/// assert!(!is_chargeable_day(&ladder, NaiveDate::from_ymd_opt(2020, 7, 3).unwrap()));
/// // Saturday July 4, 2020 is an ordinary weekend day
/// assert!(is_chargeable_day(&ladder, NaiveDate::from_ymd_opt(2020, 7, 4).unwrap()));
/// ```
pub fn is_chargeable_day(tool: &Tool, date: NaiveDate) -> bool {
    let weekend = get_day_type(date) == DayType::Weekend;
    let holiday = is_holiday(date);

    if holiday && !tool.holiday_charge {
        return false;
    }
    if weekend && !tool.weekend_charge {
        return false;
    }
    if !weekend && !holiday && !tool.weekday_charge {
        return false;
    }
    true
}
