//! Observed holiday calendar.
//!
//! Only two fixed U.S. holidays are recognised: Independence Day, shifted
//! off the weekend to the nearest weekday, and Labor Day.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A holiday recognised by the rental calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holiday {
    /// July 4, observed on July 3 when it falls on a Saturday and July 5 when on a Sunday.
    IndependenceDay,
    /// The first Monday of September.
    LaborDay,
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Holiday::IndependenceDay => write!(f, "Independence Day"),
            Holiday::LaborDay => write!(f, "Labor Day"),
        }
    }
}

/// Returns the date Independence Day is observed in `year`.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::observed_independence_day;
/// use chrono::NaiveDate;
///
/// // July 4, 2020 was a Saturday
/// assert_eq!(
///     observed_independence_day(2020),
///     NaiveDate::from_ymd_opt(2020, 7, 3)
/// );
/// // July 4, 2021 was a Sunday
/// assert_eq!(
///     observed_independence_day(2021),
///     NaiveDate::from_ymd_opt(2021, 7, 5)
/// );
/// ```
pub fn observed_independence_day(year: i32) -> Option<NaiveDate> {
    let nominal = NaiveDate::from_ymd_opt(year, 7, 4)?;
    match nominal.weekday() {
        Weekday::Sat => nominal.pred_opt(),
        Weekday::Sun => nominal.succ_opt(),
        _ => Some(nominal),
    }
}

/// Returns Labor Day, the first Monday of September, for `year`.
pub fn labor_day(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, 9, Weekday::Mon, 1)
}

/// Returns the holiday observed on `date`, if any.
///
/// A date is only compared against the holidays of its own calendar year.
pub fn holiday_on(date: NaiveDate) -> Option<Holiday> {
    let year = date.year();
    if observed_independence_day(year) == Some(date) {
        Some(Holiday::IndependenceDay)
    } else if labor_day(year) == Some(date) {
        Some(Holiday::LaborDay)
    } else {
        None
    }
}

/// Returns true if `date` is an observed holiday.
pub fn is_holiday(date: NaiveDate) -> bool {
    holiday_on(date).is_some()
}
