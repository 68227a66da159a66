//! Error types for the tool rental engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a checkout from producing an agreement.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the tool rental engine.
///
/// Every fallible operation in the crate returns this error type, from
/// inventory loading through input validation to the charge calculation.
///
/// # Example
///
/// ```
/// use tool_rental::error::RentalError;
///
/// let error = RentalError::InvalidDiscount { percent: 101 };
/// assert_eq!(
///     error.to_string(),
///     "Discount percent must be between 0 and 100 (got 101)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentalError {
    /// Inventory file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Inventory file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An inventory entry is not a valid tool policy.
    #[error("Invalid tool '{code}': {message}")]
    InvalidTool {
        /// The code of the offending tool.
        code: String,
        /// What made the entry invalid.
        message: String,
    },

    /// The requested tool code is not in the inventory.
    #[error("Invalid tool code '{code}'. Available codes are: {available}")]
    ToolNotFound {
        /// The code that was requested.
        code: String,
        /// Comma-separated list of the codes that do exist.
        available: String,
    },

    /// The rental day count was below one.
    #[error("Rental day count must be 1 or greater (got {days})")]
    InvalidRentalDays {
        /// The rejected day count.
        days: i64,
    },

    /// The rental day count was above the longest accepted rental.
    #[error("Rental day count must be {max} or fewer (got {days})")]
    RentalTooLong {
        /// The rejected day count.
        days: i64,
        /// The longest accepted rental.
        max: u32,
    },

    /// The discount percent was outside 0..=100.
    #[error("Discount percent must be between 0 and 100 (got {percent})")]
    InvalidDiscount {
        /// The rejected discount percent.
        percent: i64,
    },

    /// The checkout date text could not be parsed.
    #[error("Invalid checkout date '{input}': {message}")]
    InvalidCheckoutDate {
        /// The text that was supplied.
        input: String,
        /// A description of the parse failure.
        message: String,
    },

    /// The due date falls outside the representable calendar.
    #[error("Due date out of range: {checkout_date} plus {rental_days} days")]
    DateOutOfRange {
        /// The checkout date.
        checkout_date: NaiveDate,
        /// The rental day count that overflowed.
        rental_days: u32,
    },

    /// A charge does not fit in the monetary type.
    #[error("Charge for tool '{tool_code}' over {charge_days} charge days is out of range")]
    AmountOutOfRange {
        /// The code of the tool being priced.
        tool_code: String,
        /// The number of charge days priced.
        charge_days: u32,
    },
}

/// A type alias for Results that return RentalError.
pub type RentalResult<T> = Result<T, RentalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = RentalError::ConfigNotFound {
            path: "/missing/inventory.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/inventory.yaml"
        );
    }

    #[test]
    fn test_tool_not_found_lists_available_codes() {
        let error = RentalError::ToolNotFound {
            code: "XXXX".to_string(),
            available: "CHNS, JAKD".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid tool code 'XXXX'. Available codes are: CHNS, JAKD"
        );
    }

    #[test]
    fn test_invalid_rental_days_displays_count() {
        let error = RentalError::InvalidRentalDays { days: 0 };
        assert_eq!(
            error.to_string(),
            "Rental day count must be 1 or greater (got 0)"
        );
    }

    #[test]
    fn test_rental_too_long_displays_limit() {
        let error = RentalError::RentalTooLong {
            days: 90_000_000,
            max: 3_650,
        };
        assert_eq!(
            error.to_string(),
            "Rental day count must be 3650 or fewer (got 90000000)"
        );
    }

    #[test]
    fn test_amount_out_of_range_names_tool() {
        let error = RentalError::AmountOutOfRange {
            tool_code: "HUGE".to_string(),
            charge_days: 2,
        };
        assert_eq!(
            error.to_string(),
            "Charge for tool 'HUGE' over 2 charge days is out of range"
        );
    }

    #[test]
    fn test_invalid_discount_displays_negative_percent() {
        let error = RentalError::InvalidDiscount { percent: -1 };
        assert_eq!(
            error.to_string(),
            "Discount percent must be between 0 and 100 (got -1)"
        );
    }

    #[test]
    fn test_invalid_checkout_date_displays_input_and_message() {
        let error = RentalError::InvalidCheckoutDate {
            input: "07/02/20".to_string(),
            message: "expected yyyy-MM-dd".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid checkout date '07/02/20': expected yyyy-MM-dd"
        );
    }

    #[test]
    fn test_date_out_of_range_displays_inputs() {
        let error = RentalError::DateOutOfRange {
            checkout_date: NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
            rental_days: 5,
        };
        assert_eq!(
            error.to_string(),
            "Due date out of range: 2020-07-02 plus 5 days"
        );
    }

    #[test]
    fn test_invalid_tool_displays_code_and_message() {
        let error = RentalError::InvalidTool {
            code: "LADW".to_string(),
            message: "daily charge must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid tool 'LADW': daily charge must not be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<RentalError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_discount() -> RentalResult<()> {
            Err(RentalError::InvalidDiscount { percent: 150 })
        }

        fn propagates_error() -> RentalResult<()> {
            returns_invalid_discount()?;
            Ok(())
        }

        assert_eq!(
            propagates_error(),
            Err(RentalError::InvalidDiscount { percent: 150 })
        );
    }
}
