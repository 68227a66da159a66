//! Tool policy model and related types.
//!
//! This module defines the [`Tool`] struct and [`ToolType`] enum describing
//! a rentable item and the days on which renting it incurs a charge.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The category of a rentable tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    /// Ladders of any height.
    Ladder,
    /// Chainsaws.
    Chainsaw,
    /// Jackhammers.
    Jackhammer,
}

impl std::fmt::Display for ToolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolType::Ladder => write!(f, "Ladder"),
            ToolType::Chainsaw => write!(f, "Chainsaw"),
            ToolType::Jackhammer => write!(f, "Jackhammer"),
        }
    }
}

/// The charge policy for a rentable tool.
///
/// A tool is described once when the inventory is built and never changes
/// afterwards. The three flags are independent: each says whether a day of
/// that kind inside the rental window counts towards the charge days.
///
/// # Example
///
/// ```
/// use tool_rental::models::{Tool, ToolType};
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
/// assert_eq!(ladder.tool_type.to_string(), "Ladder");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Short unique identifier (e.g., "LADW").
    pub code: String,
    /// The tool category.
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    /// The manufacturer shown on the agreement.
    pub brand: String,
    /// Amount charged per chargeable day. Never negative.
    pub daily_charge: Decimal,
    /// Whether plain weekdays are charged.
    pub weekday_charge: bool,
    /// Whether Saturdays and Sundays are charged.
    pub weekend_charge: bool,
    /// Whether observed holidays are charged.
    pub holiday_charge: bool,
}
