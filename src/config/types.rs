//! Inventory types.
//!
//! This module contains the inventory file structure deserialized from YAML
//! and the [`ToolInventory`] lookup table handed to every consumer.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{RentalError, RentalResult};
use crate::models::{Tool, ToolType};

/// Inventory configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryConfig {
    /// Every tool available for rent.
    pub tools: Vec<Tool>,
}

/// The tools available for rent, keyed by code.
///
/// The inventory is built once and passed explicitly to whatever needs it;
/// there is no process-wide catalog.
///
/// # Example
///
/// ```
/// use tool_rental::config::ToolInventory;
///
/// let inventory = ToolInventory::standard();
/// assert_eq!(inventory.codes(), vec!["CHNS", "JAKD", "JAKR", "LADW"]);
/// assert_eq!(inventory.get("LADW").unwrap().brand, "Werner");
/// assert!(inventory.get("NOPE").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInventory {
    tools: BTreeMap<String, Tool>,
}

impl ToolInventory {
    /// Builds an inventory from a list of tools.
    ///
    /// Fails with `InvalidTool` if a code is blank or repeated, or if a
    /// daily charge is negative.
    pub fn from_tools(tools: Vec<Tool>) -> RentalResult<Self> {
        let mut by_code = BTreeMap::new();

        for tool in tools {
            if tool.code.trim().is_empty() {
                return Err(RentalError::InvalidTool {
                    code: tool.code,
                    message: "code must not be blank".to_string(),
                });
            }
            if tool.daily_charge < Decimal::ZERO {
                return Err(RentalError::InvalidTool {
                    code: tool.code,
                    message: format!("daily charge must not be negative ({})", tool.daily_charge),
                });
            }
            if by_code.contains_key(&tool.code) {
                return Err(RentalError::InvalidTool {
                    code: tool.code,
                    message: "code is listed more than once".to_string(),
                });
            }
            by_code.insert(tool.code.clone(), tool);
        }

        Ok(Self { tools: by_code })
    }

    /// Returns the built-in catalog of four tools.
    pub fn standard() -> Self {
        let tools = [
            standard_tool("CHNS", ToolType::Chainsaw, "Stihl", 149, true, false, true),
            standard_tool("LADW", ToolType::Ladder, "Werner", 199, true, true, false),
            standard_tool("JAKD", ToolType::Jackhammer, "DeWalt", 299, true, false, false),
            standard_tool("JAKR", ToolType::Jackhammer, "Ridgid", 299, true, false, false),
        ];

        Self {
            tools: tools
                .into_iter()
                .map(|tool| (tool.code.clone(), tool))
                .collect(),
        }
    }

    /// Looks up a tool by code.
    ///
    /// Returns `ToolNotFound`, listing the available codes, when the code is unknown.
    pub fn get(&self, code: &str) -> RentalResult<&Tool> {
        self.tools
            .get(code)
            .ok_or_else(|| RentalError::ToolNotFound {
                code: code.to_string(),
                available: self.codes().join(", "),
            })
    }

    /// Returns true if the inventory holds a tool with this code.
    pub fn contains(&self, code: &str) -> bool {
        self.tools.contains_key(code)
    }

    /// Returns all tool codes in sorted order.
    pub fn codes(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Returns all tools ordered by code.
    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.tools.values()
    }

    /// Returns the number of tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if the inventory holds no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

fn standard_tool(
    code: &str,
    tool_type: ToolType,
    brand: &str,
    daily_charge_cents: i64,
    weekday_charge: bool,
    weekend_charge: bool,
    holiday_charge: bool,
) -> Tool {
    Tool {
        code: code.to_string(),
        tool_type,
        brand: brand.to_string(),
        daily_charge: Decimal::new(daily_charge_cents, 2),
        weekday_charge,
        weekend_charge,
        holiday_charge,
    }
}
