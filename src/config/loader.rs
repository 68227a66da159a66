//! Inventory loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tool
//! inventory from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{RentalError, RentalResult};
use crate::models::Tool;

use super::types::{InventoryConfig, ToolInventory};

/// Name of the inventory file inside a configuration directory.
pub const INVENTORY_FILE: &str = "inventory.yaml";

/// Loads and provides access to the tool inventory.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── inventory.yaml   # Tool policies
/// ```
///
/// # File Format
///
/// ```yaml
/// tools:
///   - code: LADW
///     type: ladder
///     brand: Werner
///     daily_charge: "1.99"
///     weekday_charge: true
///     weekend_charge: true
///     holiday_charge: false
/// ```
///
/// # Example
///
/// ```no_run
/// use tool_rental::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let ladder = loader.get_tool("LADW").unwrap();
/// println!("Daily charge: ${}", ladder.daily_charge);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    inventory: ToolInventory,
}

impl ConfigLoader {
    /// Loads the inventory from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `inventory.yaml` is missing (`ConfigNotFound`)
    /// - The file is not valid YAML or misses fields (`ConfigParseError`)
    /// - A tool entry is invalid (`InvalidTool`)
    pub fn load<P: AsRef<Path>>(path: P) -> RentalResult<Self> {
        let inventory_path = path.as_ref().join(INVENTORY_FILE);
        let path_str = inventory_path.display().to_string();

        let content =
            fs::read_to_string(&inventory_path).map_err(|_| RentalError::ConfigNotFound {
                path: path_str.clone(),
            })?;
        let loader = Self::from_yaml_str(&path_str, &content)?;

        tracing::debug!(
            path = %path_str,
            tools = loader.inventory.len(),
            "Loaded tool inventory"
        );

        Ok(loader)
    }

    /// Parses an inventory from YAML text.
    ///
    /// `source` names the origin of the text in error messages.
    pub fn from_yaml_str(source: &str, content: &str) -> RentalResult<Self> {
        let config: InventoryConfig = parse_yaml(source, content)?;

        Ok(Self {
            inventory: ToolInventory::from_tools(config.tools)?,
        })
    }

    /// Returns the loaded inventory.
    pub fn inventory(&self) -> &ToolInventory {
        &self.inventory
    }

    /// Consumes the loader, returning the inventory.
    pub fn into_inventory(self) -> ToolInventory {
        self.inventory
    }

    /// Gets a tool by its code.
    pub fn get_tool(&self, code: &str) -> RentalResult<&Tool> {
        self.inventory.get(code)
    }
}

/// Deserializes YAML text, naming `source` in parse errors.
fn parse_yaml<T: serde::de::DeserializeOwned>(source: &str, content: &str) -> RentalResult<T> {
    serde_yaml::from_str(content).map_err(|e| RentalError::ConfigParseError {
        path: source.to_string(),
        message: e.to_string(),
    })
}
