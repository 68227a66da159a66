//! Tool inventory configuration.
//!
//! This module provides the [`ToolInventory`] lookup table and the
//! [`ConfigLoader`] that builds one from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use tool_rental::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config").unwrap();
//! println!("Loaded {} tools", loader.inventory().len());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, INVENTORY_FILE};
pub use types::{InventoryConfig, ToolInventory};
