//! Application state for the tool rental API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ToolInventory;

/// Shared application state.
///
/// Holds the tool inventory, which is read-only and shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    inventory: Arc<ToolInventory>,
}

impl AppState {
    /// Creates a new application state serving the given inventory.
    pub fn new(inventory: ToolInventory) -> Self {
        Self {
            inventory: Arc::new(inventory),
        }
    }

    /// Returns a reference to the tool inventory.
    pub fn inventory(&self) -> &ToolInventory {
        &self.inventory
    }
}
