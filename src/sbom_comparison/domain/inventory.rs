use super::Component;
use crate::shared::error::ComparisonError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing state of an inventory as reported by the generation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InventoryStatus {
    Processing,
    #[default]
    Completed,
    Failed,
}

impl fmt::Display for InventoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryStatus::Processing => write!(f, "processing"),
            InventoryStatus::Completed => write!(f, "completed"),
            InventoryStatus::Failed => write!(f, "failed"),
        }
    }
}

fn default_platform() -> String {
    "unknown".to_string()
}

/// Immutable snapshot of the components found in one analyzed application
///
/// The comparison engine only borrows inventories; it never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInventory {
    inventory_id: String,
    application_name: String,
    #[serde(default = "default_platform")]
    platform: String,
    #[serde(default)]
    status: InventoryStatus,
    component_count: usize,
    #[serde(default)]
    components: Vec<Component>,
}

impl ComponentInventory {
    /// Creates a completed inventory whose declared count matches its components
    pub fn new(
        inventory_id: impl Into<String>,
        application_name: impl Into<String>,
        platform: impl Into<String>,
        components: Vec<Component>,
    ) -> Self {
        Self {
            inventory_id: inventory_id.into(),
            application_name: application_name.into(),
            platform: platform.into(),
            status: InventoryStatus::Completed,
            component_count: components.len(),
            components,
        }
    }

    pub fn with_status(mut self, status: InventoryStatus) -> Self {
        self.status = status;
        self
    }

    /// Overrides the declared component count, as a producer would report it
    pub fn with_declared_count(mut self, component_count: usize) -> Self {
        self.component_count = component_count;
        self
    }

    pub fn inventory_id(&self) -> &str {
        &self.inventory_id
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn status(&self) -> InventoryStatus {
        self.status
    }

    pub fn component_count(&self) -> usize {
        self.component_count
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Rejects inventories whose generation has not completed
    pub fn ensure_ready(&self) -> Result<()> {
        if self.status != InventoryStatus::Completed {
            return Err(ComparisonError::invalid_input(
                format!(
                    "Inventory {} is not ready for comparison (status: {})",
                    self.inventory_id, self.status
                ),
                "Wait for SBOM generation to complete, or regenerate it if it failed",
            )
            .into());
        }
        Ok(())
    }

    /// Checks the declared count against the component list and that every
    /// component carries a name
    pub fn verify_integrity(&self) -> Result<()> {
        if self.component_count != self.components.len() {
            return Err(ComparisonError::data_integrity(
                &self.inventory_id,
                format!(
                    "component_count is {} but {} components were listed",
                    self.component_count,
                    self.components.len()
                ),
            )
            .into());
        }

        if let Some(position) = self.components.iter().position(Component::has_blank_name) {
            return Err(ComparisonError::data_integrity(
                &self.inventory_id,
                format!("component at position {} has no name", position),
            )
            .into());
        }

        Ok(())
    }
}
