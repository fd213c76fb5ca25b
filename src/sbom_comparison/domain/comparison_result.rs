use super::{ComparisonSummary, ComponentDifference, ComponentInventory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display metadata of one compared inventory, frozen into the result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryDescriptor {
    pub id: String,
    pub name: String,
    pub platform: String,
    pub component_count: usize,
}

impl From<&ComponentInventory> for InventoryDescriptor {
    fn from(inventory: &ComponentInventory) -> Self {
        Self {
            id: inventory.inventory_id().to_string(),
            name: inventory.application_name().to_string(),
            platform: inventory.platform().to_string(),
            component_count: inventory.component_count(),
        }
    }
}

/// Side-by-side detail row for an identity classified as `common`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonComponent {
    pub name: String,
    pub version: Option<String>,
    #[serde(rename = "type")]
    pub component_type: Option<String>,
    pub license: Option<String>,
}

/// Frozen comparison record
///
/// Built once by the result assembler and never mutated afterwards. It is the
/// unit stored in history and the only input the exporters need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    comparison_id: String,
    app1: InventoryDescriptor,
    app2: InventoryDescriptor,
    summary: ComparisonSummary,
    differences: Vec<ComponentDifference>,
    common_components: Vec<CommonComponent>,
    created_at: DateTime<Utc>,
}

impl ComparisonResult {
    pub(crate) fn new(
        comparison_id: String,
        app1: InventoryDescriptor,
        app2: InventoryDescriptor,
        summary: ComparisonSummary,
        differences: Vec<ComponentDifference>,
        common_components: Vec<CommonComponent>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            comparison_id,
            app1,
            app2,
            summary,
            differences,
            common_components,
            created_at,
        }
    }

    pub fn comparison_id(&self) -> &str {
        &self.comparison_id
    }

    pub fn app1(&self) -> &InventoryDescriptor {
        &self.app1
    }

    pub fn app2(&self) -> &InventoryDescriptor {
        &self.app2
    }

    pub fn summary(&self) -> &ComparisonSummary {
        &self.summary
    }

    pub fn differences(&self) -> &[ComponentDifference] {
        &self.differences
    }

    pub fn common_components(&self) -> &[CommonComponent] {
        &self.common_components
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
