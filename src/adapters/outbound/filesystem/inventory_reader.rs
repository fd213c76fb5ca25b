use crate::ports::outbound::InventoryRepository;
use crate::sbom_comparison::domain::ComponentInventory;
use crate::shared::error::ComparisonError;
use crate::shared::security::{safe_read_to_string, validate_identifier};
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// JsonInventoryRepository adapter reading inventories from a directory
///
/// Each inventory lives in `<base_dir>/<inventory_id>.json`. Reads run on
/// tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct JsonInventoryRepository {
    base_dir: PathBuf,
}

impl JsonInventoryRepository {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn inventory_path(&self, inventory_id: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", inventory_id))
    }

    fn load(&self, inventory_id: &str) -> Result<ComponentInventory> {
        validate_identifier(inventory_id)?;
        let path = self.inventory_path(inventory_id);

        match fs::symlink_metadata(&path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ComparisonError::NotFound {
                    inventory_id: inventory_id.to_string(),
                }
                .into());
            }
            _ => {}
        }

        let content = safe_read_to_string(&path, "Inventory file")?;
        let inventory: ComponentInventory =
            serde_json::from_str(&content).map_err(|e| ComparisonError::FileReadError {
                path: path.clone(),
                details: format!("Invalid inventory JSON: {}", e),
            })?;

        if inventory.inventory_id() != inventory_id {
            return Err(ComparisonError::data_integrity(
                inventory_id,
                format!(
                    "{} declares inventory_id '{}'",
                    path.display(),
                    inventory.inventory_id()
                ),
            )
            .into());
        }

        tracing::debug!(
            inventory_id,
            components = inventory.components().len(),
            path = %path.display(),
            "inventory loaded"
        );
        Ok(inventory)
    }
}

#[async_trait]
impl InventoryRepository for JsonInventoryRepository {
    async fn get_inventory(&self, inventory_id: &str) -> Result<ComponentInventory> {
        let repository = self.clone();
        let inventory_id = inventory_id.to_string();
        tokio::task::spawn_blocking(move || repository.load(&inventory_id)).await?
    }
}
