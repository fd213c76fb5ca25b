use async_trait::async_trait;
use sbom_compare::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock InventoryRepository serving fixed inventories and counting lookups
#[derive(Default, Clone)]
pub struct MockInventoryRepository {
    inventories: HashMap<String, ComponentInventory>,
    pub lookups: Arc<AtomicUsize>,
}

impl MockInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inventory(mut self, inventory: ComponentInventory) -> Self {
        self.inventories
            .insert(inventory.inventory_id().to_string(), inventory);
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InventoryRepository for MockInventoryRepository {
    async fn get_inventory(&self, inventory_id: &str) -> Result<ComponentInventory> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inventories.get(inventory_id).cloned().ok_or_else(|| {
            ComparisonError::NotFound {
                inventory_id: inventory_id.to_string(),
            }
            .into()
        })
    }
}
