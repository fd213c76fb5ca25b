use crate::ports::outbound::InventoryRepository;
use crate::sbom_comparison::domain::ComponentInventory;
use crate::shared::error::ComparisonError;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;

/// InMemoryInventoryRepository adapter backed by a concurrent map
#[derive(Default)]
pub struct InMemoryInventoryRepository {
    inventories: DashMap<String, ComponentInventory>,
}

impl InMemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inventories(inventories: impl IntoIterator<Item = ComponentInventory>) -> Self {
        let repository = Self::new();
        for inventory in inventories {
            repository.insert(inventory);
        }
        repository
    }

    /// Registers an inventory, replacing any previous one with the same id
    pub fn insert(&self, inventory: ComponentInventory) {
        self.inventories
            .insert(inventory.inventory_id().to_string(), inventory);
    }

    pub fn len(&self) -> usize {
        self.inventories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventories.is_empty()
    }
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepository {
    async fn get_inventory(&self, inventory_id: &str) -> Result<ComponentInventory> {
        self.inventories
            .get(inventory_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                ComparisonError::NotFound {
                    inventory_id: inventory_id.to_string(),
                }
                .into()
            })
    }
}
