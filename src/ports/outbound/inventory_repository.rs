use crate::sbom_comparison::domain::ComponentInventory;
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// InventoryRepository port for loading component inventories
///
/// This port abstracts the application-management collaborator that owns the
/// generated SBOMs. The comparison core only ever reads through it.
///
/// # Async Support
/// Loading is async so both inventories of a comparison can be fetched
/// concurrently. Implementations must be `Send + Sync`.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Loads the inventory registered under `inventory_id`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The identifier does not resolve (`ComparisonError::NotFound`)
    /// - The stored inventory cannot be read or parsed
    async fn get_inventory(&self, inventory_id: &str) -> Result<ComponentInventory>;
}

#[async_trait]
impl<T: InventoryRepository + ?Sized> InventoryRepository for Box<T> {
    async fn get_inventory(&self, inventory_id: &str) -> Result<ComponentInventory> {
        (**self).get_inventory(inventory_id).await
    }
}

#[async_trait]
impl<T: InventoryRepository + ?Sized> InventoryRepository for Arc<T> {
    async fn get_inventory(&self, inventory_id: &str) -> Result<ComponentInventory> {
        (**self).get_inventory(inventory_id).await
    }
}
