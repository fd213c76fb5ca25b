pub mod comparison_result;
pub mod component;
pub mod difference;
pub mod inventory;
pub mod summary;

pub use comparison_result::{CommonComponent, ComparisonResult, InventoryDescriptor};
pub use component::Component;
pub use difference::{ComponentDifference, DifferenceType};
pub use inventory::{ComponentInventory, InventoryStatus};
pub use summary::ComparisonSummary;
