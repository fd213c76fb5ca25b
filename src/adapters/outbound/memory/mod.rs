/// In-memory adapters for embedding the engine and for tests
mod history_store;
mod inventory_store;

pub use history_store::InMemoryHistoryStore;
pub use inventory_store::InMemoryInventoryRepository;
