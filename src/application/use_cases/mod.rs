/// Use cases module containing application business logic orchestration
mod compare_inventories;

pub use compare_inventories::CompareInventoriesUseCase;
