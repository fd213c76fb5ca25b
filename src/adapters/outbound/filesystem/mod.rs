/// Filesystem adapters for file I/O operations
mod file_writer;
mod history_store;
mod inventory_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use history_store::FileSystemHistoryStore;
pub use inventory_reader::JsonInventoryRepository;
