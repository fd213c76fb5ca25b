/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (inventory source, history store, console, etc.).
pub mod comparison_history;
pub mod formatter;
pub mod inventory_repository;
pub mod output_presenter;
pub mod progress_reporter;

pub use comparison_history::ComparisonHistory;
pub use formatter::ComparisonFormatter;
pub use inventory_repository::InventoryRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
