/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod comparison_request;
mod export_format;

pub use comparison_request::ComparisonRequest;
pub use export_format::ExportFormat;
