//! sbom-compare - SBOM comparison engine
//!
//! This library compares the component inventories of two applications,
//! classifies every component as common, version-changed, added or removed,
//! flags license disagreements and exports the frozen result as JSON, CSV or
//! a Markdown report. It follows hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_comparison`): Matcher, Differ, Summarizer and Result Assembler
//! - **Application Layer** (`application`): Use cases, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_compare::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let inventories = JsonInventoryRepository::new("inventories");
//! let history = FileSystemHistoryStore::new(".sbom-compare/history");
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = CompareInventoriesUseCase::new(inventories, history, progress_reporter);
//!
//! // Execute
//! let result = use_case
//!     .execute(ComparisonRequest::new("web-1", "web-2"))
//!     .await?;
//!
//! // Export
//! let csv = use_case.export(&result, "csv")?;
//! println!("{}", String::from_utf8_lossy(&csv));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_comparison;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemHistoryStore, FileSystemWriter, JsonInventoryRepository, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter, ReportFormatter};
    pub use crate::adapters::outbound::memory::{InMemoryHistoryStore, InMemoryInventoryRepository};
    pub use crate::application::dto::{ComparisonRequest, ExportFormat};
    pub use crate::application::use_cases::CompareInventoriesUseCase;
    pub use crate::ports::inbound::ComparisonPort;
    pub use crate::ports::outbound::{
        ComparisonFormatter, ComparisonHistory, InventoryRepository, OutputPresenter,
        ProgressReporter,
    };
    pub use crate::sbom_comparison::domain::{
        ComparisonResult, ComparisonSummary, Component, ComponentDifference, ComponentInventory,
        DifferenceType, InventoryStatus,
    };
    pub use crate::sbom_comparison::policies::{IdentityKeyPolicy, MatchKey};
    pub use crate::sbom_comparison::services::ComparisonEngine;
    pub use crate::shared::error::ComparisonError;
    pub use crate::shared::Result;
}
