use crate::application::dto::ComparisonRequest;
use crate::sbom_comparison::domain::ComparisonResult;
use crate::shared::Result;
use async_trait::async_trait;

/// ComparisonPort - Inbound port for the comparison use cases
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to run comparisons, browse history and export stored results.
#[async_trait]
pub trait ComparisonPort {
    /// Compares two inventories and records the result
    ///
    /// # Errors
    /// Returns an error if:
    /// - Either identifier does not resolve (`NotFound`)
    /// - Both identifiers are the same, or an inventory is not ready (`InvalidInput`)
    /// - An inventory is internally inconsistent (`DataIntegrity`)
    /// - The result cannot be recorded
    async fn compare(&self, request: ComparisonRequest) -> Result<ComparisonResult>;

    /// Returns stored comparisons, newest first
    async fn get_history(&self) -> Result<Vec<ComparisonResult>>;

    /// Returns one stored comparison
    ///
    /// # Errors
    /// Returns `NotFound` if no comparison is stored under the id
    async fn find_comparison(&self, comparison_id: &str) -> Result<ComparisonResult>;

    /// Projects a result into `json`, `csv` or `report` bytes
    ///
    /// # Errors
    /// Returns `UnsupportedFormat` for any other format string
    fn export(&self, result: &ComparisonResult, format: &str) -> Result<Vec<u8>>;
}
