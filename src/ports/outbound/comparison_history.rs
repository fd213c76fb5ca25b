use crate::sbom_comparison::domain::ComparisonResult;
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// ComparisonHistory port for the append-only log of comparison results
///
/// Records are keyed by `comparison_id` and immutable once written.
#[async_trait]
pub trait ComparisonHistory: Send + Sync {
    /// Appends a result to the log
    ///
    /// # Errors
    /// Returns `ComparisonError::HistoryConflict` if a record with the same
    /// id already exists, or an I/O error from the backing store.
    async fn record(&self, result: &ComparisonResult) -> Result<()>;

    /// Looks up a single record by id
    async fn find(&self, comparison_id: &str) -> Result<Option<ComparisonResult>>;

    /// Returns every stored record, newest `created_at` first
    async fn list(&self) -> Result<Vec<ComparisonResult>>;
}

#[async_trait]
impl<T: ComparisonHistory + ?Sized> ComparisonHistory for Box<T> {
    async fn record(&self, result: &ComparisonResult) -> Result<()> {
        (**self).record(result).await
    }

    async fn find(&self, comparison_id: &str) -> Result<Option<ComparisonResult>> {
        (**self).find(comparison_id).await
    }

    async fn list(&self) -> Result<Vec<ComparisonResult>> {
        (**self).list().await
    }
}

#[async_trait]
impl<T: ComparisonHistory + ?Sized> ComparisonHistory for Arc<T> {
    async fn record(&self, result: &ComparisonResult) -> Result<()> {
        (**self).record(result).await
    }

    async fn find(&self, comparison_id: &str) -> Result<Option<ComparisonResult>> {
        (**self).find(comparison_id).await
    }

    async fn list(&self) -> Result<Vec<ComparisonResult>> {
        (**self).list().await
    }
}
