use crate::application::dto::{ComparisonRequest, ExportFormat};
use crate::application::factories::FormatterFactory;
use crate::ports::inbound::ComparisonPort;
use crate::ports::outbound::{ComparisonHistory, InventoryRepository, ProgressReporter};
use crate::sbom_comparison::domain::{ComparisonResult, ComponentInventory};
use crate::sbom_comparison::services::ComparisonEngine;
use crate::shared::error::ComparisonError;
use crate::shared::Result;
use async_trait::async_trait;
use std::str::FromStr;

/// CompareInventoriesUseCase - Core use case for SBOM comparison
///
/// This use case orchestrates loading, comparing, recording and exporting
/// using generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `IR` - InventoryRepository implementation
/// * `HS` - ComparisonHistory implementation
/// * `PR` - ProgressReporter implementation
pub struct CompareInventoriesUseCase<IR, HS, PR> {
    inventory_repository: IR,
    history: HS,
    progress_reporter: PR,
    engine: ComparisonEngine,
}

impl<IR, HS, PR> CompareInventoriesUseCase<IR, HS, PR>
where
    IR: InventoryRepository,
    HS: ComparisonHistory,
    PR: ProgressReporter,
{
    /// Creates a new use case with injected dependencies and name matching
    pub fn new(inventory_repository: IR, history: HS, progress_reporter: PR) -> Self {
        Self {
            inventory_repository,
            history,
            progress_reporter,
            engine: ComparisonEngine::default(),
        }
    }

    /// Replaces the comparison engine, e.g. to use another identity-key policy
    pub fn with_engine(mut self, engine: ComparisonEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Executes the comparison use case
    ///
    /// Nothing is recorded unless the whole comparison succeeds.
    pub async fn execute(&self, request: ComparisonRequest) -> Result<ComparisonResult> {
        // Step 1: Reject malformed requests before touching the repository
        Self::validate_request(&request)?;

        // Step 2: Load both inventories concurrently
        let (app1, app2) = self.load_inventories(&request).await?;

        // Step 3: Compare
        self.progress_reporter.report("🔍 Comparing components...");
        let result = self.engine.compare(&app1, &app2)?;

        // Step 4: Record in history if requested
        if request.record_history {
            self.history.record(&result).await?;
            tracing::info!(
                comparison_id = result.comparison_id(),
                app1 = %request.app1_id,
                app2 = %request.app2_id,
                "comparison recorded"
            );
        }

        self.report_summary(&result);
        Ok(result)
    }

    /// Returns stored comparisons, newest first
    pub async fn history(&self) -> Result<Vec<ComparisonResult>> {
        self.history.list().await
    }

    /// Returns a stored comparison or `ComparisonNotFound`
    pub async fn find(&self, comparison_id: &str) -> Result<ComparisonResult> {
        self.history.find(comparison_id).await?.ok_or_else(|| {
            ComparisonError::ComparisonNotFound {
                comparison_id: comparison_id.to_string(),
            }
            .into()
        })
    }

    /// Projects a result into the requested export format
    pub fn export_as(&self, result: &ComparisonResult, format: ExportFormat) -> Result<Vec<u8>> {
        self.progress_reporter
            .report(FormatterFactory::progress_message(format));
        let content = FormatterFactory::create(format).format(result)?;
        Ok(content.into_bytes())
    }

    fn validate_request(request: &ComparisonRequest) -> Result<()> {
        for id in [&request.app1_id, &request.app2_id] {
            if id.trim().is_empty() {
                return Err(ComparisonError::invalid_input(
                    "Inventory identifier must not be empty",
                    "Pass the identifiers of two generated inventories",
                )
                .into());
            }
        }

        if request.app1_id == request.app2_id {
            return Err(ComparisonError::invalid_input(
                format!("Cannot compare inventory {} with itself", request.app1_id),
                "Select two different applications to compare",
            )
            .into());
        }

        Ok(())
    }

    async fn load_inventories(
        &self,
        request: &ComparisonRequest,
    ) -> Result<(ComponentInventory, ComponentInventory)> {
        self.progress_reporter.report(&format!(
            "📖 Loading inventories: {} and {}",
            request.app1_id, request.app2_id
        ));

        let (app1, app2) = futures::future::try_join(
            self.inventory_repository.get_inventory(&request.app1_id),
            self.inventory_repository.get_inventory(&request.app2_id),
        )
        .await?;

        for inventory in [&app1, &app2] {
            self.progress_reporter.report(&format!(
                "   - {} ({}, {}): {} component(s)",
                inventory.inventory_id(),
                inventory.application_name(),
                inventory.platform(),
                inventory.components().len()
            ));
        }

        Ok((app1, app2))
    }

    fn report_summary(&self, result: &ComparisonResult) {
        let summary = result.summary();
        self.progress_reporter.report_completion(&format!(
            "✅ Comparison complete: {:.2}% similar ({} common, {} version change(s), {} only in {}, {} only in {}, {} license difference(s))",
            summary.similarity_percentage,
            summary.total_common,
            summary.total_version_differences,
            summary.total_unique_app1,
            result.app1().name,
            summary.total_unique_app2,
            result.app2().name,
            summary.license_differences
        ));
    }
}

#[async_trait]
impl<IR, HS, PR> ComparisonPort for CompareInventoriesUseCase<IR, HS, PR>
where
    IR: InventoryRepository,
    HS: ComparisonHistory,
    PR: ProgressReporter,
{
    async fn compare(&self, request: ComparisonRequest) -> Result<ComparisonResult> {
        self.execute(request).await
    }

    async fn get_history(&self) -> Result<Vec<ComparisonResult>> {
        self.history().await
    }

    async fn find_comparison(&self, comparison_id: &str) -> Result<ComparisonResult> {
        self.find(comparison_id).await
    }

    fn export(&self, result: &ComparisonResult, format: &str) -> Result<Vec<u8>> {
        let format = ExportFormat::from_str(format)?;
        self.export_as(result, format)
    }
}
