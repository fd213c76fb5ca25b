use super::{Differ, Matcher, ResultAssembler, Summarizer};
use crate::sbom_comparison::domain::{ComparisonResult, ComponentInventory};
use crate::sbom_comparison::policies::{IdentityKeyPolicy, MatchKey, NameKeyPolicy};
use crate::shared::error::ComparisonError;
use crate::shared::Result;

/// ComparisonEngine runs matcher, differ, summarizer and assembler over two
/// already-loaded inventories
///
/// Holds no mutable state, so one engine can serve concurrent callers.
pub struct ComparisonEngine {
    policy: Box<dyn IdentityKeyPolicy>,
}

impl ComparisonEngine {
    pub fn new(policy: Box<dyn IdentityKeyPolicy>) -> Self {
        Self { policy }
    }

    pub fn with_match_key(match_key: MatchKey) -> Self {
        Self::new(match_key.policy())
    }

    /// Compares two inventories
    ///
    /// Preconditions are checked before any diffing: the inventories must be
    /// distinct, completed and internally consistent.
    ///
    /// # Errors
    /// - `InvalidInput` for a self-comparison or an inventory that is not ready
    /// - `DataIntegrity` when a declared component count disagrees with the list
    pub fn compare(
        &self,
        app1: &ComponentInventory,
        app2: &ComponentInventory,
    ) -> Result<ComparisonResult> {
        if app1.inventory_id() == app2.inventory_id() {
            return Err(ComparisonError::invalid_input(
                format!(
                    "Cannot compare inventory {} with itself",
                    app1.inventory_id()
                ),
                "Select two different applications to compare",
            )
            .into());
        }

        for inventory in [app1, app2] {
            inventory.ensure_ready()?;
            inventory.verify_integrity()?;
        }

        let matcher = Matcher::new(self.policy.as_ref());
        let identities = matcher.match_inventories(app1.components(), app2.components());
        let differences = Differ::diff(&identities);
        let summary = Summarizer::summarize(&differences);

        tracing::debug!(
            app1 = app1.inventory_id(),
            app2 = app2.inventory_id(),
            identities = identities.len(),
            similarity = summary.similarity_percentage,
            "inventories compared"
        );

        Ok(ResultAssembler::assemble(
            app1,
            app2,
            &identities,
            differences,
            summary,
        ))
    }
}

impl Default for ComparisonEngine {
    fn default() -> Self {
        Self::new(Box::new(NameKeyPolicy))
    }
}
