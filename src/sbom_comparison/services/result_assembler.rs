use super::matcher::{MatchedIdentity, Presence};
use crate::sbom_comparison::domain::{
    CommonComponent, ComparisonResult, ComparisonSummary, ComponentDifference, ComponentInventory,
    DifferenceType, InventoryDescriptor,
};
use chrono::Utc;
use uuid::Uuid;

/// ResultAssembler service freezing a comparison into a [`ComparisonResult`]
///
/// Every call stamps a fresh UUID v4 and the current UTC time, so comparing
/// the same pair twice yields two distinct history entries.
pub struct ResultAssembler;

impl ResultAssembler {
    pub fn assemble(
        app1: &ComponentInventory,
        app2: &ComponentInventory,
        identities: &[MatchedIdentity<'_>],
        differences: Vec<ComponentDifference>,
        summary: ComparisonSummary,
    ) -> ComparisonResult {
        let common_components = Self::common_components(identities, &differences);

        ComparisonResult::new(
            Uuid::new_v4().to_string(),
            InventoryDescriptor::from(app1),
            InventoryDescriptor::from(app2),
            summary,
            differences,
            common_components,
            Utc::now(),
        )
    }

    /// Detail rows (name/version/type/license) for every `common` identity,
    /// taken from the first inventory's representative
    pub fn common_components(
        identities: &[MatchedIdentity<'_>],
        differences: &[ComponentDifference],
    ) -> Vec<CommonComponent> {
        identities
            .iter()
            .zip(differences)
            .filter(|(_, difference)| difference.difference_type == DifferenceType::Common)
            .filter_map(|(identity, difference)| match identity.presence {
                Presence::InBoth(left, _) => Some(CommonComponent {
                    name: difference.component_name.clone(),
                    version: difference.app1_version.clone(),
                    component_type: left.component_type().map(String::from),
                    license: difference.app1_license.clone(),
                }),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_comparison::domain::Component;
    use crate::sbom_comparison::policies::NameKeyPolicy;
    use crate::sbom_comparison::services::{Differ, Matcher, Summarizer};

    fn inventories() -> (ComponentInventory, ComponentInventory) {
        let app1 = ComponentInventory::new(
            "app-1",
            "Web",
            "linux",
            vec![
                Component::new("react")
                    .with_version("18.2.0")
                    .with_type("framework")
                    .with_license("MIT"),
                Component::new("axios").with_version("1.4.0"),
            ],
        );
        let app2 = ComponentInventory::new(
            "app-2",
            "Web v2",
            "linux",
            vec![
                Component::new("react").with_version("18.2.0").with_license("MIT"),
                Component::new("axios").with_version("1.6.0"),
            ],
        );
        (app1, app2)
    }

    fn assemble(app1: &ComponentInventory, app2: &ComponentInventory) -> ComparisonResult {
        let matcher = Matcher::new(&NameKeyPolicy);
        let identities = matcher.match_inventories(app1.components(), app2.components());
        let differences = Differ::diff(&identities);
        let summary = Summarizer::summarize(&differences);
        ResultAssembler::assemble(app1, app2, &identities, differences, summary)
    }

    #[test]
    fn test_assemble_freezes_metadata() {
        let (app1, app2) = inventories();
        let result = assemble(&app1, &app2);

        assert_eq!(result.app1().id, "app-1");
        assert_eq!(result.app2().name, "Web v2");
        assert_eq!(result.app1().component_count, 2);
        assert_eq!(result.differences().len(), 2);
        assert_eq!(result.summary().total_common, 1);
        assert_eq!(result.summary().total_version_differences, 1);
    }

    #[test]
    fn test_common_components_projection() {
        let (app1, app2) = inventories();
        let result = assemble(&app1, &app2);

        assert_eq!(result.common_components().len(), 1);
        let common = &result.common_components()[0];
        assert_eq!(common.name, "react");
        assert_eq!(common.version.as_deref(), Some("18.2.0"));
        assert_eq!(common.component_type.as_deref(), Some("framework"));
        assert_eq!(common.license.as_deref(), Some("MIT"));
    }

    #[test]
    fn test_each_assembly_gets_new_identity() {
        let (app1, app2) = inventories();
        let first = assemble(&app1, &app2);
        let second = assemble(&app1, &app2);

        assert_ne!(first.comparison_id(), second.comparison_id());
        assert_eq!(first.summary(), second.summary());
        assert_eq!(first.differences(), second.differences());
        assert!(Uuid::parse_str(first.comparison_id()).is_ok());
    }
}
