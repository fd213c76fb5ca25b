//! Builder for constructing ComparisonReport from a frozen comparison record

use super::comparison_report::{ApplicationView, ComparisonReport, SummaryView};
use super::difference_table::DifferenceTable;
use crate::sbom_comparison::domain::{ComparisonResult, InventoryDescriptor};
use chrono::SecondsFormat;

/// Builder for constructing ComparisonReport from a comparison record
///
/// Works solely on the stored record, so the same record always produces
/// the same report.
pub struct ComparisonReportBuilder;

impl ComparisonReportBuilder {
    pub fn build(result: &ComparisonResult) -> ComparisonReport {
        ComparisonReport {
            title: format!(
                "SBOM Comparison Report: {} vs {}",
                result.app1().name,
                result.app2().name
            ),
            generated_at: result
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            comparison_id: result.comparison_id().to_string(),
            app1: Self::build_application(result.app1()),
            app2: Self::build_application(result.app2()),
            summary: Self::build_summary(result),
            table: DifferenceTable::from_differences(result.differences()),
        }
    }

    fn build_application(descriptor: &InventoryDescriptor) -> ApplicationView {
        ApplicationView {
            id: descriptor.id.clone(),
            name: descriptor.name.clone(),
            platform: descriptor.platform.clone(),
            component_count: descriptor.component_count,
        }
    }

    fn build_summary(result: &ComparisonResult) -> SummaryView {
        let summary = result.summary();
        SummaryView {
            total_common: summary.total_common,
            total_unique_app1: summary.total_unique_app1,
            total_unique_app2: summary.total_unique_app2,
            total_version_differences: summary.total_version_differences,
            license_differences: summary.license_differences,
            similarity_percentage: summary.similarity_percentage,
        }
    }
}
