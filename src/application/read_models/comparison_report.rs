//! Structured report document for a comparison
//!
//! Page layout is left to whoever renders the document; this model only
//! carries the content.

use super::difference_table::DifferenceTable;

/// Main read model for the comparison report
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    /// Report title naming both applications
    pub title: String,
    /// RFC 3339 timestamp taken from the comparison record
    pub generated_at: String,
    pub comparison_id: String,
    pub app1: ApplicationView,
    pub app2: ApplicationView,
    pub summary: SummaryView,
    /// Same rows as the CSV export
    pub table: DifferenceTable,
}

/// View representation of one compared application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationView {
    pub id: String,
    pub name: String,
    pub platform: String,
    pub component_count: usize,
}

/// View representation of the summary block
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub total_common: usize,
    pub total_unique_app1: usize,
    pub total_unique_app2: usize,
    pub total_version_differences: usize,
    pub license_differences: usize,
    pub similarity_percentage: f64,
}
