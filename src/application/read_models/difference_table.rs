//! Flattened tabular view of comparison differences
//!
//! Shared by the CSV export and the report body so both always carry the
//! same cells.

use crate::sbom_comparison::domain::ComponentDifference;

/// Placeholder rendered for a value that is absent on one side
pub const NOT_AVAILABLE: &str = "N/A";

/// One flattened difference row, every cell already rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferenceRow {
    pub component_name: String,
    pub app1_version: String,
    pub app2_version: String,
    pub difference_type: String,
    pub app1_license: String,
    pub app2_license: String,
}

impl DifferenceRow {
    /// Cells in header order
    pub fn cells(&self) -> [&str; 6] {
        [
            self.component_name.as_str(),
            self.app1_version.as_str(),
            self.app2_version.as_str(),
            self.difference_type.as_str(),
            self.app1_license.as_str(),
            self.app2_license.as_str(),
        ]
    }
}

/// Table with one row per [`ComponentDifference`], in record order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferenceTable {
    pub rows: Vec<DifferenceRow>,
}

impl DifferenceTable {
    pub const HEADER: [&'static str; 6] = [
        "Component Name",
        "App1 Version",
        "App2 Version",
        "Difference Type",
        "App1 License",
        "App2 License",
    ];

    pub fn from_differences(differences: &[ComponentDifference]) -> Self {
        let rows = differences
            .iter()
            .map(|difference| DifferenceRow {
                component_name: difference.component_name.clone(),
                app1_version: Self::cell(difference.app1_version.as_deref()),
                app2_version: Self::cell(difference.app2_version.as_deref()),
                difference_type: difference.difference_type.to_string(),
                app1_license: Self::cell(difference.app1_license.as_deref()),
                app2_license: Self::cell(difference.app2_license.as_deref()),
            })
            .collect();
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn cell(value: Option<&str>) -> String {
        match value {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => NOT_AVAILABLE.to_string(),
        }
    }
}
