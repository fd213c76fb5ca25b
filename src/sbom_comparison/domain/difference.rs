use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing one identity across the two inventories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifferenceType {
    /// Present in both with the same version
    Common,
    /// Present in both with different versions
    Version,
    /// Present only in the second inventory
    Added,
    /// Present only in the first inventory
    Removed,
}

impl DifferenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifferenceType::Common => "common",
            DifferenceType::Version => "version",
            DifferenceType::Added => "added",
            DifferenceType::Removed => "removed",
        }
    }
}

impl fmt::Display for DifferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of comparison output
///
/// A `None` version means the component is absent from that inventory; a
/// component that is present without a declared version carries `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDifference {
    pub component_name: String,
    pub app1_version: Option<String>,
    pub app2_version: Option<String>,
    pub difference_type: DifferenceType,
    pub license_diff: bool,
    pub app1_license: Option<String>,
    pub app2_license: Option<String>,
}

impl ComponentDifference {
    /// True for every outcome other than `common`
    pub fn is_change(&self) -> bool {
        self.difference_type != DifferenceType::Common
    }
}
