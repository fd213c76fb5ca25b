use serde::{Deserialize, Serialize};

/// Aggregate counts derived from the classified difference rows
///
/// Each row lands in exactly one of the four buckets, so the bucket totals
/// always add up to the number of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub total_common: usize,
    pub total_unique_app1: usize,
    pub total_unique_app2: usize,
    pub total_version_differences: usize,
    pub license_differences: usize,
    pub similarity_percentage: f64,
}

impl ComparisonSummary {
    /// Number of distinct identities across both inventories
    pub fn total_identities(&self) -> usize {
        self.total_common
            + self.total_unique_app1
            + self.total_unique_app2
            + self.total_version_differences
    }

    /// True when anything other than identical components was found
    pub fn has_differences(&self) -> bool {
        self.total_unique_app1 > 0
            || self.total_unique_app2 > 0
            || self.total_version_differences > 0
            || self.license_differences > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_identities_and_differences() {
        let summary = ComparisonSummary {
            total_common: 3,
            total_unique_app1: 1,
            total_unique_app2: 2,
            total_version_differences: 4,
            license_differences: 0,
            similarity_percentage: 30.0,
        };
        assert_eq!(summary.total_identities(), 10);
        assert!(summary.has_differences());
    }

    #[test]
    fn test_license_only_counts_as_difference() {
        let summary = ComparisonSummary {
            total_common: 1,
            total_unique_app1: 0,
            total_unique_app2: 0,
            total_version_differences: 0,
            license_differences: 1,
            similarity_percentage: 100.0,
        };
        assert!(summary.has_differences());
    }
}
