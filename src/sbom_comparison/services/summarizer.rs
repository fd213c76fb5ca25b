use crate::sbom_comparison::domain::{ComparisonSummary, ComponentDifference, DifferenceType};

/// Similarity reported when both inventories are empty
pub const EMPTY_SIMILARITY: f64 = 100.0;

/// Summarizer service reducing difference rows to aggregate statistics
pub struct Summarizer;

impl Summarizer {
    pub fn summarize(differences: &[ComponentDifference]) -> ComparisonSummary {
        let mut total_common = 0;
        let mut total_unique_app1 = 0;
        let mut total_unique_app2 = 0;
        let mut total_version_differences = 0;
        let mut license_differences = 0;

        for difference in differences {
            match difference.difference_type {
                DifferenceType::Common => total_common += 1,
                DifferenceType::Removed => total_unique_app1 += 1,
                DifferenceType::Added => total_unique_app2 += 1,
                DifferenceType::Version => total_version_differences += 1,
            }
            if difference.license_diff {
                license_differences += 1;
            }
        }

        let total = total_common + total_unique_app1 + total_unique_app2 + total_version_differences;

        ComparisonSummary {
            total_common,
            total_unique_app1,
            total_unique_app2,
            total_version_differences,
            license_differences,
            similarity_percentage: Self::similarity_percentage(total_common, total),
        }
    }

    /// `100 * common / total`, rounded to two decimals and kept within [0, 100]
    ///
    /// Two empty inventories are identical, so a zero denominator yields
    /// [`EMPTY_SIMILARITY`].
    pub fn similarity_percentage(common: usize, total: usize) -> f64 {
        if total == 0 {
            return EMPTY_SIMILARITY;
        }
        let raw = 100.0 * common as f64 / total as f64;
        ((raw * 100.0).round() / 100.0).clamp(0.0, 100.0)
    }
}
