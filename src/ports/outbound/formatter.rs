use crate::sbom_comparison::domain::ComparisonResult;
use crate::shared::Result;

/// ComparisonFormatter port for projecting a frozen result into an export
///
/// Formatters read only the stored record, so formatting the same result
/// twice yields identical output.
pub trait ComparisonFormatter {
    /// Formats the comparison result
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, result: &ComparisonResult) -> Result<String>;
}
