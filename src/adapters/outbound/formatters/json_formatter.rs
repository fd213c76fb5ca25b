use crate::ports::outbound::ComparisonFormatter;
use crate::sbom_comparison::domain::ComparisonResult;
use crate::shared::Result;

/// JsonFormatter adapter serializing the full comparison record
///
/// The output deserializes back into an equal [`ComparisonResult`].
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonFormatter for JsonFormatter {
    fn format(&self, result: &ComparisonResult) -> Result<String> {
        serde_json::to_string_pretty(result).map_err(Into::into)
    }
}
