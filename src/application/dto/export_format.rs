use crate::shared::error::ComparisonError;

/// Export format enumeration for comparison results
///
/// The external string (`json` | `csv` | `report`) is converted to this closed
/// variant at the interface boundary, so every handler is checked for
/// exhaustiveness at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Lossless JSON serialization of the comparison record (default)
    #[default]
    Json,
    /// One row per difference, for spreadsheets
    Csv,
    /// Structured Markdown report for document rendering
    Report,
}

impl ExportFormat {
    /// File extension conventionally used for the format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Report => "md",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "report" => Ok(ExportFormat::Report),
            _ => Err(ComparisonError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Report => write!(f, "report"),
        }
    }
}
