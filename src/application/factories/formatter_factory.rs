use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter, ReportFormatter};
use crate::application::dto::ExportFormat;
use crate::ports::outbound::ComparisonFormatter;

/// Factory for creating comparison formatters
///
/// This factory encapsulates the creation logic for the export formats.
/// It belongs in the application layer as it maps an application-level
/// format choice onto infrastructure adapters.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified export format
    ///
    /// # Examples
    /// ```
    /// use sbom_compare::application::dto::ExportFormat;
    /// use sbom_compare::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(ExportFormat::Csv);
    /// ```
    pub fn create(format: ExportFormat) -> Box<dyn ComparisonFormatter> {
        match format {
            ExportFormat::Json => Box::new(JsonFormatter::new()),
            ExportFormat::Csv => Box::new(CsvFormatter::new()),
            ExportFormat::Report => Box::new(ReportFormatter::new()),
        }
    }

    /// Gets the progress message for the specified format
    pub fn progress_message(format: ExportFormat) -> &'static str {
        match format {
            ExportFormat::Json => "📝 Generating JSON export...",
            ExportFormat::Csv => "📝 Generating CSV export...",
            ExportFormat::Report => "📝 Generating comparison report...",
        }
    }
}
