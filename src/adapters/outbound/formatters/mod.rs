/// Formatter adapters for the comparison export formats
mod csv_formatter;
mod json_formatter;
mod report_formatter;

pub use csv_formatter::CsvFormatter;
pub use json_formatter::JsonFormatter;
pub use report_formatter::ReportFormatter;
