use crate::application::read_models::DifferenceTable;
use crate::ports::outbound::ComparisonFormatter;
use crate::sbom_comparison::domain::ComparisonResult;
use crate::shared::Result;

/// CsvFormatter adapter producing one row per component difference
///
/// Every data field is wrapped in double quotes, so commas inside names or
/// license expressions stay in their cell.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Double-quote escaping per RFC 4180, with line breaks flattened
    fn escape_csv(field: &str) -> String {
        field
            .replace('"', "\"\"")
            .replace("\r\n", " ")
            .replace(['\n', '\r'], " ")
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonFormatter for CsvFormatter {
    fn format(&self, result: &ComparisonResult) -> Result<String> {
        let table = DifferenceTable::from_differences(result.differences());

        let mut output = DifferenceTable::HEADER.join(",");
        output.push('\n');

        for row in &table.rows {
            let line = row
                .cells()
                .iter()
                .map(|cell| format!("\"{}\"", Self::escape_csv(cell)))
                .collect::<Vec<_>>()
                .join(",");
            output.push_str(&line);
            output.push('\n');
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_comparison::domain::{Component, ComponentInventory};
    use crate::sbom_comparison::services::ComparisonEngine;

    fn compare(app1: Vec<Component>, app2: Vec<Component>) -> ComparisonResult {
        ComparisonEngine::default()
            .compare(
                &ComponentInventory::new("a", "A", "linux", app1),
                &ComponentInventory::new("b", "B", "linux", app2),
            )
            .unwrap()
    }

    #[test]
    fn test_csv_header_and_rows() {
        let result = compare(
            vec![Component::new("lodash").with_version("4.17.21").with_license("MIT")],
            vec![Component::new("lodash").with_version("4.17.20").with_license("MIT")],
        );
        let csv = CsvFormatter::new().format(&result).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "Component Name,App1 Version,App2 Version,Difference Type,App1 License,App2 License"
        );
        assert_eq!(
            lines[1],
            "\"lodash\",\"4.17.21\",\"4.17.20\",\"version\",\"MIT\",\"MIT\""
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_csv_missing_values_use_placeholder() {
        let result = compare(vec![Component::new("axios").with_version("1.4.0")], vec![]);
        let csv = CsvFormatter::new().format(&result).unwrap();
        assert!(csv.contains("\"axios\",\"1.4.0\",\"N/A\",\"removed\",\"N/A\",\"N/A\""));
    }

    #[test]
    fn test_csv_escapes_quotes_and_commas() {
        let result = compare(
            vec![Component::new("weird")
                .with_version("1")
                .with_license("MIT, \"modified\"\nsee NOTICE")],
            vec![],
        );
        let csv = CsvFormatter::new().format(&result).unwrap();
        assert!(csv.contains("\"MIT, \"\"modified\"\" see NOTICE\""));
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_csv_keeps_one_record_per_line() {
        assert_eq!(CsvFormatter::escape_csv("MIT\r\nApache-2.0\rBSD"), "MIT Apache-2.0 BSD");
    }

    #[test]
    fn test_csv_empty_comparison_has_header_only() {
        let result = compare(vec![], vec![]);
        let csv = CsvFormatter::new().format(&result).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
