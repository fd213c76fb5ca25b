use crate::application::read_models::{
    ApplicationView, ComparisonReport, ComparisonReportBuilder, DifferenceTable,
};
use crate::ports::outbound::ComparisonFormatter;
use crate::sbom_comparison::domain::ComparisonResult;
use crate::shared::Result;

/// ReportFormatter adapter rendering the comparison report as Markdown
///
/// The document carries title, timestamp, a summary block and the difference
/// table. Turning it into a paginated document is left to the consumer.
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Flattens line breaks so free text cannot end a heading or list item
    fn escape_markdown_inline(text: &str) -> String {
        text.replace("\r\n", " ").replace(['\n', '\r'], " ")
    }

    /// Escapes pipe characters and line breaks for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        Self::escape_markdown_inline(text).replace('|', "\\|")
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl ReportFormatter {
    fn render_header(&self, output: &mut String, report: &ComparisonReport) {
        output.push_str(&format!(
            "# {}\n\n",
            Self::escape_markdown_inline(&report.title)
        ));
        output.push_str(&format!("- Generated: {}\n", report.generated_at));
        output.push_str(&format!("- Comparison ID: `{}`\n\n", report.comparison_id));
    }

    fn render_applications(&self, output: &mut String, report: &ComparisonReport) {
        output.push_str("## Applications\n\n");
        output.push_str("| | Name | ID | Platform | Components |\n");
        output.push_str("|---|---|---|---|---|\n");
        Self::render_application_row(output, "App1", &report.app1);
        Self::render_application_row(output, "App2", &report.app2);
        output.push('\n');
    }

    fn render_application_row(output: &mut String, label: &str, app: &ApplicationView) {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            label,
            Self::escape_markdown_table_cell(&app.name),
            Self::escape_markdown_table_cell(&app.id),
            Self::escape_markdown_table_cell(&app.platform),
            app.component_count
        ));
    }

    fn render_summary(&self, output: &mut String, report: &ComparisonReport) {
        let summary = &report.summary;
        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "- Similarity: {:.2}%\n",
            summary.similarity_percentage
        ));
        output.push_str(&format!("- Common components: {}\n", summary.total_common));
        output.push_str(&format!(
            "- Version differences: {}\n",
            summary.total_version_differences
        ));
        output.push_str(&format!(
            "- Only in {}: {}\n",
            Self::escape_markdown_inline(&report.app1.name),
            summary.total_unique_app1
        ));
        output.push_str(&format!(
            "- Only in {}: {}\n",
            Self::escape_markdown_inline(&report.app2.name),
            summary.total_unique_app2
        ));
        output.push_str(&format!(
            "- License differences: {}\n\n",
            summary.license_differences
        ));
    }

    fn render_differences(&self, output: &mut String, table: &DifferenceTable) {
        output.push_str("## Component Differences\n\n");

        if table.is_empty() {
            output.push_str("*Both inventories are empty.*\n");
            return;
        }

        output.push_str(&format!("| {} |\n", DifferenceTable::HEADER.join(" | ")));
        output.push_str(&format!(
            "|{}\n",
            "---|".repeat(DifferenceTable::HEADER.len())
        ));
        for row in &table.rows {
            let cells = row
                .cells()
                .iter()
                .map(|cell| Self::escape_markdown_table_cell(cell))
                .collect::<Vec<_>>();
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
    }
}

impl ComparisonFormatter for ReportFormatter {
    fn format(&self, result: &ComparisonResult) -> Result<String> {
        let report = ComparisonReportBuilder::build(result);
        let mut output = String::new();

        self.render_header(&mut output, &report);
        self.render_applications(&mut output, &report);
        self.render_summary(&mut output, &report);
        self.render_differences(&mut output, &report.table);

        Ok(output)
    }
}
