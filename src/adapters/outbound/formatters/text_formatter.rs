use crate::application::dto::RecommendationReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Renders a recommendation report as aligned plain text, one module per
/// line. Modules with no recommended version show `(no recommendation)`.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &RecommendationReport) -> Result<String> {
        let mut output = String::new();
        let module_width = report
            .entries
            .iter()
            .map(|entry| entry.group.len() + 1 + entry.artifact.len())
            .max()
            .unwrap_or(0);

        for entry in &report.entries {
            let module = format!("{}:{}", entry.group, entry.artifact);
            let version = entry
                .version
                .as_deref()
                .unwrap_or("(no recommendation)");
            writeln!(output, "{module:<module_width$}  {version}")?;
        }
        Ok(output)
    }
}
