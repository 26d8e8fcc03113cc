use crate::application::dto::RecommendationReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Renders a recommendation report as pretty-printed JSON.
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

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RecommendationReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
