use crate::application::dto::RecommendationReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a recommendation report.
pub trait ReportFormatter {
    /// Formats the report into its final textual representation.
    fn format(&self, report: &RecommendationReport) -> Result<String>;
}
