use serde::Serialize;

/// One row of a recommendation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub group: String,
    pub artifact: String,
    /// `None` when no descriptor manages the coordinate.
    pub version: Option<String>,
}

impl ReportEntry {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>, version: Option<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version,
        }
    }
}

/// RecommendationReport - the rendered outcome of a recommendation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecommendationReport {
    pub entries: Vec<ReportEntry>,
}

impl RecommendationReport {
    pub fn new(entries: Vec<ReportEntry>) -> Self {
        Self { entries }
    }

    /// Whether any queried coordinate came back without a recommendation.
    pub fn has_missing(&self) -> bool {
        self.entries.iter().any(|entry| entry.version.is_none())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_missing() {
        let report = RecommendationReport::new(vec![
            ReportEntry::new("org", "lib", Some("1.0".to_string())),
            ReportEntry::new("org", "gone", None),
        ]);
        assert!(report.has_missing());
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_all_resolved() {
        let report =
            RecommendationReport::new(vec![ReportEntry::new("org", "lib", Some("1.0".into()))]);
        assert!(!report.has_missing());
    }
}
