use crate::version_recommendation::domain::ModuleId;

/// RecommendationRequest - Internal request DTO for a recommendation run
///
/// An empty query list means "report every recommended version".
#[derive(Debug, Clone, Default)]
pub struct RecommendationRequest {
    /// Coordinates to look up, in the order they were asked for
    pub queries: Vec<ModuleId>,
}

impl RecommendationRequest {
    pub fn new(queries: Vec<ModuleId>) -> Self {
        Self { queries }
    }

    pub fn is_full_report(&self) -> bool {
        self.queries.is_empty()
    }
}
