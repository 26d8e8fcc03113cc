pub mod recommendation_report;
pub mod recommendation_request;

pub use recommendation_report::{RecommendationReport, ReportEntry};
pub use recommendation_request::RecommendationRequest;
