use crate::shared::Result;
use crate::version_recommendation::domain::Coordinate;
use async_trait::async_trait;
use std::path::PathBuf;

/// DependencyResolver port for the build-tool collaborator.
///
/// This port abstracts the external dependency-management system that knows
/// the project's declared dependency set and can turn a coordinate into local
/// file(s).
///
/// # Async Support
/// Implementations must be `Send + Sync` to support concurrent access from
/// multiple rule evaluations querying recommendations at the same time.
#[async_trait]
pub trait DependencyResolver: Send + Sync {
    /// The project's full declared dependency set across all scopes, in
    /// declaration order.
    ///
    /// # Errors
    /// Returns an error when the project's dependency set cannot be
    /// enumerated at all. Per-coordinate resolution failures are never
    /// surfaced here.
    async fn declared_dependencies(&self) -> Result<Vec<Coordinate>>;

    /// Resolves a synthetic `group:artifact:version@classifier` coordinate to
    /// local file(s).
    ///
    /// Lenient by contract: resolution failures for individual artifacts
    /// yield an empty set rather than an error, so one unresolvable
    /// dependency never aborts a whole scan.
    async fn materialize(&self, coordinate: &Coordinate, classifier: &str) -> Vec<PathBuf>;
}
