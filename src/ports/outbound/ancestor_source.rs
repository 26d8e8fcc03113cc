use crate::shared::Result;
use crate::version_recommendation::domain::Coordinate;
use async_trait::async_trait;

/// AncestorSource port for materializing ancestor descriptors.
///
/// The effective-model builder calls back through this capability interface
/// whenever a descriptor references a parent or imports another BOM's
/// management section. Injecting it keeps the builder testable with canned
/// descriptor bytes and no real dependency resolution.
///
/// Repository declarations encountered while resolving an ancestor chain are
/// ignored: every coordinate is satisfied through the pre-established
/// dependency-resolution collaborator, never through new remote repositories.
#[async_trait]
pub trait AncestorSource: Send + Sync {
    /// Materializes the descriptor bytes for an ancestor coordinate.
    ///
    /// # Errors
    /// Returns an error when the ancestor cannot be materialized. Unlike
    /// candidate scanning, this failure is fatal to the requesting
    /// descriptor's whole resolution chain.
    async fn resolve_ancestor(&self, coordinate: &Coordinate) -> Result<Vec<u8>>;
}
