use crate::ports::outbound::{AncestorSource, DependencyResolver};
use crate::shared::error::AdvisorError;
use crate::shared::Result;
use crate::version_recommendation::domain::{Coordinate, DESCRIPTOR_CLASSIFIER};
use async_trait::async_trait;

/// ResolverAncestorSource adapter - materializes ancestor descriptors through
/// any [`DependencyResolver`].
///
/// The ancestor coordinate is resolved with the descriptor classifier and the
/// first resulting file's bytes are handed back. Unlike candidate scanning,
/// an empty resolution here is an error: the requesting descriptor's chain
/// cannot proceed without its ancestor.
pub struct ResolverAncestorSource<R: DependencyResolver> {
    resolver: R,
}

impl<R: DependencyResolver> ResolverAncestorSource<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl<R: DependencyResolver> AncestorSource for ResolverAncestorSource<R> {
    async fn resolve_ancestor(&self, coordinate: &Coordinate) -> Result<Vec<u8>> {
        let files = self
            .resolver
            .materialize(coordinate, DESCRIPTOR_CLASSIFIER)
            .await;
        let Some(path) = files.into_iter().next() else {
            return Err(AdvisorError::UnresolvableAncestor {
                coordinate: coordinate.to_string(),
                details: "dependency resolution produced no descriptor file".to_string(),
            }
            .into());
        };
        tokio::fs::read(&path)
            .await
            .map_err(|error| {
                AdvisorError::DescriptorRead {
                    path,
                    details: error.to_string(),
                }
                .into()
            })
    }
}
