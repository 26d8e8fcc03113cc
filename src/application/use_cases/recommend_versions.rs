use crate::application::dto::{RecommendationReport, RecommendationRequest, ReportEntry};
use crate::ports::outbound::{AncestorSource, DependencyResolver};
use crate::shared::Result;
use crate::version_recommendation::domain::RecommendationMap;
use crate::version_recommendation::services::{
    DescriptorLocator, EffectiveModelBuilder, RecommendationMapBuilder,
};
use std::collections::HashMap;
use tokio::sync::OnceCell;
use tracing::debug;

/// RecommendVersionsUseCase - answers "what version does policy recommend?"
/// for any `(group, artifact)` pair.
///
/// The recommendation map is computed lazily on first lookup and memoized for
/// the lifetime of the instance. `tokio::sync::OnceCell` gives the required
/// contract: at most one computation runs at a time, concurrent first-access
/// callers coalesce onto the in-flight computation, no caller ever observes a
/// partially built map, and a failed computation is not cached (the next
/// lookup retries).
///
/// # Type Parameters
/// * `R` - DependencyResolver implementation (the build-tool collaborator)
/// * `A` - AncestorSource implementation for parent/import resolution
pub struct RecommendVersionsUseCase<R, A>
where
    A: AncestorSource,
{
    resolver: R,
    models: EffectiveModelBuilder<A>,
    map: OnceCell<RecommendationMap>,
}

impl<R, A> RecommendVersionsUseCase<R, A>
where
    R: DependencyResolver,
    A: AncestorSource,
{
    /// Creates a new use case with injected collaborators.
    ///
    /// `project_properties` are the build-level properties made available to
    /// descriptor interpolation as the lowest-priority value source.
    pub fn new(
        resolver: R,
        ancestor_source: A,
        project_properties: HashMap<String, String>,
    ) -> Self {
        Self {
            resolver,
            models: EffectiveModelBuilder::new(ancestor_source, project_properties),
            map: OnceCell::new(),
        }
    }

    /// The sole externally consumed operation: the recommended version for a
    /// `(group, artifact)` pair, or `None` when no descriptor manages it.
    ///
    /// # Errors
    /// Surfaces a resolution error when the recommendation map cannot be
    /// computed at all (the failure is retried on the next call).
    pub async fn recommended_version(
        &self,
        group: &str,
        artifact: &str,
    ) -> Result<Option<String>> {
        let map = self.recommendation_map().await?;
        Ok(map.version_for(group, artifact).map(String::from))
    }

    /// The full memoized recommendation map, computing it on first access.
    pub async fn recommendation_map(&self) -> Result<&RecommendationMap> {
        self.map
            .get_or_try_init(|| async {
                debug!("computing recommendation map");
                let descriptors = DescriptorLocator::new(&self.resolver).locate().await?;
                RecommendationMapBuilder::new(&self.models)
                    .build(&descriptors)
                    .await
            })
            .await
    }

    /// Builds a report for the requested coordinates, or for every
    /// recommendation (sorted by module) when the request has no queries.
    pub async fn report(&self, request: &RecommendationRequest) -> Result<RecommendationReport> {
        let map = self.recommendation_map().await?;

        let entries = if request.is_full_report() {
            map.sorted_entries()
                .into_iter()
                .map(|(module, version)| {
                    ReportEntry::new(
                        module.group(),
                        module.artifact(),
                        Some(version.to_string()),
                    )
                })
                .collect()
        } else {
            request
                .queries
                .iter()
                .map(|module| {
                    ReportEntry::new(
                        module.group(),
                        module.artifact(),
                        map.get(module).map(String::from),
                    )
                })
                .collect()
        };

        Ok(RecommendationReport::new(entries))
    }
}
