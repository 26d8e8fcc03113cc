use crate::ports::outbound::DependencyResolver;
use crate::shared::Result;
use crate::version_recommendation::domain::{
    descriptor, Coordinate, DescriptorFile, DESCRIPTOR_CLASSIFIER,
};
use std::path::Path;
use tracing::{debug, warn};

/// Finds the BOM descriptors governing a project's version choices.
///
/// For every declared dependency, the locator asks the dependency-resolution
/// collaborator to materialize the matching `@pom` coordinate, then accepts a
/// candidate file only if it carries the descriptor extension and its raw
/// content declares `pom` packaging. The result preserves insertion order
/// (later descriptors override earlier ones downstream) and contains no
/// duplicate paths.
pub struct DescriptorLocator<'a, R: DependencyResolver> {
    resolver: &'a R,
}

impl<'a, R: DependencyResolver> DescriptorLocator<'a, R> {
    pub fn new(resolver: &'a R) -> Self {
        Self { resolver }
    }

    /// Locates all qualifying descriptors for the declared dependency set.
    ///
    /// # Errors
    /// Fails only when the declared dependency set itself cannot be
    /// enumerated. Per-candidate read failures are logged and the candidate
    /// is excluded.
    pub async fn locate(&self) -> Result<Vec<DescriptorFile>> {
        let declared = self.resolver.declared_dependencies().await?;
        let mut descriptors: Vec<DescriptorFile> = Vec::new();

        for dependency in &declared {
            if already_discovered(dependency, &descriptors) {
                debug!(coordinate = %dependency, "descriptor already discovered, skipping");
                continue;
            }

            let candidates = self
                .resolver
                .materialize(dependency, DESCRIPTOR_CLASSIFIER)
                .await;
            for candidate in candidates {
                if descriptors
                    .iter()
                    .any(|existing| existing.path() == candidate)
                {
                    continue;
                }
                if let Some(found) = qualify(&candidate).await {
                    descriptors.push(found);
                }
            }
        }

        Ok(descriptors)
    }
}

/// Dedup heuristic: a dependency is considered already discovered when some
/// accepted descriptor's path contains its `group/artifact/version` fragment.
/// A substring match, not a structural compare; see
/// [`Coordinate::as_path_fragment`].
fn already_discovered(dependency: &Coordinate, descriptors: &[DescriptorFile]) -> bool {
    let fragment = dependency.as_path_fragment();
    descriptors
        .iter()
        .any(|existing| existing.path().to_string_lossy().contains(&fragment))
}

/// Accepts a candidate file when its name carries the descriptor extension
/// and its content carries the packaging marker. Read failures exclude the
/// candidate without propagating.
async fn qualify(path: &Path) -> Option<DescriptorFile> {
    if !descriptor::has_descriptor_extension(path) {
        return None;
    }
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(error) => {
            warn!(
                path = %path.display(),
                error = %error,
                "excluding descriptor candidate: read failed"
            );
            return None;
        }
    };
    let found = DescriptorFile::new(path.to_path_buf(), content);
    if !found.has_packaging_marker() {
        return None;
    }
    Some(found)
}
