use super::model_builder::EffectiveModelBuilder;
use crate::ports::outbound::AncestorSource;
use crate::shared::Result;
use crate::version_recommendation::domain::{DescriptorFile, RecommendationMap};
use tracing::{debug, info, warn};

/// Merges the effective dependency-management entries of each descriptor, in
/// locator order, into one flat `group:artifact -> version` mapping.
///
/// Later descriptors win on conflict. A descriptor that contributes nothing
/// (wrong extension, unbuildable model, empty management section) never stops
/// later descriptors from contributing.
pub struct RecommendationMapBuilder<'a, A: AncestorSource> {
    models: &'a EffectiveModelBuilder<A>,
}

impl<'a, A: AncestorSource> RecommendationMapBuilder<'a, A> {
    pub fn new(models: &'a EffectiveModelBuilder<A>) -> Self {
        Self { models }
    }

    /// Builds the recommendation map over descriptors in discovery order.
    pub async fn build(&self, descriptors: &[DescriptorFile]) -> Result<RecommendationMap> {
        let mut map = RecommendationMap::new();

        for file in descriptors {
            if !file.has_descriptor_extension() {
                debug!(path = %file.path().display(), "not a descriptor file, skipping");
                continue;
            }

            let model = match self.models.build(file).await {
                Ok(model) => model,
                Err(error) => {
                    warn!(
                        path = %file.path().display(),
                        error = %error,
                        "skipping descriptor: effective model could not be built"
                    );
                    continue;
                }
            };

            if model.managed_dependencies().is_empty() {
                debug!(
                    coordinate = %model.coordinate(),
                    "descriptor manages no versions, skipping"
                );
                continue;
            }

            info!(coordinate = %model.coordinate(), "using bom");
            for entry in model.managed_dependencies() {
                map.insert(entry.module().clone(), entry.version().to_string());
            }
        }

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::AncestorSource;
    use crate::version_recommendation::domain::Coordinate;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct NoAncestors;

    #[async_trait]
    impl AncestorSource for NoAncestors {
        async fn resolve_ancestor(&self, coordinate: &Coordinate) -> Result<Vec<u8>> {
            anyhow::bail!("no ancestor available for {}", coordinate)
        }
    }

    fn bom(name: &str, group: &str, artifact: &str, version: &str) -> DescriptorFile {
        let content = format!(
            r#"<project>
  <groupId>org.example</groupId><artifactId>{name}</artifactId><version>1.0</version>
  <packaging>pom</packaging>
  <dependencyManagement><dependencies>
    <dependency><groupId>{group}</groupId><artifactId>{artifact}</artifactId><version>{version}</version></dependency>
  </dependencies></dependencyManagement>
</project>"#
        );
        DescriptorFile::new(PathBuf::from(format!("/repo/{name}-1.0.pom")), content)
    }

    fn builder_with_no_ancestors() -> EffectiveModelBuilder<NoAncestors> {
        EffectiveModelBuilder::new(NoAncestors, HashMap::new())
    }

    #[tokio::test]
    async fn test_later_descriptor_wins() {
        let models = builder_with_no_ancestors();
        let builder = RecommendationMapBuilder::new(&models);
        let descriptors = vec![
            bom("first-bom", "org", "lib", "1.0"),
            bom("second-bom", "org", "lib", "2.0"),
        ];

        let map = builder.build(&descriptors).await.unwrap();

        assert_eq!(map.version_for("org", "lib"), Some("2.0"));
    }

    #[tokio::test]
    async fn test_wrong_extension_contributes_nothing() {
        let models = builder_with_no_ancestors();
        let builder = RecommendationMapBuilder::new(&models);
        let mut descriptor = bom("ok-bom", "org", "lib", "1.0");
        descriptor = DescriptorFile::new(
            PathBuf::from("/repo/ok-bom-1.0.txt"),
            descriptor.content().to_string(),
        );

        let map = builder.build(&[descriptor]).await.unwrap();

        assert!(map.is_empty());
    }

    #[tokio::test]
    async fn test_failing_descriptor_does_not_stop_later_ones() {
        let models = builder_with_no_ancestors();
        let builder = RecommendationMapBuilder::new(&models);
        let broken = DescriptorFile::new(
            PathBuf::from("/repo/broken-1.0.pom"),
            // Parent cannot be resolved by NoAncestors.
            r#"<project>
  <parent><groupId>org</groupId><artifactId>gone</artifactId><version>1</version></parent>
  <artifactId>broken</artifactId><packaging>pom</packaging>
</project>"#
                .to_string(),
        );
        let descriptors = vec![broken, bom("good-bom", "org", "lib", "3.1")];

        let map = builder.build(&descriptors).await.unwrap();

        assert_eq!(map.version_for("org", "lib"), Some("3.1"));
    }

    #[tokio::test]
    async fn test_empty_management_section_skipped() {
        let models = builder_with_no_ancestors();
        let builder = RecommendationMapBuilder::new(&models);
        let empty = DescriptorFile::new(
            PathBuf::from("/repo/empty-1.0.pom"),
            r#"<project>
  <groupId>org.example</groupId><artifactId>empty</artifactId><version>1.0</version>
  <packaging>pom</packaging>
</project>"#
                .to_string(),
        );
        let descriptors = vec![empty, bom("good-bom", "org", "lib", "4.0")];

        let map = builder.build(&descriptors).await.unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map.version_for("org", "lib"), Some("4.0"));
    }
}
