use super::interpolation::Interpolator;
use super::pom_parser::{self, ParentRef, RawManagedDependency, RawModel};
use crate::ports::outbound::AncestorSource;
use crate::shared::error::AdvisorError;
use crate::shared::Result;
use crate::version_recommendation::domain::{
    Coordinate, DescriptorFile, EffectiveModel, ManagedDependency, ModuleId,
};
use dashmap::DashMap;
use futures::future::{BoxFuture, FutureExt};
use std::collections::HashMap;
use tracing::debug;

/// Builds the effective model of a descriptor: its raw content merged with
/// the full ancestor chain (parent inheritance plus import-scope management
/// sections), then interpolated.
///
/// Ancestors are materialized through the injected [`AncestorSource`] and
/// memoized per builder instance, so BOMs sharing a common parent resolve it
/// once. Repository declarations found along the chain are ignored.
pub struct EffectiveModelBuilder<A: AncestorSource> {
    ancestors: A,
    project_properties: HashMap<String, String>,
    assembled: DashMap<Coordinate, AssembledModel>,
}

/// Structural merge of a descriptor with its ancestor chain, before
/// interpolation. Maven interpolates only after the whole chain is assembled,
/// so a child property can still rewire a token used by a parent entry.
#[derive(Debug, Clone, Default)]
struct AssembledModel {
    group: Option<String>,
    artifact: Option<String>,
    version: Option<String>,
    properties: HashMap<String, String>,
    managed: Vec<RawManagedDependency>,
}

impl<A: AncestorSource> EffectiveModelBuilder<A> {
    pub fn new(ancestors: A, project_properties: HashMap<String, String>) -> Self {
        Self {
            ancestors,
            project_properties,
            assembled: DashMap::new(),
        }
    }

    /// Builds the effective model for one descriptor file.
    ///
    /// # Errors
    /// Fails when the descriptor itself is malformed, or when a referenced
    /// ancestor (parent or import) cannot be materialized or parsed. Ancestor
    /// failures are fatal to this descriptor's whole chain.
    pub async fn build(&self, descriptor: &DescriptorFile) -> Result<EffectiveModel> {
        let raw = pom_parser::parse(descriptor.content()).map_err(|error| {
            AdvisorError::MalformedDescriptor {
                path: descriptor.path().to_path_buf(),
                details: error.to_string(),
            }
        })?;
        let assembled = self.assemble(raw, Vec::new()).await?;
        self.finish(assembled, descriptor)
    }

    /// Merges one raw model with its resolved ancestors. `chain` carries the
    /// ancestor coordinates already being resolved, to cut cycles.
    fn assemble<'a>(
        &'a self,
        raw: RawModel,
        chain: Vec<Coordinate>,
    ) -> BoxFuture<'a, Result<AssembledModel>> {
        async move {
            let mut merged = AssembledModel::default();
            if let Some(parent_ref) = raw.parent.as_ref() {
                let parent = parent_coordinate(parent_ref)?;
                merged = self.assemble_ancestor(parent, chain.clone()).await?;
            }

            // groupId and version fall back to the parent's; artifactId never
            // inherits.
            let inherited_group = merged.group.take();
            let inherited_version = merged.version.take();
            merged.group = raw.group.or(inherited_group);
            merged.artifact = raw.artifact;
            merged.version = raw.version.or(inherited_version);

            for (key, value) in raw.properties {
                merged.properties.insert(key, value);
            }

            let mut own = Vec::new();
            let mut imported = Vec::new();
            for entry in raw.managed {
                if entry.is_import() {
                    let coordinate = self.import_coordinate(&entry, &merged)?;
                    let bom = self.assemble_ancestor(coordinate, chain.clone()).await?;
                    imported.extend(bom.managed);
                } else {
                    own.push(entry);
                }
            }

            // Precedence on the same group:artifact, lowest to highest:
            // inherited entries, imported entries, the descriptor's own.
            merge_managed(&mut merged.managed, imported);
            merge_managed(&mut merged.managed, own);
            Ok(merged)
        }
        .boxed()
    }

    async fn assemble_ancestor(
        &self,
        coordinate: Coordinate,
        mut chain: Vec<Coordinate>,
    ) -> Result<AssembledModel> {
        if chain.contains(&coordinate) {
            return Err(AdvisorError::UnresolvableAncestor {
                coordinate: coordinate.to_string(),
                details: "cyclic ancestor chain".to_string(),
            }
            .into());
        }
        if let Some(cached) = self.assembled.get(&coordinate) {
            return Ok(cached.clone());
        }

        let bytes = self
            .ancestors
            .resolve_ancestor(&coordinate)
            .await
            .map_err(|error| AdvisorError::UnresolvableAncestor {
                coordinate: coordinate.to_string(),
                details: error.to_string(),
            })?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        let raw =
            pom_parser::parse(&content).map_err(|error| AdvisorError::UnresolvableAncestor {
                coordinate: coordinate.to_string(),
                details: error.to_string(),
            })?;

        chain.push(coordinate.clone());
        let model = self.assemble(raw, chain).await?;
        self.assembled.insert(coordinate, model.clone());
        Ok(model)
    }

    /// Resolves the coordinate of an import-scope entry. Import coordinates
    /// routinely reference properties (`${spring.version}` and friends), so
    /// they are interpolated against everything merged so far.
    fn import_coordinate(
        &self,
        entry: &RawManagedDependency,
        merged: &AssembledModel,
    ) -> Result<Coordinate> {
        let group = required_import_field(entry, entry.group.as_deref(), "groupId")?;
        let artifact = required_import_field(entry, entry.artifact.as_deref(), "artifactId")?;
        let version = required_import_field(entry, entry.version.as_deref(), "version")?;
        let interpolator = Interpolator::new(
            merged.group.as_deref().unwrap_or_default(),
            merged.artifact.as_deref().unwrap_or_default(),
            merged.version.as_deref().unwrap_or_default(),
            &merged.properties,
            &self.project_properties,
        );
        Ok(Coordinate::new(
            interpolator.interpolate(group),
            interpolator.interpolate(artifact),
            interpolator.interpolate(version),
        ))
    }

    /// Completes the assembled model into an [`EffectiveModel`]: validates
    /// the identity coordinate, then interpolates every string field.
    fn finish(
        &self,
        assembled: AssembledModel,
        descriptor: &DescriptorFile,
    ) -> Result<EffectiveModel> {
        let group = assembled
            .group
            .clone()
            .ok_or_else(|| missing_field(descriptor, "groupId"))?;
        let artifact = assembled
            .artifact
            .clone()
            .ok_or_else(|| missing_field(descriptor, "artifactId"))?;
        let version = assembled
            .version
            .clone()
            .ok_or_else(|| missing_field(descriptor, "version"))?;

        let interpolator = Interpolator::new(
            &group,
            &artifact,
            &version,
            &assembled.properties,
            &self.project_properties,
        );

        let coordinate = Coordinate::new(
            interpolator.interpolate(&group),
            interpolator.interpolate(&artifact),
            interpolator.interpolate(&version),
        );

        let mut managed = Vec::new();
        for entry in &assembled.managed {
            let (Some(entry_group), Some(entry_artifact), Some(entry_version)) =
                (&entry.group, &entry.artifact, &entry.version)
            else {
                debug!(
                    descriptor = %descriptor.path().display(),
                    "skipping managed entry without complete coordinates"
                );
                continue;
            };
            managed.push(ManagedDependency::new(
                ModuleId::new(
                    interpolator.interpolate(entry_group),
                    interpolator.interpolate(entry_artifact),
                ),
                interpolator.interpolate(entry_version),
            ));
        }

        let properties = assembled
            .properties
            .iter()
            .map(|(key, value)| (key.clone(), interpolator.interpolate(value)))
            .collect();

        Ok(EffectiveModel::new(coordinate, managed, properties))
    }
}

fn missing_field(descriptor: &DescriptorFile, name: &str) -> anyhow::Error {
    AdvisorError::MalformedDescriptor {
        path: descriptor.path().to_path_buf(),
        details: format!("effective model is missing {}", name),
    }
    .into()
}

fn parent_coordinate(parent: &ParentRef) -> Result<Coordinate> {
    let describe = || {
        format!(
            "{}:{}:{}",
            parent.group.as_deref().unwrap_or("?"),
            parent.artifact.as_deref().unwrap_or("?"),
            parent.version.as_deref().unwrap_or("?"),
        )
    };
    let field = |value: &Option<String>, name: &str| -> Result<String> {
        value.clone().ok_or_else(|| {
            AdvisorError::UnresolvableAncestor {
                coordinate: describe(),
                details: format!("parent reference is missing {}", name),
            }
            .into()
        })
    };
    Ok(Coordinate::new(
        field(&parent.group, "groupId")?,
        field(&parent.artifact, "artifactId")?,
        field(&parent.version, "version")?,
    ))
}

fn required_import_field<'a>(
    entry: &RawManagedDependency,
    value: Option<&'a str>,
    name: &str,
) -> Result<&'a str> {
    value.ok_or_else(|| {
        AdvisorError::UnresolvableAncestor {
            coordinate: format!(
                "{}:{}:{}",
                entry.group.as_deref().unwrap_or("?"),
                entry.artifact.as_deref().unwrap_or("?"),
                entry.version.as_deref().unwrap_or("?"),
            ),
            details: format!("import entry is missing {}", name),
        }
        .into()
    })
}

/// Applies `overriding` on top of `base`: an entry replaces a base entry with
/// the same group/artifact in place, otherwise it appends.
fn merge_managed(base: &mut Vec<RawManagedDependency>, overriding: Vec<RawManagedDependency>) {
    for entry in overriding {
        match base
            .iter_mut()
            .find(|existing| existing.group == entry.group && existing.artifact == entry.artifact)
        {
            Some(existing) => *existing = entry,
            None => base.push(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Ancestor source backed by canned descriptor bytes, tracking resolution
    /// calls.
    struct CannedAncestors {
        descriptors: HashMap<Coordinate, String>,
        call_count: AtomicUsize,
    }

    impl CannedAncestors {
        fn new() -> Self {
            Self {
                descriptors: HashMap::new(),
                call_count: AtomicUsize::new(0),
            }
        }

        fn with_descriptor(mut self, notation: &str, content: &str) -> Self {
            self.descriptors
                .insert(Coordinate::parse(notation).unwrap(), content.to_string());
            self
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AncestorSource for CannedAncestors {
        async fn resolve_ancestor(&self, coordinate: &Coordinate) -> Result<Vec<u8>> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            self.descriptors
                .get(coordinate)
                .map(|content| content.as_bytes().to_vec())
                .ok_or_else(|| anyhow::anyhow!("no canned descriptor for {}", coordinate))
        }
    }

    fn descriptor(content: &str) -> DescriptorFile {
        DescriptorFile::new(PathBuf::from("/repo/test-bom.pom"), content.to_string())
    }

    fn builder(ancestors: CannedAncestors) -> EffectiveModelBuilder<CannedAncestors> {
        EffectiveModelBuilder::new(ancestors, HashMap::new())
    }

    fn version_of(model: &EffectiveModel, group: &str, artifact: &str) -> Option<String> {
        model
            .managed_dependencies()
            .iter()
            .find(|entry| entry.module() == &ModuleId::new(group, artifact))
            .map(|entry| entry.version().to_string())
    }

    const STANDALONE_BOM: &str = r#"<project>
  <groupId>org.example</groupId>
  <artifactId>standalone-bom</artifactId>
  <version>1.0</version>
  <packaging>pom</packaging>
  <properties><lib.version>1.2.3</lib.version></properties>
  <dependencyManagement><dependencies>
    <dependency><groupId>org</groupId><artifactId>lib</artifactId><version>${lib.version}</version></dependency>
  </dependencies></dependencyManagement>
</project>"#;

    #[tokio::test]
    async fn test_standalone_descriptor_interpolated() {
        let builder = builder(CannedAncestors::new());
        let model = builder.build(&descriptor(STANDALONE_BOM)).await.unwrap();

        assert_eq!(
            format!("{}", model.coordinate()),
            "org.example:standalone-bom:1.0"
        );
        assert_eq!(version_of(&model, "org", "lib"), Some("1.2.3".to_string()));
    }

    #[tokio::test]
    async fn test_child_overrides_parent_entry() {
        let parent = r#"<project>
  <groupId>org.example</groupId>
  <artifactId>parent-bom</artifactId>
  <version>1.0</version>
  <packaging>pom</packaging>
  <dependencyManagement><dependencies>
    <dependency><groupId>org</groupId><artifactId>lib</artifactId><version>1.0</version></dependency>
    <dependency><groupId>org</groupId><artifactId>other</artifactId><version>7.0</version></dependency>
  </dependencies></dependencyManagement>
</project>"#;
        let child = r#"<project>
  <parent>
    <groupId>org.example</groupId>
    <artifactId>parent-bom</artifactId>
    <version>1.0</version>
  </parent>
  <artifactId>child-bom</artifactId>
  <packaging>pom</packaging>
  <dependencyManagement><dependencies>
    <dependency><groupId>org</groupId><artifactId>lib</artifactId><version>1.1</version></dependency>
  </dependencies></dependencyManagement>
</project>"#;

        let ancestors =
            CannedAncestors::new().with_descriptor("org.example:parent-bom:1.0", parent);
        let builder = builder(ancestors);
        let model = builder.build(&descriptor(child)).await.unwrap();

        // Child redefinition wins; untouched parent entries are inherited.
        assert_eq!(version_of(&model, "org", "lib"), Some("1.1".to_string()));
        assert_eq!(version_of(&model, "org", "other"), Some("7.0".to_string()));
        // groupId and version inherit from the parent.
        assert_eq!(
            format!("{}", model.coordinate()),
            "org.example:child-bom:1.0"
        );
    }

    #[tokio::test]
    async fn test_parent_property_visible_unless_child_redefines() {
        let parent = r#"<project>
  <groupId>org.example</groupId><artifactId>parent-bom</artifactId><version>1.0</version>
  <packaging>pom</packaging>
  <properties>
    <from.parent>parent-value</from.parent>
    <shared>parent-value</shared>
  </properties>
</project>"#;
        let child = r#"<project>
  <parent><groupId>org.example</groupId><artifactId>parent-bom</artifactId><version>1.0</version></parent>
  <artifactId>child-bom</artifactId>
  <packaging>pom</packaging>
  <properties><shared>child-value</shared></properties>
  <dependencyManagement><dependencies>
    <dependency><groupId>org</groupId><artifactId>a</artifactId><version>${from.parent}</version></dependency>
    <dependency><groupId>org</groupId><artifactId>b</artifactId><version>${shared}</version></dependency>
  </dependencies></dependencyManagement>
</project>"#;

        let ancestors =
            CannedAncestors::new().with_descriptor("org.example:parent-bom:1.0", parent);
        let builder = builder(ancestors);
        let model = builder.build(&descriptor(child)).await.unwrap();

        assert_eq!(
            version_of(&model, "org", "a"),
            Some("parent-value".to_string())
        );
        assert_eq!(
            version_of(&model, "org", "b"),
            Some("child-value".to_string())
        );
    }

    #[tokio::test]
    async fn test_import_scope_splices_managed_entries() {
        let imported = r#"<project>
  <groupId>org.imported</groupId><artifactId>imported-bom</artifactId><version>3.0</version>
  <packaging>pom</packaging>
  <dependencyManagement><dependencies>
    <dependency><groupId>io</groupId><artifactId>client</artifactId><version>9.9</version></dependency>
  </dependencies></dependencyManagement>
</project>"#;
        let importer = r#"<project>
  <groupId>org.example</groupId><artifactId>importer-bom</artifactId><version>1.0</version>
  <packaging>pom</packaging>
  <dependencyManagement><dependencies>
    <dependency>
      <groupId>org.imported</groupId><artifactId>imported-bom</artifactId><version>3.0</version>
      <type>pom</type><scope>import</scope>
    </dependency>
  </dependencies></dependencyManagement>
</project>"#;

        let ancestors =
            CannedAncestors::new().with_descriptor("org.imported:imported-bom:3.0", imported);
        let builder = builder(ancestors);
        let model = builder.build(&descriptor(importer)).await.unwrap();

        assert_eq!(version_of(&model, "io", "client"), Some("9.9".to_string()));
        // The import pseudo-entry itself does not survive as a managed entry.
        assert_eq!(version_of(&model, "org.imported", "imported-bom"), None);
    }

    #[tokio::test]
    async fn test_own_entry_overrides_import() {
        let imported = r#"<project>
  <groupId>org.imported</groupId><artifactId>imported-bom</artifactId><version>3.0</version>
  <packaging>pom</packaging>
  <dependencyManagement><dependencies>
    <dependency><groupId>io</groupId><artifactId>client</artifactId><version>9.9</version></dependency>
  </dependencies></dependencyManagement>
</project>"#;
        let importer = r#"<project>
  <groupId>org.example</groupId><artifactId>importer-bom</artifactId><version>1.0</version>
  <packaging>pom</packaging>
  <dependencyManagement><dependencies>
    <dependency>
      <groupId>org.imported</groupId><artifactId>imported-bom</artifactId><version>3.0</version>
      <type>pom</type><scope>import</scope>
    </dependency>
    <dependency><groupId>io</groupId><artifactId>client</artifactId><version>8.0</version></dependency>
  </dependencies></dependencyManagement>
</project>"#;

        let ancestors =
            CannedAncestors::new().with_descriptor("org.imported:imported-bom:3.0", imported);
        let builder = builder(ancestors);
        let model = builder.build(&descriptor(importer)).await.unwrap();

        assert_eq!(version_of(&model, "io", "client"), Some("8.0".to_string()));
    }

    #[tokio::test]
    async fn test_unresolvable_parent_fails_chain() {
        let child = r#"<project>
  <parent><groupId>org.example</groupId><artifactId>missing</artifactId><version>1.0</version></parent>
  <artifactId>child-bom</artifactId>
  <packaging>pom</packaging>
</project>"#;

        let builder = builder(CannedAncestors::new());
        let result = builder.build(&descriptor(child)).await;

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Unresolvable ancestor descriptor"));
        assert!(err_string.contains("org.example:missing:1.0"));
    }

    #[tokio::test]
    async fn test_cyclic_ancestor_chain_fails() {
        let looping = r#"<project>
  <parent><groupId>org.example</groupId><artifactId>loop</artifactId><version>1.0</version></parent>
  <groupId>org.example</groupId><artifactId>loop</artifactId><version>1.0</version>
  <packaging>pom</packaging>
</project>"#;

        let ancestors = CannedAncestors::new().with_descriptor("org.example:loop:1.0", looping);
        let builder = builder(ancestors);
        let result = builder.build(&descriptor(looping)).await;

        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("cyclic ancestor chain"));
    }

    #[tokio::test]
    async fn test_ancestor_resolution_memoized() {
        let parent = r#"<project>
  <groupId>org.example</groupId><artifactId>parent-bom</artifactId><version>1.0</version>
  <packaging>pom</packaging>
</project>"#;
        let child = r#"<project>
  <parent><groupId>org.example</groupId><artifactId>parent-bom</artifactId><version>1.0</version></parent>
  <artifactId>child-bom</artifactId>
  <packaging>pom</packaging>
</project>"#;

        let ancestors =
            CannedAncestors::new().with_descriptor("org.example:parent-bom:1.0", parent);
        let builder = builder(ancestors);
        builder.build(&descriptor(child)).await.unwrap();
        builder.build(&descriptor(child)).await.unwrap();

        assert_eq!(builder.ancestors.calls(), 1);
    }

    #[tokio::test]
    async fn test_project_properties_feed_interpolation() {
        let bom = r#"<project>
  <groupId>org.example</groupId><artifactId>bom</artifactId><version>1.0</version>
  <packaging>pom</packaging>
  <dependencyManagement><dependencies>
    <dependency><groupId>org</groupId><artifactId>lib</artifactId><version>${build.lib.version}</version></dependency>
  </dependencies></dependencyManagement>
</project>"#;

        let project_properties =
            HashMap::from([("build.lib.version".to_string(), "5.5".to_string())]);
        let builder = EffectiveModelBuilder::new(CannedAncestors::new(), project_properties);
        let model = builder.build(&descriptor(bom)).await.unwrap();

        assert_eq!(version_of(&model, "org", "lib"), Some("5.5".to_string()));
    }

    #[tokio::test]
    async fn test_unresolved_token_left_verbatim() {
        let bom = r#"<project>
  <groupId>org.example</groupId><artifactId>bom</artifactId><version>1.0</version>
  <packaging>pom</packaging>
  <dependencyManagement><dependencies>
    <dependency><groupId>org</groupId><artifactId>lib</artifactId><version>${undefined.version}</version></dependency>
  </dependencies></dependencyManagement>
</project>"#;

        let builder = builder(CannedAncestors::new());
        let model = builder.build(&descriptor(bom)).await.unwrap();

        assert_eq!(
            version_of(&model, "org", "lib"),
            Some("${undefined.version}".to_string())
        );
    }

    #[tokio::test]
    async fn test_project_version_token_resolves_to_inherited_version() {
        let parent = r#"<project>
  <groupId>org.example</groupId><artifactId>parent-bom</artifactId><version>2.4</version>
  <packaging>pom</packaging>
</project>"#;
        let child = r#"<project>
  <parent><groupId>org.example</groupId><artifactId>parent-bom</artifactId><version>2.4</version></parent>
  <artifactId>child-bom</artifactId>
  <packaging>pom</packaging>
  <dependencyManagement><dependencies>
    <dependency><groupId>org.example</groupId><artifactId>sibling</artifactId><version>${project.version}</version></dependency>
  </dependencies></dependencyManagement>
</project>"#;

        let ancestors =
            CannedAncestors::new().with_descriptor("org.example:parent-bom:2.4", parent);
        let builder = builder(ancestors);
        let model = builder.build(&descriptor(child)).await.unwrap();

        assert_eq!(
            version_of(&model, "org.example", "sibling"),
            Some("2.4".to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_descriptor_fails() {
        let builder = builder(CannedAncestors::new());
        let result = builder
            .build(&descriptor("<project><groupId>org.example</project>"))
            .await;
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Malformed descriptor content"));
    }
}
