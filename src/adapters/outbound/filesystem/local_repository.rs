use crate::ports::outbound::DependencyResolver;
use crate::shared::error::AdvisorError;
use crate::shared::Result;
use crate::version_recommendation::domain::Coordinate;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// LocalRepository adapter - a [`DependencyResolver`] over a Maven-layout
/// repository directory.
///
/// Coordinates materialize to
/// `<root>/<group as dirs>/<artifact>/<version>/<artifact>-<version>.<classifier>`.
/// Materialization is lenient by contract: a coordinate with no matching file
/// yields an empty set.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    root: PathBuf,
    declared: Vec<Coordinate>,
}

impl LocalRepository {
    pub fn new(root: PathBuf, declared: Vec<Coordinate>) -> Self {
        Self { root, declared }
    }

    /// Validates that the repository root exists and is a directory.
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(AdvisorError::InvalidRepository {
                path: self.root.clone(),
                reason: "Directory does not exist".to_string(),
            }
            .into());
        }
        if !self.root.is_dir() {
            return Err(AdvisorError::InvalidRepository {
                path: self.root.clone(),
                reason: "Not a directory".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn artifact_path(&self, coordinate: &Coordinate, classifier: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in coordinate.group().split('.') {
            path.push(segment);
        }
        path.push(coordinate.artifact());
        path.push(coordinate.version());
        path.push(format!(
            "{artifact}-{version}.{classifier}",
            artifact = coordinate.artifact(),
            version = coordinate.version(),
        ));
        path
    }
}

#[async_trait]
impl DependencyResolver for LocalRepository {
    async fn declared_dependencies(&self) -> Result<Vec<Coordinate>> {
        Ok(self.declared.clone())
    }

    async fn materialize(&self, coordinate: &Coordinate, classifier: &str) -> Vec<PathBuf> {
        let path = self.artifact_path(coordinate, classifier);
        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => vec![path],
            _ => {
                debug!(
                    coordinate = %coordinate,
                    path = %path.display(),
                    "coordinate did not materialize"
                );
                Vec::new()
            }
        }
    }
}

/// Validates a repository root path without constructing the adapter.
pub fn validate_repository_root(path: &Path) -> Result<()> {
    LocalRepository::new(path.to_path_buf(), Vec::new()).validate()
}
