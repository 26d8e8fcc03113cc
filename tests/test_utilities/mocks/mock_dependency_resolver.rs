use async_trait::async_trait;
use bom_advisor::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock DependencyResolver for testing
pub struct MockDependencyResolver {
    declared: Vec<Coordinate>,
    files: HashMap<Coordinate, Vec<PathBuf>>,
    resolution_calls: AtomicUsize,
    should_fail: bool,
}

impl MockDependencyResolver {
    pub fn new() -> Self {
        Self {
            declared: Vec::new(),
            files: HashMap::new(),
            resolution_calls: AtomicUsize::new(0),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn with_declared(mut self, notation: &str) -> Self {
        self.declared.push(Coordinate::parse(notation).unwrap());
        self
    }

    pub fn with_files(mut self, notation: &str, files: Vec<PathBuf>) -> Self {
        self.files
            .insert(Coordinate::parse(notation).unwrap(), files);
        self
    }

    pub fn resolution_calls(&self) -> usize {
        self.resolution_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockDependencyResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DependencyResolver for MockDependencyResolver {
    async fn declared_dependencies(&self) -> Result<Vec<Coordinate>> {
        if self.should_fail {
            anyhow::bail!("Mock dependency resolution failure");
        }
        Ok(self.declared.clone())
    }

    async fn materialize(&self, coordinate: &Coordinate, _classifier: &str) -> Vec<PathBuf> {
        self.resolution_calls.fetch_add(1, Ordering::SeqCst);
        self.files.get(coordinate).cloned().unwrap_or_default()
    }
}
