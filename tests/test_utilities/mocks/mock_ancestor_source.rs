use async_trait::async_trait;
use bom_advisor::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock AncestorSource for testing
pub struct MockAncestorSource {
    descriptors: HashMap<Coordinate, String>,
    resolution_calls: AtomicUsize,
}

impl MockAncestorSource {
    pub fn new() -> Self {
        Self {
            descriptors: HashMap::new(),
            resolution_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_descriptor(mut self, notation: &str, content: &str) -> Self {
        self.descriptors
            .insert(Coordinate::parse(notation).unwrap(), content.to_string());
        self
    }

    pub fn resolution_calls(&self) -> usize {
        self.resolution_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockAncestorSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AncestorSource for MockAncestorSource {
    async fn resolve_ancestor(&self, coordinate: &Coordinate) -> Result<Vec<u8>> {
        self.resolution_calls.fetch_add(1, Ordering::SeqCst);
        match self.descriptors.get(coordinate) {
            Some(content) => Ok(content.clone().into_bytes()),
            None => anyhow::bail!("Mock has no descriptor for {}", coordinate),
        }
    }
}
