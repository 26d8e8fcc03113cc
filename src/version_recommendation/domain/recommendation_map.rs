use super::coordinate::ModuleId;
use std::collections::HashMap;

/// Flat mapping from `group:artifact` to a recommended version.
///
/// Built by iterating descriptor files in locator-discovery order and
/// inserting entries as they come: later descriptors win on conflict
/// (last-write-wins, not first-match).
#[derive(Debug, Clone, Default)]
pub struct RecommendationMap {
    entries: HashMap<ModuleId, String>,
}

impl RecommendationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a recommendation, overwriting any prior value for the module.
    pub fn insert(&mut self, module: ModuleId, version: String) {
        self.entries.insert(module, version);
    }

    pub fn get(&self, module: &ModuleId) -> Option<&str> {
        self.entries.get(module).map(String::as_str)
    }

    /// Lookup by raw group/artifact strings.
    pub fn version_for(&self, group: &str, artifact: &str) -> Option<&str> {
        self.get(&ModuleId::new(group, artifact))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ModuleId, &str)> {
        self.entries
            .iter()
            .map(|(module, version)| (module, version.as_str()))
    }

    /// Entries sorted by module id, for deterministic report output.
    pub fn sorted_entries(&self) -> Vec<(&ModuleId, &str)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(left, _), (right, _)| left.cmp(right));
        entries
    }
}
