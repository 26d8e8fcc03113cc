use super::coordinate::{Coordinate, ModuleId};
use std::collections::HashMap;

/// A `(group, artifact) -> version` pairing that exists to recommend a
/// version, not to declare an actual dependency edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedDependency {
    module: ModuleId,
    version: String,
}

impl ManagedDependency {
    pub fn new(module: ModuleId, version: String) -> Self {
        Self { module, version }
    }

    pub fn module(&self) -> &ModuleId {
        &self.module
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// A descriptor after resolving its full ancestor chain (parent inheritance
/// and imported management sections) and interpolating variables.
///
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct EffectiveModel {
    coordinate: Coordinate,
    managed_dependencies: Vec<ManagedDependency>,
    properties: HashMap<String, String>,
}

impl EffectiveModel {
    pub fn new(
        coordinate: Coordinate,
        managed_dependencies: Vec<ManagedDependency>,
        properties: HashMap<String, String>,
    ) -> Self {
        Self {
            coordinate,
            managed_dependencies,
            properties,
        }
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// Managed entries in declaration order: ancestors first, then imports,
    /// then the descriptor's own entries (which override on the same module).
    pub fn managed_dependencies(&self) -> &[ManagedDependency] {
        &self.managed_dependencies
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_model_accessors() {
        let model = EffectiveModel::new(
            Coordinate::new("org.example", "bom", "1.0"),
            vec![ManagedDependency::new(
                ModuleId::new("org.example", "lib"),
                "2.0".to_string(),
            )],
            HashMap::from([("lib.version".to_string(), "2.0".to_string())]),
        );

        assert_eq!(format!("{}", model.coordinate()), "org.example:bom:1.0");
        assert_eq!(model.managed_dependencies().len(), 1);
        assert_eq!(model.managed_dependencies()[0].version(), "2.0");
        assert_eq!(
            model.properties().get("lib.version"),
            Some(&"2.0".to_string())
        );
    }
}
