/// Mock implementations for testing
mod mock_ancestor_source;
mod mock_dependency_resolver;

pub use mock_ancestor_source::MockAncestorSource;
pub use mock_dependency_resolver::MockDependencyResolver;
