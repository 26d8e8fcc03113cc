pub mod local_repository;
pub mod resolver_ancestor_source;

pub use local_repository::LocalRepository;
pub use resolver_ancestor_source::ResolverAncestorSource;
