//! bom-advisor - dependency version recommendations from BOM descriptors
//!
//! This library resolves recommended dependency versions from Maven "bill of
//! materials" descriptors, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`version_recommendation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bom_advisor::prelude::*;
//! use std::collections::HashMap;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let repository = LocalRepository::new(
//!     PathBuf::from("/var/repo"),
//!     vec![Coordinate::parse("org.example:platform-bom:1.0.0")?],
//! );
//! let ancestor_source = ResolverAncestorSource::new(repository.clone());
//!
//! // Create use case
//! let use_case = RecommendVersionsUseCase::new(repository, ancestor_source, HashMap::new());
//!
//! // Look up a recommendation
//! if let Some(version) = use_case.recommended_version("commons-logging", "commons-logging").await? {
//!     println!("{}", version);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod version_recommendation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{LocalRepository, ResolverAncestorSource};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{RecommendationReport, RecommendationRequest, ReportEntry};
    pub use crate::application::use_cases::RecommendVersionsUseCase;
    pub use crate::ports::outbound::{AncestorSource, DependencyResolver, ReportFormatter};
    pub use crate::shared::error::{AdvisorError, ExitCode};
    pub use crate::shared::Result;
    pub use crate::version_recommendation::domain::{
        Coordinate, DescriptorFile, EffectiveModel, ManagedDependency, ModuleId,
        RecommendationMap, DESCRIPTOR_CLASSIFIER, DESCRIPTOR_EXTENSION, PACKAGING_MARKER,
    };
    pub use crate::version_recommendation::services::{
        DescriptorLocator, EffectiveModelBuilder, RecommendationMapBuilder,
    };
}
