/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (dependency resolution, file
/// system, report rendering).
pub mod ancestor_source;
pub mod dependency_resolver;
pub mod report_formatter;

pub use ancestor_source::AncestorSource;
pub use dependency_resolver::DependencyResolver;
pub use report_formatter::ReportFormatter;
