use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every queried coordinate had a recommended version
    Success = 0,
    /// At least one queried coordinate had no recommendation
    NoRecommendation = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (descriptor resolution error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NoRecommendation => write!(f, "No Recommendation (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for BOM recommendation resolution.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("Failed to read descriptor file: {path}\nDetails: {details}")]
    DescriptorRead { path: PathBuf, details: String },

    #[error("Malformed descriptor content: {path}\nDetails: {details}")]
    MalformedDescriptor { path: PathBuf, details: String },

    #[error("Unresolvable ancestor descriptor: {coordinate}\nDetails: {details}")]
    UnresolvableAncestor { coordinate: String, details: String },

    #[error("Invalid coordinate notation: \"{notation}\"\nReason: {reason}\n\n💡 Hint: Coordinates use the form group:artifact:version, e.g. org.springframework:spring-core:5.3.0")]
    InvalidCoordinate { notation: String, reason: String },

    #[error("Invalid repository path: {path}\nReason: {reason}\n\n💡 Hint: Point --repo at the root of a Maven-layout repository directory")]
    InvalidRepository { path: PathBuf, reason: String },

    #[error("Failed to load configuration: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the configuration file is valid TOML")]
    InvalidConfig { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
