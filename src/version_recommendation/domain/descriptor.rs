use std::path::{Path, PathBuf};

/// File extension carried by BOM descriptor files.
pub const DESCRIPTOR_EXTENSION: &str = "pom";

/// Classifier passed to the dependency resolver when materializing a
/// coordinate as a descriptor (the `group:artifact:version@pom` notation).
pub const DESCRIPTOR_CLASSIFIER: &str = "pom";

/// Marker substring identifying a descriptor whose packaging type is `pom`.
/// Matched against lowercased raw content as a cheap pre-filter before the
/// expensive structured parse.
pub const PACKAGING_MARKER: &str = "<packaging>pom</packaging>";

/// A resolved descriptor file: its filesystem path plus raw content.
///
/// Ephemeral, produced by dependency resolution and consumed once per build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorFile {
    path: PathBuf,
    content: String,
}

impl DescriptorFile {
    pub fn new(path: PathBuf, content: String) -> Self {
        Self { path, content }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the file name carries the descriptor extension (`.pom`).
    pub fn has_descriptor_extension(&self) -> bool {
        has_descriptor_extension(&self.path)
    }

    /// Whether the raw content declares `pom` packaging. Case-insensitive
    /// substring scan, not a structured parse.
    pub fn has_packaging_marker(&self) -> bool {
        self.content.to_lowercase().contains(PACKAGING_MARKER)
    }
}

/// Whether a path's file name ends with the descriptor extension.
pub fn has_descriptor_extension(path: &Path) -> bool {
    path.extension()
        .map(|extension| extension.eq_ignore_ascii_case(DESCRIPTOR_EXTENSION))
        .unwrap_or(false)
}
