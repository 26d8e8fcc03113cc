use crate::shared::error::AdvisorError;
use crate::shared::Result;
use std::fmt;
use std::path::MAIN_SEPARATOR;

/// Maximum length for a single coordinate segment (security limit)
const MAX_SEGMENT_LENGTH: usize = 255;

/// Identity key for a managed module: the `group:artifact` pair without a
/// version. Recommendation lookups are keyed by this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId {
    group: String,
    artifact: String,
}

impl ModuleId {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
        }
    }

    /// Parses `group:artifact` notation, validating both segments.
    pub fn parse(notation: &str) -> Result<Self> {
        let segments: Vec<&str> = notation.split(':').collect();
        if segments.len() != 2 {
            return Err(AdvisorError::InvalidCoordinate {
                notation: notation.to_string(),
                reason: "expected two ':'-separated segments (group:artifact)".to_string(),
            }
            .into());
        }
        validate_segment(notation, segments[0], "group")?;
        validate_segment(notation, segments[1], "artifact")?;
        Ok(Self::new(segments[0], segments[1]))
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}

/// The `(group, artifact, version)` triple identifying a resolvable artifact.
///
/// Immutable identity key, used both as a dependency reference and as a
/// descriptor-resolution request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    group: String,
    artifact: String,
    version: String,
}

impl Coordinate {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// Parses `group:artifact:version` notation, validating every segment.
    pub fn parse(notation: &str) -> Result<Self> {
        let segments: Vec<&str> = notation.split(':').collect();
        if segments.len() != 3 {
            return Err(AdvisorError::InvalidCoordinate {
                notation: notation.to_string(),
                reason: "expected three ':'-separated segments (group:artifact:version)"
                    .to_string(),
            }
            .into());
        }
        validate_segment(notation, segments[0], "group")?;
        validate_segment(notation, segments[1], "artifact")?;
        validate_segment(notation, segments[2], "version")?;
        Ok(Self::new(segments[0], segments[1], segments[2]))
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn module_id(&self) -> ModuleId {
        ModuleId::new(self.group.clone(), self.artifact.clone())
    }

    /// Renders this coordinate as the `group/artifact/version` path fragment
    /// used by the locator's dedup heuristic. A descriptor file whose path
    /// contains this fragment is assumed to belong to this coordinate. This is
    /// a deliberate substring heuristic, not a structural compare: two
    /// different artifacts sharing a coincidental path substring is a known
    /// false-positive risk.
    pub fn as_path_fragment(&self) -> String {
        format!(
            "{group}{sep}{artifact}{sep}{version}",
            group = self.group,
            artifact = self.artifact,
            version = self.version,
            sep = MAIN_SEPARATOR,
        )
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

fn validate_segment(notation: &str, segment: &str, name: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(AdvisorError::InvalidCoordinate {
            notation: notation.to_string(),
            reason: format!("{} segment is empty", name),
        }
        .into());
    }
    if segment.len() > MAX_SEGMENT_LENGTH {
        return Err(AdvisorError::InvalidCoordinate {
            notation: notation.to_string(),
            reason: format!(
                "{} segment is too long ({} bytes). Maximum allowed: {} bytes",
                name,
                segment.len(),
                MAX_SEGMENT_LENGTH
            ),
        }
        .into());
    }
    Ok(())
}
