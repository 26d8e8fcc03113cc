//! Configuration file support for bom-advisor.
//!
//! Provides TOML-based configuration through `bom-advisor.toml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::Result;

const CONFIG_FILENAME: &str = "bom-advisor.toml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Maven-layout repository root to resolve descriptors from.
    pub repository: Option<PathBuf>,
    /// Declared dependencies in `group:artifact:version` notation.
    pub dependencies: Option<Vec<String>>,
    /// Coordinates to look up in `group:artifact` notation.
    pub queries: Option<Vec<String>>,
    /// Build-level properties offered to descriptor interpolation.
    #[serde(default)]
    pub properties: HashMap<String, String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = toml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid TOML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref dependencies) = config.dependencies {
        for (i, notation) in dependencies.iter().enumerate() {
            if notation.trim().is_empty() {
                bail!(
                    "Invalid config: dependencies[{}] must not be empty.\n\n\
                     💡 Hint: Each dependency must use 'group:artifact:version' notation (e.g., \"org.springframework:spring-core:4.3.2.RELEASE\").",
                    i
                );
            }
        }
    }
    if let Some(ref queries) = config.queries {
        for (i, notation) in queries.iter().enumerate() {
            if notation.trim().is_empty() {
                bail!(
                    "Invalid config: queries[{}] must not be empty.\n\n\
                     💡 Hint: Each query must use 'group:artifact' notation (e.g., \"commons-logging:commons-logging\").",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
