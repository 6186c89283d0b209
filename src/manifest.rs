//! package.json loading and typed deserialization
//!
//! Handles:
//! - dependencies
//! - devDependencies
//!
//! Version values are kept as raw JSON: only the package names matter
//! for the update, and non-string values (workspace protocols etc.)
//! must not fail the parse.

use crate::error::ManifestError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Typed view of the fields of package.json this tool reads.
///
/// Key order of the dependency objects is preserved as written in the
/// file (`serde_json` with `preserve_order`), so filtered package lists
/// come out in declaration order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageJson {
    /// Regular dependencies
    #[serde(default)]
    pub dependencies: Map<String, Value>,

    /// Development dependencies
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: Map<String, Value>,
}

impl PackageJson {
    /// Parse package.json content
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))
    }

    /// Load and parse package.json from the given path
    pub async fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ManifestError::not_found(path),
                _ => ManifestError::read_error(path, e),
            })?;

        Self::parse(&content, path)
    }
}
