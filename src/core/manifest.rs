//! Component manifest (components.json) parsing and validation
//!
//! The manifest maps dotted component names (`"lib.dir"`, `"firmware.elf"`)
//! to paths relative to the SDK directory, plus a `meta` block describing the
//! SDK build the components came from.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DescriptorError, ManifestError};

/// The SDK component manifest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SdkManifest {
    /// SDK build metadata
    #[serde(default)]
    pub meta: ManifestMeta,

    /// Component logical name to relative path. Keys are dotted names,
    /// values are paths relative to the SDK directory; no nesting.
    #[serde(default)]
    pub components: BTreeMap<String, String>,

    /// Path the manifest was loaded from, kept for error context
    #[serde(skip)]
    pub path: PathBuf,
}

/// SDK build metadata block
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ManifestMeta {
    /// Hardware target identifier, e.g. "f7". Must end with the numeric
    /// hardware id declared by the SDK options descriptor.
    #[serde(default)]
    pub hw_target: Option<String>,

    /// Remaining metadata, passed through to the consumer untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SdkManifest {
    /// Build a typed manifest from a loaded descriptor map.
    ///
    /// A value with the wrong shape (e.g. a non-string component path) is a
    /// parse failure, same as malformed JSON.
    pub fn from_map(map: Map<String, Value>, path: &Path) -> Result<Self, DescriptorError> {
        let mut manifest: Self = serde_json::from_value(Value::Object(map)).map_err(|e| {
            DescriptorError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;
        manifest.path = path.to_path_buf();
        Ok(manifest)
    }

    /// Check that the manifest carries a non-empty components mapping.
    ///
    /// Must pass before any further resolution step runs.
    pub fn require_components(&self) -> Result<(), ManifestError> {
        if self.components.is_empty() {
            return Err(ManifestError::MissingComponents {
                path: self.path.clone(),
            });
        }
        Ok(())
    }

    /// Check that `meta.hw_target` ends with the options' hardware id.
    ///
    /// This is a purely referential suffix match, not a semantic
    /// compatibility check.
    pub fn validate_hardware(&self, hardware: &str) -> Result<(), ManifestError> {
        let hw_target = self
            .meta
            .hw_target
            .as_deref()
            .ok_or_else(|| ManifestError::MissingKey {
                key: "meta.hw_target".to_string(),
            })?;

        if !hw_target.ends_with(hardware) {
            return Err(ManifestError::HardwareMismatch {
                hw_target: hw_target.to_string(),
                hardware: hardware.to_string(),
            });
        }
        Ok(())
    }

    /// Look up a component's relative path by its dotted name.
    pub fn component(&self, key: &str) -> Result<&str, ManifestError> {
        self.components
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ManifestError::MissingComponent {
                key: key.to_string(),
            })
    }
}
