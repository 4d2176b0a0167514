//! SDK options descriptor (sdk.opts) types
//!
//! `sdk.opts` carries the compiler/linker configuration for building against
//! the SDK, plus the three marker tokens its own values are written in terms
//! of. Every substitution-relevant field is optional at parse time so that a
//! missing key surfaces as [`OptionsError::MissingSubstKey`], not as a serde
//! failure.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{DescriptorError, OptionsError};

/// Option keys whose string value is split on whitespace before substitution
pub const SPLIT_KEYS: [&str; 4] = ["cc_args", "cpp_args", "linker_args", "linker_libs"];

/// The options descriptor as it sits on disk, markers still in place
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSdkOptions {
    /// Marker token for the application entry point
    pub app_ep_subst: Option<String>,

    /// Marker token for the SDK root directory
    pub sdk_path_subst: Option<String>,

    /// Marker token for the linker map file
    pub map_file_subst: Option<String>,

    /// Numeric-string hardware identifier
    pub hardware: Option<String>,

    /// Path to the SDK symbol definition file, marker-eligible
    #[serde(default)]
    pub sdk_symbols: Option<String>,

    /// Space-delimited C compiler arguments
    #[serde(default)]
    pub cc_args: Option<String>,

    /// Space-delimited C++ compiler arguments
    #[serde(default)]
    pub cpp_args: Option<String>,

    /// Space-delimited linker arguments
    #[serde(default)]
    pub linker_args: Option<String>,

    /// Space-delimited linker library names
    #[serde(default)]
    pub linker_libs: Option<String>,

    /// Remaining keys, passed through unmodified
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawSdkOptions {
    /// Build typed options from a loaded descriptor map.
    pub fn from_map(map: Map<String, Value>, path: &Path) -> Result<Self, DescriptorError> {
        serde_json::from_value(Value::Object(map)).map_err(|e| DescriptorError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Get a required key's value, or the error naming it.
    pub fn require<'a>(
        field: &'a Option<String>,
        key: &str,
    ) -> Result<&'a str, OptionsError> {
        field.as_deref().ok_or_else(|| OptionsError::MissingSubstKey {
            key: key.to_string(),
        })
    }

    /// The hardware id string, required for validation and `TARGET_HW`.
    pub fn hardware(&self) -> Result<&str, OptionsError> {
        Self::require(&self.hardware, "hardware")
    }
}

/// The options descriptor after splitting and marker substitution
#[derive(Debug, Clone, PartialEq)]
pub struct SubstitutedOptions {
    /// Numeric-string hardware identifier, copied through
    pub hardware: String,

    /// Path to the SDK symbol definition file, markers resolved
    pub sdk_symbols: PathBuf,

    /// C compiler argument tokens
    pub cc_args: Vec<String>,

    /// C++ compiler argument tokens
    pub cpp_args: Vec<String>,

    /// Linker argument tokens
    pub linker_args: Vec<String>,

    /// Linker library name tokens
    pub linker_libs: Vec<String>,

    /// Keys outside the fixed substitution set, unmodified
    pub extra: Map<String, Value>,
}

impl SubstitutedOptions {
    /// Parse the hardware id as the integer the build graph expects.
    pub fn hardware_id(&self) -> Result<i64, OptionsError> {
        self.hardware
            .parse()
            .map_err(|e: std::num::ParseIntError| OptionsError::InvalidHardware {
                value: self.hardware.clone(),
                reason: e.to_string(),
            })
    }
}
