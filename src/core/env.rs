//! Resolved environment value types
//!
//! The output of a resolution is a closed, insertion-ordered set of named
//! build variables. Values that the build graph must expand itself are
//! carried as a tagged [`DeferredRef`] variant instead of template strings,
//! so the consumer's expansion pass works on types, not string matching.

use std::fmt;
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::core::manifest::ManifestMeta;

/// A reference the downstream build graph resolves later.
///
/// Renders as `${var}tail`, e.g. `${SDK_DEBUG_DIR}/STM32WB55_CM4.svd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredRef {
    /// Name of the variable the reference points at
    pub var: String,
    /// Literal text appended after the expanded variable
    pub tail: String,
}

impl DeferredRef {
    /// Reference another variable with a literal suffix.
    pub fn new(var: &str, tail: &str) -> Self {
        Self {
            var: var.to_string(),
            tail: tail.to_string(),
        }
    }

    /// Render in the `${NAME}` syntax the consumer's expansion pass expects.
    pub fn render(&self) -> String {
        format!("${{{}}}{}", self.var, self.tail)
    }
}

impl fmt::Display for DeferredRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// A single resolved build variable value
#[derive(Debug, Clone, PartialEq)]
pub enum EnvValue {
    /// Filesystem path derived from the SDK root
    Path(PathBuf),
    /// Plain string value
    Str(String),
    /// Integer value
    Int(i64),
    /// Ordered argument token list
    Tokens(Vec<String>),
    /// Reference for the consumer to expand
    Deferred(DeferredRef),
}

impl EnvValue {
    /// JSON projection for machine-readable output.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Path(p) => Value::String(p.display().to_string()),
            Self::Str(s) => Value::String(s.clone()),
            Self::Int(i) => Value::from(*i),
            Self::Tokens(tokens) => {
                Value::Array(tokens.iter().cloned().map(Value::String).collect())
            }
            Self::Deferred(r) => Value::String(r.render()),
        }
    }
}

impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(p) => write!(f, "{}", p.display()),
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Tokens(tokens) => write!(f, "{}", tokens.join(" ")),
            Self::Deferred(r) => write!(f, "{r}"),
        }
    }
}

/// The final named-variable output of a resolution.
///
/// Constructed once, never mutated after assembly, handed to the build graph
/// by reference. Iteration follows insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEnvironment {
    vars: Vec<(String, EnvValue)>,

    /// Directory the caller should prepend to its helper-script search path.
    ///
    /// The reference workflow mutated a process-global search path here;
    /// exposing the path instead leaves ordering and dedup to the caller.
    pub script_search_path: PathBuf,

    /// SDK build metadata, passed through for the consumer
    pub meta: ManifestMeta,
}

impl ResolvedEnvironment {
    pub(crate) fn new(script_search_path: PathBuf, meta: ManifestMeta) -> Self {
        Self {
            vars: Vec::new(),
            script_search_path,
            meta,
        }
    }

    pub(crate) fn insert(&mut self, name: &str, value: EnvValue) {
        self.vars.push((name.to_string(), value));
    }

    /// Look up a variable by name.
    pub fn get(&self, name: &str) -> Option<&EnvValue> {
        self.vars
            .iter()
            .find(|(var, _)| var == name)
            .map(|(_, value)| value)
    }

    /// Iterate variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnvValue)> {
        self.vars.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the environment is empty. A successful resolution never is.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// JSON projection of the whole variable set, insertion order preserved.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in &self.vars {
            map.insert(name.clone(), value.to_json());
        }
        Value::Object(map)
    }
}

/// Variable names exposed to the build graph
pub mod vars {
    /// SDK symbol definition file path
    pub const SDK_DEFINITION: &str = "SDK_DEFINITION";
    /// Debugging support directory, posix-style string
    pub const SDK_DEBUG_DIR: &str = "SDK_DEBUG_DIR";
    /// Helper script directory
    pub const SDK_SCRIPT_DIR: &str = "SDK_SCRIPT_DIR";
    /// Precompiled library directory
    pub const LIB_DIR: &str = "LIB_DIR";
    /// Reference firmware ELF
    pub const FW_ELF: &str = "FW_ELF";
    /// Reference firmware binary
    pub const FW_BIN: &str = "FW_BIN";
    /// Update bundle directory
    pub const UPDATE_BUNDLE_DIR: &str = "UPDATE_BUNDLE_DIR";
    /// Debug symbol description file, deferred on the debug directory
    pub const SVD_FILE: &str = "SVD_FILE";
    /// Build configuration name
    pub const FIRMWARE_BUILD_CFG: &str = "FIRMWARE_BUILD_CFG";
    /// Numeric hardware target id
    pub const TARGET_HW: &str = "TARGET_HW";
    /// C compiler flags for application builds
    pub const CFLAGS_APP: &str = "CFLAGS_APP";
    /// C++ compiler flags for application builds
    pub const CXXFLAGS_APP: &str = "CXXFLAGS_APP";
    /// Linker flags for application builds
    pub const LINKFLAGS_APP: &str = "LINKFLAGS_APP";
    /// Linker libraries
    pub const LIBS: &str = "LIBS";
    /// Hardware target string from the manifest metadata
    pub const HW_TARGET: &str = "HW_TARGET";
    /// Bootstrap script, deferred on the script directory
    pub const BOOTSTRAP_SCRIPT: &str = "BOOTSTRAP_SCRIPT";
    /// Root of the tool's own helper scripts
    pub const SCRIPT_ROOT: &str = "SCRIPT_ROOT";
}
