//! Marker token substitution engine
//!
//! SDK options values embed three literal marker tokens that stand for values
//! only known at resolution time (the SDK root) or only known to the build
//! graph (application entry point, target name). The engine replaces every
//! occurrence of every marker across the substitution-eligible fields.
//!
//! Replacement is a single left-to-right scan per string: once a marker
//! matches, its replacement is emitted and scanning continues after the
//! marker in the *input*. Replacement text is never rescanned, so a
//! replacement that happens to contain another marker's text cannot trigger
//! double substitution, and applying the engine twice is a no-op.

use serde_json::Value;

use crate::config::defaults::{APP_ENTRY_REF, TARGET_REF};
use crate::core::options::{RawSdkOptions, SubstitutedOptions};
use crate::error::OptionsError;
use std::path::{Path, PathBuf};

/// Marker token to replacement text, built once per resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ReplacementTable {
    pairs: Vec<(String, String)>,
}

impl ReplacementTable {
    /// Build the table from the options descriptor's own marker declarations.
    ///
    /// - `app_ep_subst` maps to the `${APP_ENTRY}` placeholder the consumer
    ///   substitutes itself.
    /// - `sdk_path_subst` maps to the SDK root, forward slashes regardless of
    ///   host path style.
    /// - `map_file_subst` maps to the `${TARGET}` placeholder.
    ///
    /// Markers must be distinct, non-empty literals that are not substrings
    /// of one another; the descriptor is trusted on this (precondition, not
    /// validated).
    pub fn build(raw: &RawSdkOptions, sdk_root: &Path) -> Result<Self, OptionsError> {
        let app_ep = RawSdkOptions::require(&raw.app_ep_subst, "app_ep_subst")?;
        let sdk_path = RawSdkOptions::require(&raw.sdk_path_subst, "sdk_path_subst")?;
        let map_file = RawSdkOptions::require(&raw.map_file_subst, "map_file_subst")?;
        // Presence check only; the value is consumed during assembly.
        raw.hardware()?;

        Ok(Self {
            pairs: vec![
                (app_ep.to_string(), APP_ENTRY_REF.to_string()),
                (sdk_path.to_string(), to_posix(sdk_root)),
                (map_file.to_string(), TARGET_REF.to_string()),
            ],
        })
    }

    #[cfg(test)]
    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            pairs: pairs
                .iter()
                .map(|(m, r)| ((*m).to_string(), (*r).to_string()))
                .collect(),
        }
    }

    /// Replace every marker occurrence in a single left-to-right pass.
    pub fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        'scan: while !rest.is_empty() {
            for (marker, replacement) in &self.pairs {
                if !marker.is_empty() && rest.starts_with(marker.as_str()) {
                    out.push_str(replacement);
                    rest = &rest[marker.len()..];
                    continue 'scan;
                }
            }
            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                out.push(ch);
            }
            rest = chars.as_str();
        }
        out
    }

    /// Rewrite every string leaf of a JSON value, recursing through lists.
    ///
    /// Non-string, non-list values pass through unchanged.
    pub fn apply_value(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => Value::String(self.apply(s)),
            Value::Array(items) => {
                Value::Array(items.iter().map(|v| self.apply_value(v)).collect())
            }
            other => other.clone(),
        }
    }

    fn apply_tokens(&self, value: &str) -> Vec<String> {
        value
            .split_whitespace()
            .map(|token| self.apply(token))
            .collect()
    }
}

/// Split the space-delimited fields and substitute markers across the
/// substitution-eligible set.
///
/// Splitting happens before substitution so a replacement containing spaces
/// stays a single token. Empty tokens are dropped by the whitespace split.
pub fn substitute_options(
    raw: &RawSdkOptions,
    table: &ReplacementTable,
) -> Result<SubstitutedOptions, OptionsError> {
    let hardware = raw.hardware()?.to_string();
    let sdk_symbols = RawSdkOptions::require(&raw.sdk_symbols, "sdk_symbols")?;
    let cc_args = RawSdkOptions::require(&raw.cc_args, "cc_args")?;
    let cpp_args = RawSdkOptions::require(&raw.cpp_args, "cpp_args")?;
    let linker_args = RawSdkOptions::require(&raw.linker_args, "linker_args")?;
    let linker_libs = RawSdkOptions::require(&raw.linker_libs, "linker_libs")?;

    Ok(SubstitutedOptions {
        hardware,
        sdk_symbols: PathBuf::from(table.apply(sdk_symbols)),
        cc_args: table.apply_tokens(cc_args),
        cpp_args: table.apply_tokens(cpp_args),
        linker_args: table.apply_tokens(linker_args),
        linker_libs: table.apply_tokens(linker_libs),
        extra: raw.extra.clone(),
    })
}

/// Render a path with forward slashes regardless of host separator.
pub fn to_posix(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}
