//! Error types for sdkenv
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Descriptor loading errors
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// Descriptor file does not exist
    #[error("Descriptor not found: {path}")]
    NotFound { path: PathBuf },

    /// Descriptor content is malformed or not a JSON object
    #[error("Failed to parse descriptor '{path}': {reason}")]
    Parse { path: PathBuf, reason: String },

    /// IO error while reading the descriptor
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Component manifest errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest has no components mapping, or it is empty
    #[error("SDK manifest '{path}' doesn't contain components data")]
    MissingComponents { path: PathBuf },

    /// A required manifest field is absent
    #[error("SDK manifest is missing required field '{key}'")]
    MissingKey { key: String },

    /// The manifest hardware target does not match the SDK options hardware id
    #[error(
        "SDK manifest doesn't match hardware target: '{hw_target}' does not end with '{hardware}'"
    )]
    HardwareMismatch { hw_target: String, hardware: String },

    /// A component referenced during assembly is absent from the manifest
    #[error("SDK manifest components are missing '{key}'")]
    MissingComponent { key: String },
}

/// SDK options descriptor errors
#[derive(Error, Debug)]
pub enum OptionsError {
    /// A substitution-required key is absent from the options descriptor
    #[error("SDK options are missing required key '{key}'")]
    MissingSubstKey { key: String },

    /// The hardware id is not a decimal integer
    #[error("SDK options hardware id '{value}' is not numeric: {reason}")]
    InvalidHardware { value: String, reason: String },
}

/// Top-level sdkenv error type
#[derive(Error, Debug)]
pub enum SdkEnvError {
    /// Descriptor error
    #[error("Descriptor error: {0}")]
    Descriptor(#[from] DescriptorError),

    /// Manifest error
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Options error
    #[error("Options error: {0}")]
    Options(#[from] OptionsError),
}
