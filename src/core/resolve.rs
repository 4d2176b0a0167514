//! Top-level resolution entry point
//!
//! Pipeline: load manifest, check components, locate and load `sdk.opts`
//! through the headers component, check hardware compatibility, substitute,
//! assemble. Options are loaded before the hardware check runs, since the
//! check compares manifest and options data. Any failure aborts the whole
//! resolution; no partial environment is ever returned.

use std::path::{Path, PathBuf};

use crate::config::defaults::{SDK_MANIFEST_FILE, SDK_OPTS_FILE};
use crate::core::assemble;
use crate::core::descriptor;
use crate::core::env::ResolvedEnvironment;
use crate::core::manifest::SdkManifest;
use crate::core::options::RawSdkOptions;
use crate::core::subst::{substitute_options, ReplacementTable};
use crate::error::{DescriptorError, SdkEnvError};

/// Resolve the SDK state under `sdk_root` using the default manifest name.
pub fn resolve_default(sdk_root: &Path) -> Result<ResolvedEnvironment, SdkEnvError> {
    resolve(sdk_root, SDK_MANIFEST_FILE)
}

/// Resolve the SDK state under `sdk_root` into a build environment.
///
/// `manifest_file` names the component manifest inside `sdk_root`.
pub fn resolve(sdk_root: &Path, manifest_file: &str) -> Result<ResolvedEnvironment, SdkEnvError> {
    let sdk_root = absolutize(sdk_root)?;
    let manifest_path = sdk_root.join(manifest_file);

    tracing::debug!("Loading SDK manifest from {}", manifest_path.display());
    let manifest = SdkManifest::from_map(descriptor::load(&manifest_path)?, &manifest_path)?;
    manifest.require_components()?;

    let headers_dir = assemble::headers_dir(&sdk_root, &manifest)?;
    let opts_path = headers_dir.join(SDK_OPTS_FILE);

    tracing::debug!("Loading SDK options from {}", opts_path.display());
    let raw = RawSdkOptions::from_map(descriptor::load(&opts_path)?, &opts_path)?;

    manifest.validate_hardware(raw.hardware()?)?;

    let table = ReplacementTable::build(&raw, &headers_dir)?;
    let options = substitute_options(&raw, &table)?;

    tracing::debug!(
        "Assembling environment for hardware target '{}'",
        options.hardware
    );
    assemble::assemble(&sdk_root, &manifest, &options)
}

/// The replacement table needs the SDK directory as an absolute path.
fn absolutize(path: &Path) -> Result<PathBuf, DescriptorError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| DescriptorError::IoError {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    Ok(cwd.join(path))
}
