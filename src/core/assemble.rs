//! Environment assembly
//!
//! Combines the validated manifest and the substituted options into the
//! final [`ResolvedEnvironment`]. Path variables are joined from the SDK
//! root and component relative paths; compiler and linker token lists are
//! copied through; values only the build graph can finish resolving are
//! emitted as deferred references.

use std::path::Path;

use crate::config::defaults::{
    BOOTSTRAP_SCRIPT_NAME, FIRMWARE_BUILD_CFG, SCRIPT_ROOT_SUBDIR, SVD_FILE_NAME,
};
use crate::core::env::{vars, DeferredRef, EnvValue, ResolvedEnvironment};
use crate::core::manifest::SdkManifest;
use crate::core::options::SubstitutedOptions;
use crate::core::subst::to_posix;
use crate::error::{ManifestError, SdkEnvError};

/// Component keys the assembler derives path variables from
const COMPONENT_SDK_HEADERS: &str = "sdk_headers.dir";
const COMPONENT_SCRIPTS: &str = "scripts.dir";
const COMPONENT_DEBUG: &str = "debug.dir";
const COMPONENT_LIB: &str = "lib.dir";
const COMPONENT_FW_ELF: &str = "firmware.elf";
const COMPONENT_FW_BIN: &str = "full.bin";
const COMPONENT_UPDATE: &str = "update.dir";

/// Assemble the resolved environment from validated, substituted inputs.
///
/// Fails with [`ManifestError::MissingComponent`] if any referenced
/// component is absent from the manifest.
pub fn assemble(
    sdk_root: &Path,
    manifest: &SdkManifest,
    options: &SubstitutedOptions,
) -> Result<ResolvedEnvironment, SdkEnvError> {
    let hw_target = manifest
        .meta
        .hw_target
        .as_deref()
        .ok_or_else(|| ManifestError::MissingKey {
            key: "meta.hw_target".to_string(),
        })?;

    let script_dir = sdk_root.join(manifest.component(COMPONENT_SCRIPTS)?);
    let debug_dir = sdk_root.join(manifest.component(COMPONENT_DEBUG)?);
    let lib_dir = sdk_root.join(manifest.component(COMPONENT_LIB)?);
    let fw_elf = sdk_root.join(manifest.component(COMPONENT_FW_ELF)?);
    let fw_bin = sdk_root.join(manifest.component(COMPONENT_FW_BIN)?);
    let update_dir = sdk_root.join(manifest.component(COMPONENT_UPDATE)?);
    let script_root = script_dir.join(SCRIPT_ROOT_SUBDIR);

    let target_hw = options.hardware_id()?;

    let mut env = ResolvedEnvironment::new(script_dir.clone(), manifest.meta.clone());

    // Paths
    env.insert(
        vars::SDK_DEFINITION,
        EnvValue::Path(options.sdk_symbols.clone()),
    );
    env.insert(vars::SDK_DEBUG_DIR, EnvValue::Str(to_posix(&debug_dir)));
    env.insert(vars::SDK_SCRIPT_DIR, EnvValue::Path(script_dir));
    env.insert(vars::LIB_DIR, EnvValue::Path(lib_dir));
    env.insert(vars::FW_ELF, EnvValue::Path(fw_elf));
    env.insert(vars::FW_BIN, EnvValue::Path(fw_bin));
    env.insert(vars::UPDATE_BUNDLE_DIR, EnvValue::Path(update_dir));
    env.insert(
        vars::SVD_FILE,
        EnvValue::Deferred(DeferredRef::new(
            vars::SDK_DEBUG_DIR,
            &format!("/{SVD_FILE_NAME}"),
        )),
    );

    // Build variables
    env.insert(
        vars::FIRMWARE_BUILD_CFG,
        EnvValue::Str(FIRMWARE_BUILD_CFG.to_string()),
    );
    env.insert(vars::TARGET_HW, EnvValue::Int(target_hw));
    env.insert(vars::CFLAGS_APP, EnvValue::Tokens(options.cc_args.clone()));
    env.insert(
        vars::CXXFLAGS_APP,
        EnvValue::Tokens(options.cpp_args.clone()),
    );
    env.insert(
        vars::LINKFLAGS_APP,
        EnvValue::Tokens(options.linker_args.clone()),
    );
    env.insert(vars::LIBS, EnvValue::Tokens(options.linker_libs.clone()));

    // SDK state
    env.insert(vars::HW_TARGET, EnvValue::Str(hw_target.to_string()));
    env.insert(
        vars::BOOTSTRAP_SCRIPT,
        EnvValue::Deferred(DeferredRef::new(
            vars::SDK_SCRIPT_DIR,
            &format!("/{BOOTSTRAP_SCRIPT_NAME}"),
        )),
    );
    env.insert(vars::SCRIPT_ROOT, EnvValue::Path(script_root));

    Ok(env)
}

/// The headers component locates the options descriptor; resolution needs it
/// before assembly proper.
pub fn headers_dir(sdk_root: &Path, manifest: &SdkManifest) -> Result<std::path::PathBuf, ManifestError> {
    Ok(sdk_root.join(manifest.component(COMPONENT_SDK_HEADERS)?))
}
