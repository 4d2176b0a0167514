//! Default configuration values

/// Default component manifest file name inside the SDK directory
pub const SDK_MANIFEST_FILE: &str = "components.json";

/// SDK options descriptor file name, located under the headers component
pub const SDK_OPTS_FILE: &str = "sdk.opts";

/// Debug symbol description file appended to the debug directory variable
pub const SVD_FILE_NAME: &str = "STM32WB55_CM4.svd";

/// Bootstrap script appended to the script directory variable
pub const BOOTSTRAP_SCRIPT_NAME: &str = "bootstrap.py";

/// Subdirectory of the scripts component that holds the tool's own helpers
pub const SCRIPT_ROOT_SUBDIR: &str = "sdkenv";

/// Build configuration name handed to the build graph
pub const FIRMWARE_BUILD_CFG: &str = "firmware";

/// Placeholder the consumer substitutes with the application entry point
pub const APP_ENTRY_REF: &str = "${APP_ENTRY}";

/// Placeholder the consumer substitutes with the build target
pub const TARGET_REF: &str = "${TARGET}";
