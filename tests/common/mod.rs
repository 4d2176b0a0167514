//! Common test utilities and helpers
//!
//! Builds on-disk SDK state fixtures in a temporary directory: a component
//! manifest at the root and an options descriptor under the headers
//! component.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Marker tokens used by the fixture options descriptor
#[allow(dead_code)]
pub const APP_EP_MARKER: &str = "@LOADER_APP_EP@";
#[allow(dead_code)]
pub const SDK_PATH_MARKER: &str = "@LOADER_SDK_PATH@";
#[allow(dead_code)]
pub const MAP_FILE_MARKER: &str = "@LOADER_MAP_FILE@";

/// SDK state fixture in a temporary directory
pub struct TestSdk {
    /// Temporary directory holding the SDK state
    pub dir: TempDir,
}

impl TestSdk {
    /// Create an empty SDK directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a fully valid SDK state with the default fixtures
    pub fn valid() -> Self {
        let sdk = Self::new();
        sdk.write_manifest(&Self::default_manifest());
        sdk.write_opts(&Self::default_opts());
        sdk
    }

    /// Get the path to the SDK directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// The headers directory where sdk.opts lives
    #[allow(dead_code)]
    pub fn headers_dir(&self) -> PathBuf {
        self.path().join("sdk_headers")
    }

    /// Write the component manifest
    pub fn write_manifest(&self, content: &str) {
        self.write_file(Path::new("components.json"), content);
    }

    /// Write the options descriptor under the headers component
    #[allow(dead_code)]
    pub fn write_opts(&self, content: &str) {
        self.write_file(Path::new("sdk_headers/sdk.opts"), content);
    }

    /// Write an arbitrary file under the SDK directory
    pub fn write_file(&self, name: &Path, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Default component manifest fixture
    pub fn default_manifest() -> String {
        r#"{
            "meta": {
                "hw_target": "f7",
                "version": "65.2"
            },
            "components": {
                "sdk_headers.dir": "sdk_headers",
                "scripts.dir": "scripts",
                "debug.dir": "debug",
                "lib.dir": "lib",
                "firmware.elf": "firmware.elf",
                "full.bin": "full.bin",
                "update.dir": "update"
            }
        }"#
        .to_string()
    }

    /// Default options descriptor fixture, markers included
    pub fn default_opts() -> String {
        format!(
            r#"{{
                "app_ep_subst": "{APP_EP_MARKER}",
                "sdk_path_subst": "{SDK_PATH_MARKER}",
                "map_file_subst": "{MAP_FILE_MARKER}",
                "hardware": "7",
                "sdk_symbols": "{SDK_PATH_MARKER}/api_symbols.csv",
                "cc_args": "-mcpu=cortex-m4 -I{SDK_PATH_MARKER}/furi -O2",
                "cpp_args": "-fno-rtti -I{SDK_PATH_MARKER}/lib",
                "linker_args": "-Wl,-Map={MAP_FILE_MARKER}.map -Wl,--entry={APP_EP_MARKER}",
                "linker_libs": "m gcc stdc++"
            }}"#
        )
    }
}

impl Default for TestSdk {
    fn default() -> Self {
        Self::new()
    }
}
