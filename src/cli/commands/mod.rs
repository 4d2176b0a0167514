//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod check;
pub mod resolve;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the SDK state into a build environment
    Resolve {
        /// SDK directory containing the component manifest
        sdk_dir: PathBuf,

        /// Component manifest file name inside the SDK directory
        #[arg(short, long, default_value = crate::config::defaults::SDK_MANIFEST_FILE)]
        manifest: String,

        /// Output the environment as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Validate the SDK state without printing the environment
    Check {
        /// SDK directory containing the component manifest
        sdk_dir: PathBuf,

        /// Component manifest file name inside the SDK directory
        #[arg(short, long, default_value = crate::config::defaults::SDK_MANIFEST_FILE)]
        manifest: String,
    },
}

impl Commands {
    /// Run the selected command
    pub fn run(self) -> Result<()> {
        match self {
            Self::Resolve {
                sdk_dir,
                manifest,
                json,
            } => resolve::execute(&sdk_dir, &manifest, json),
            Self::Check { sdk_dir, manifest } => check::execute(&sdk_dir, &manifest),
        }
    }
}
