//! CLI command for `sdkenv check`
//!
//! Runs the full resolution and reports validity without dumping variables.

use anyhow::Result;
use std::path::Path;

use crate::cli::output::status;
use crate::core::env::{vars, EnvValue};
use crate::core::resolve::resolve;

/// Execute the check command
pub fn execute(sdk_dir: &Path, manifest_file: &str) -> Result<()> {
    tracing::info!("Checking SDK state in {}", sdk_dir.display());

    let env = resolve(sdk_dir, manifest_file)?;

    let hw_target = match env.get(vars::HW_TARGET) {
        Some(EnvValue::Str(s)) => s.clone(),
        _ => String::from("unknown"),
    };
    println!(
        "{} SDK state is valid for hardware target '{}' ({} variables)",
        status::SUCCESS,
        hw_target,
        env.len()
    );
    Ok(())
}
