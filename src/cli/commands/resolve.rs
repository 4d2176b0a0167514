//! CLI command for `sdkenv resolve`
//!
//! Resolves the SDK state and prints the variable set, either as an aligned
//! table or as JSON for scripting.

use anyhow::Result;
use std::path::Path;

use crate::core::resolve::resolve;

/// Execute the resolve command
pub fn execute(sdk_dir: &Path, manifest_file: &str, json: bool) -> Result<()> {
    tracing::info!("Resolving SDK state in {}", sdk_dir.display());

    let env = resolve(sdk_dir, manifest_file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&env.to_json())?);
        return Ok(());
    }

    let width = env
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or_default();
    for (name, value) in env.iter() {
        println!("{name:width$}  {value}");
    }
    println!();
    println!(
        "Script search path: {}",
        env.script_search_path.display()
    );
    Ok(())
}
