//! Check command implementation

use crate::generate::load_batch;
use anyhow::Result;
use msgbridge_core::GeneratorConfig;
use std::path::PathBuf;

/// Resolve every document without writing anything
pub fn run(files: &[PathBuf], registry_files: &[PathBuf], config: &GeneratorConfig) -> Result<()> {
    let batch = load_batch(files, registry_files, config);
    let resolved = batch.resolved().len();

    println!("Checking {} schema file(s)", files.len());
    for (path, err) in &batch.failures {
        println!("  ✗ {}: {err}", path.display());
    }

    if !batch.failures.is_empty() {
        anyhow::bail!(
            "{} of {} schema file(s) failed to resolve",
            batch.failures.len(),
            files.len()
        );
    }

    println!("✓ {resolved} schema file(s) resolved");
    Ok(())
}
