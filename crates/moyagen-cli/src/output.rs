//! Output directory management: each logical root is replaced
//! wholesale, so a failed run never leaves a mix of old and new files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use moyagen_core::GeneratedFile;

/// Logical output roots owned by the generator.
const CLEAN_DIRS: &[&str] = &["Models", "APIs"];
const CLEAN_FILES: &[&str] = &["Utils.swift", "Server.swift"];

/// Clean the owned roots under `base`, then write every generated file.
pub fn write_output(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    clean(base)?;
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn clean(base: &Path) -> Result<()> {
    for dir in CLEAN_DIRS {
        let path = base.join(dir);
        if path.exists() {
            fs::remove_dir_all(&path)
                .with_context(|| format!("failed to clean {}", path.display()))?;
        }
    }
    for file in CLEAN_FILES {
        let path = base.join(file);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("failed to clean {}", path.display()))?;
        }
    }
    Ok(())
}
