//! Catalog file resolution.
//!
//! 1. `--catalog` flag or `VERCAT_CATALOG` (explicit path)
//! 2. `gradle/libs.versions.toml` in the current directory or the nearest ancestor

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use vercat_toml::DEFAULT_CATALOG_PATH;

pub(crate) fn resolve(start_dir: &Path, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }

    for dir in start_dir.ancestors() {
        let candidate = dir.join(DEFAULT_CATALOG_PATH);
        if candidate.is_file() {
            tracing::debug!("Found catalog: {}", candidate.display());
            return Ok(candidate);
        }
    }

    bail!(
        "no {} found in {} or any parent directory; pass --catalog",
        DEFAULT_CATALOG_PATH,
        start_dir.display()
    )
}
