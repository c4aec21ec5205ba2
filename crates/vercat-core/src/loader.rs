//! Loader interface and file loading.
//!
//! The catalog document's grammar belongs to the loader implementation;
//! this crate only defines the seam and the filesystem plumbing around it.

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use std::path::Path;

/// Maximum accepted catalog file size in bytes (10MB).
///
/// Version catalogs are a few KB; anything near this limit is not a catalog.
pub const MAX_FILE_SIZE: u64 = 10_000_000;

/// Turns catalog document text into a [`Catalog`].
pub trait CatalogLoader: Send + Sync {
    /// Short name of the document format, used in logs.
    fn format(&self) -> &'static str;

    /// Parses `content` and declares every entry it contains.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The document syntax is invalid
    /// - An entry is malformed, or an alias is invalid or declared twice
    fn load(&self, content: &str) -> Result<Catalog>;
}

/// Reads `path` and hands its content to `loader`.
///
/// # Errors
///
/// - `CatalogError::Io` - file missing, unreadable, or not UTF-8
/// - `CatalogError::TooLarge` - file exceeds [`MAX_FILE_SIZE`]
/// - any error returned by the loader
pub fn load_from_path(loader: &dyn CatalogLoader, path: &Path) -> Result<Catalog> {
    tracing::debug!("Loading {} catalog from {:?}", loader.format(), path);

    let metadata = std::fs::metadata(path).map_err(|e| {
        tracing::debug!("Failed to read metadata for {:?}: {}", path, e);
        CatalogError::Io(e)
    })?;

    let size = metadata.len();
    if size > MAX_FILE_SIZE {
        tracing::error!(
            "Catalog exceeds maximum size: {} bytes (limit: {} bytes)",
            size,
            MAX_FILE_SIZE
        );
        return Err(CatalogError::TooLarge {
            size,
            limit: MAX_FILE_SIZE,
        });
    }
    tracing::trace!("File size: {} bytes", size);

    let content = std::fs::read_to_string(path).map_err(|e| {
        tracing::debug!("Failed to read file {:?}: {}", path, e);
        CatalogError::Io(e)
    })?;

    let catalog = loader.load(&content)?;
    tracing::debug!("Loaded {} entries from {:?}", catalog.len(), path);
    Ok(catalog)
}
