//! [`CatalogLoader`] implementation for the TOML catalog format.

use crate::parser::parse_version_catalog;
use std::path::Path;
use vercat_core::{Catalog, CatalogLoader, load_from_path};

/// Conventional location of the catalog relative to a Gradle project root.
pub const DEFAULT_CATALOG_PATH: &str = "gradle/libs.versions.toml";

#[derive(Debug, Clone, Copy, Default)]
pub struct TomlCatalogLoader;

impl CatalogLoader for TomlCatalogLoader {
    fn format(&self) -> &'static str {
        "toml"
    }

    fn load(&self, content: &str) -> vercat_core::Result<Catalog> {
        parse_version_catalog(content).map_err(|e| {
            tracing::debug!("Failed to load version catalog: {}", e);
            e.into()
        })
    }
}

/// Loads a `libs.versions.toml` file from disk.
pub fn load_catalog_file(path: &Path) -> vercat_core::Result<Catalog> {
    load_from_path(&TomlCatalogLoader, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use vercat_core::CatalogError;

    #[test]
    fn test_loader_trait() {
        let loader = TomlCatalogLoader;
        assert_eq!(loader.format(), "toml");
        let catalog = loader.load("[versions]\nkotlin = \"1.9.10\"\n").unwrap();
        assert_eq!(catalog.resolver().resolve_version("kotlin").unwrap(), "1.9.10");
    }

    #[test]
    fn test_loader_maps_errors() {
        let err = TomlCatalogLoader.load("[versions\n").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));

        let err = TomlCatalogLoader
            .load("[versions]\nroom = 7\n")
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEntry { ref section, .. } if section == "versions"));
    }

    #[test]
    fn test_load_catalog_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[plugins]").unwrap();
        writeln!(file, "ksp = {{ id = \"com.google.devtools.ksp\", version = \"1.9.10-1.0.13\" }}").unwrap();

        let catalog = load_catalog_file(file.path()).unwrap();
        assert_eq!(
            catalog.resolver().resolve_plugin("ksp").unwrap().id,
            "com.google.devtools.ksp"
        );
    }

    #[test]
    fn test_load_catalog_file_missing() {
        let err = load_catalog_file(Path::new("/nonexistent/gradle/libs.versions.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
