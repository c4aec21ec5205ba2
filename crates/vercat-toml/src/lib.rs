//! Gradle version catalog support for vercat.
//!
//! Loads `gradle/libs.versions.toml` into a [`vercat_core::Catalog`]:
//! - `[versions]` - plain and rich versions
//! - `[libraries]` - `module` or `group`/`name` coordinates, inline or referenced versions
//! - `[plugins]` - plugin ids with optional versions
//! - `[bundles]` - ordered lists of library aliases

pub mod error;
pub mod loader;
pub mod parser;

pub use error::{Result, TomlCatalogError};
pub use loader::{DEFAULT_CATALOG_PATH, TomlCatalogLoader, load_catalog_file};
pub use parser::parse_version_catalog;
