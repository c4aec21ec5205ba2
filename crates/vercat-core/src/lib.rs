//! Core abstractions for vercat.
//!
//! Provides the immutable version catalog model, typed alias resolution with
//! namespaced views, and the loader trait implemented by document formats:
//! - [`Catalog`] / [`CatalogBuilder`] - table of versions, libraries, plugins and bundles
//! - [`AliasResolver`] - `resolve_*` lookups and `namespace` scoping
//! - [`CatalogLoader`] - seam for catalog document parsers

pub mod alias;
pub mod catalog;
pub mod error;
pub mod loader;
pub mod resolver;
pub mod types;

pub use catalog::{Catalog, CatalogBuilder};
pub use error::{CatalogError, Result};
pub use loader::{CatalogLoader, MAX_FILE_SIZE, load_from_path};
pub use resolver::AliasResolver;
pub use types::{
    CatalogEntry, EntryKind, ModuleCoordinate, PluginId, VersionConstraint, VersionRef,
    is_range_expression,
};
