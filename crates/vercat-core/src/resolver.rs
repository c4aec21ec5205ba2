//! Typed alias resolution over a [`Catalog`], with namespaced views.
//!
//! A resolver carries only a prefix and a borrowed catalog. Scoping it with
//! [`AliasResolver::namespace`] gives the nested accessor groups of a generated
//! catalog (`libs.androidx.room.compiler`) without a type per group:
//!
//! ```
//! use vercat_core::{Catalog, ModuleCoordinate};
//!
//! let mut builder = Catalog::builder();
//! builder.declare_library(
//!     "androidx-room-compiler",
//!     ModuleCoordinate::new("androidx.room", "room-compiler"),
//! )?;
//! let catalog = builder.build();
//!
//! let room = catalog.resolver().namespace("androidx.room");
//! assert_eq!(room.resolve_module("compiler")?.artifact, "room-compiler");
//! # Ok::<(), vercat_core::CatalogError>(())
//! ```

use crate::alias;
use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::types::{
    CatalogEntry, EntryKind, ModuleCoordinate, PluginId, VersionConstraint, VersionRef,
};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct AliasResolver<'c> {
    catalog: &'c Catalog,
    prefix: String,
}

impl<'c> AliasResolver<'c> {
    pub(crate) fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            prefix: String::new(),
        }
    }

    /// Normalized namespace prefix; empty for the root resolver.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns a view restricted to aliases beginning with `prefix + "."`.
    ///
    /// Scopes compose: `namespace("a").namespace("b")` equals `namespace("a.b")`.
    /// A trailing separator is ignored, so `namespace("androidx.")` equals
    /// `namespace("androidx")`.
    pub fn namespace(&self, prefix: &str) -> Self {
        let prefix = alias::normalize(prefix);
        Self {
            catalog: self.catalog,
            prefix: alias::join(&self.prefix, prefix.trim_end_matches(alias::SEPARATOR)),
        }
    }

    /// Full alias for a lookup relative to this namespace.
    pub fn qualify(&self, alias: &str) -> String {
        alias::join(&self.prefix, &alias::normalize(alias))
    }

    pub fn contains(&self, kind: EntryKind, alias: &str) -> bool {
        self.lookup(kind, alias).is_ok()
    }

    fn lookup(&self, kind: EntryKind, alias: &str) -> Result<&'c CatalogEntry> {
        if alias.is_empty() {
            return Err(CatalogError::not_found(alias::join(&self.prefix, "")));
        }
        self.catalog.lookup(kind, &self.qualify(alias))
    }

    /// Version string declared for `alias` in the versions section.
    ///
    /// Rich versions that are not expressible as one literal resolve to `""`.
    pub fn resolve_version(&self, alias: &str) -> Result<String> {
        self.resolve_version_constraint(alias)
            .map(VersionConstraint::display)
    }

    pub fn resolve_version_constraint(&self, alias: &str) -> Result<&'c VersionConstraint> {
        match self.lookup(EntryKind::Version, alias)? {
            CatalogEntry::Version(version) => Ok(version),
            other => Err(self.mismatch(alias, EntryKind::Version, other)),
        }
    }

    pub fn resolve_module(&self, alias: &str) -> Result<&'c ModuleCoordinate> {
        match self.lookup(EntryKind::Library, alias)? {
            CatalogEntry::Module(module) => Ok(module),
            other => Err(self.mismatch(alias, EntryKind::Library, other)),
        }
    }

    /// Rendered version of a library, following `version.ref` into the versions section.
    ///
    /// `Ok(None)` when the library declares no version.
    pub fn resolve_module_version(&self, alias: &str) -> Result<Option<String>> {
        let module = self.resolve_module(alias)?;
        self.resolve_version_ref(module.version.as_ref())
    }

    pub fn resolve_plugin(&self, alias: &str) -> Result<&'c PluginId> {
        match self.lookup(EntryKind::Plugin, alias)? {
            CatalogEntry::Plugin(plugin) => Ok(plugin),
            other => Err(self.mismatch(alias, EntryKind::Plugin, other)),
        }
    }

    pub fn resolve_plugin_version(&self, alias: &str) -> Result<Option<String>> {
        let plugin = self.resolve_plugin(alias)?;
        self.resolve_version_ref(plugin.version.as_ref())
    }

    /// Resolves every member of a bundle, preserving declaration order.
    ///
    /// Member aliases are absolute. A member that is not a declared library
    /// fails the whole call with `NotFound` naming that member.
    pub fn resolve_bundle(&self, alias: &str) -> Result<Vec<&'c ModuleCoordinate>> {
        self.bundle_members(alias)?
            .iter()
            .map(|member| match self.catalog.lookup(EntryKind::Library, member) {
                Ok(CatalogEntry::Module(module)) => Ok(module),
                Ok(_) | Err(CatalogError::WrongKind { .. }) => {
                    Err(CatalogError::not_found(member.clone()))
                }
                Err(e) => Err(e),
            })
            .collect()
    }

    /// Member library aliases of a bundle, unresolved.
    pub fn bundle_members(&self, alias: &str) -> Result<&'c [String]> {
        match self.lookup(EntryKind::Bundle, alias)? {
            CatalogEntry::Bundle(members) => Ok(members),
            other => Err(self.mismatch(alias, EntryKind::Bundle, other)),
        }
    }

    /// Distinct next path segments of `kind` aliases below this namespace.
    ///
    /// For versions `app.build.minimumSDK` and `app.version.appId`, the root
    /// yields `["app"]` and `namespace("app")` yields `["build", "version"]`.
    pub fn children(&self, kind: EntryKind) -> Vec<String> {
        let segments: BTreeSet<&str> = self
            .catalog
            .aliases(kind)
            .filter_map(|full| alias::strip_namespace(full, &self.prefix))
            .filter_map(|rest| rest.split(alias::SEPARATOR).next())
            .collect();
        segments.into_iter().map(str::to_string).collect()
    }

    /// Full aliases of `kind` below this namespace, sorted.
    pub fn aliases(&self, kind: EntryKind) -> Vec<String> {
        self.catalog
            .aliases(kind)
            .filter(|full| alias::strip_namespace(full, &self.prefix).is_some())
            .map(str::to_string)
            .collect()
    }

    /// Renders a library or plugin version, following references into the versions section.
    pub fn resolve_version_ref(&self, version: Option<&VersionRef>) -> Result<Option<String>> {
        match version {
            None => Ok(None),
            Some(VersionRef::Literal(constraint)) => Ok(Some(constraint.display())),
            Some(VersionRef::Ref(reference)) => {
                match self.catalog.lookup(EntryKind::Version, reference) {
                    Ok(CatalogEntry::Version(constraint)) => Ok(Some(constraint.display())),
                    Ok(_) | Err(CatalogError::WrongKind { .. }) => {
                        Err(CatalogError::not_found(reference.clone()))
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }

    fn mismatch(&self, alias: &str, requested: EntryKind, found: &CatalogEntry) -> CatalogError {
        CatalogError::WrongKind {
            alias: self.qualify(alias),
            requested,
            found: found.kind(),
        }
    }
}
