//! Immutable catalog table and its builder.

use crate::alias;
use crate::error::{CatalogError, Result};
use crate::resolver::AliasResolver;
use crate::types::{CatalogEntry, EntryKind, ModuleCoordinate, PluginId, VersionConstraint};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

type EntryKey = (EntryKind, String);

/// All declared entries, keyed by kind and normalized alias.
///
/// Built once through [`CatalogBuilder`] and never mutated afterwards, so a
/// shared `&Catalog` (or `Arc<Catalog>`) can be read from any number of threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<EntryKey, CatalogEntry>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Root resolver over the whole catalog.
    pub fn resolver(&self) -> AliasResolver<'_> {
        AliasResolver::new(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up `alias` (full path) as an entry of `kind`.
    ///
    /// Distinguishes an alias declared only under another kind (`WrongKind`)
    /// from one not declared at all (`NotFound`).
    pub fn lookup(&self, kind: EntryKind, alias: &str) -> Result<&CatalogEntry> {
        let normalized = alias::normalize(alias);

        if let Some(entry) = self.get(kind, &normalized) {
            return Ok(entry);
        }

        let found = EntryKind::ALL
            .into_iter()
            .filter(|other| *other != kind)
            .find(|other| self.get(*other, &normalized).is_some());

        match found {
            Some(found) => Err(CatalogError::WrongKind {
                alias: normalized,
                requested: kind,
                found,
            }),
            None => Err(CatalogError::not_found(normalized)),
        }
    }

    fn get(&self, kind: EntryKind, normalized: &str) -> Option<&CatalogEntry> {
        self.entries.get(&(kind, normalized.to_string()))
    }

    /// Iterates over every entry ordered by kind, then alias.
    pub fn entries(&self) -> impl Iterator<Item = (EntryKind, &str, &CatalogEntry)> {
        self.entries
            .iter()
            .map(|((kind, alias), entry)| (*kind, alias.as_str(), entry))
    }

    /// Sorted aliases declared for `kind`.
    pub fn aliases(&self, kind: EntryKind) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .filter(move |(k, _)| *k == kind)
            .map(|(_, alias)| alias.as_str())
    }
}

/// Collects declarations and rejects duplicates before freezing them into a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: BTreeMap<EntryKey, CatalogEntry>,
}

impl CatalogBuilder {
    pub fn declare_version(
        &mut self,
        alias: &str,
        version: VersionConstraint,
    ) -> Result<&mut Self> {
        self.insert(alias, CatalogEntry::Version(version))
    }

    pub fn declare_library(&mut self, alias: &str, module: ModuleCoordinate) -> Result<&mut Self> {
        self.insert(alias, CatalogEntry::Module(module))
    }

    pub fn declare_plugin(&mut self, alias: &str, plugin: PluginId) -> Result<&mut Self> {
        self.insert(alias, CatalogEntry::Plugin(plugin))
    }

    /// Declares a bundle of library aliases.
    ///
    /// Members are normalized but not checked here; a missing member surfaces
    /// as `NotFound` when the bundle is resolved.
    pub fn declare_bundle<I, S>(&mut self, alias: &str, members: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let members = members
            .into_iter()
            .map(|m| alias::normalize(m.as_ref()))
            .collect();
        self.insert(alias, CatalogEntry::Bundle(members))
    }

    fn insert(&mut self, alias: &str, entry: CatalogEntry) -> Result<&mut Self> {
        let kind = entry.kind();
        let normalized = alias::validate(alias, kind)?;

        match self.entries.entry((kind, normalized)) {
            Entry::Occupied(occupied) => {
                let (_, existing) = occupied.key();
                tracing::debug!("Rejecting duplicate {} alias '{}'", kind, existing);
                Err(CatalogError::DuplicateAlias {
                    alias: existing.clone(),
                    kind,
                })
            }
            Entry::Vacant(vacant) => {
                tracing::trace!("Declared {} '{}'", kind, vacant.key().1);
                vacant.insert(entry);
                Ok(self)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> Catalog {
        tracing::debug!("Built catalog with {} entries", self.entries.len());
        Catalog {
            entries: self.entries,
        }
    }
}
