//! Alias normalization and validation.
//!
//! Catalog keys may use `-`, `_` or `.` as separators; all three map to `.`
//! so `androidx-room-compiler` and `androidx.room.compiler` name the same entry.

use crate::error::{CatalogError, Result};
use crate::types::EntryKind;
use regex::Regex;
use std::sync::LazyLock;

static ALIAS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*(\.[a-zA-Z0-9]+)*$").expect("Invalid regex")
});

/// First segments a library alias may not use; they collide with the
/// accessor groups of the other sections.
const RESERVED_LIBRARY_PREFIXES: &[&str] = &["bundles", "versions", "plugins"];

pub const SEPARATOR: char = '.';

/// Maps every `-` and `_` separator to `.`.
pub fn normalize(alias: &str) -> String {
    alias.replace(['-', '_'], ".")
}

/// Normalizes and validates an alias declared for `kind`.
pub fn validate(alias: &str, kind: EntryKind) -> Result<String> {
    let normalized = normalize(alias);

    if !ALIAS_PATTERN.is_match(&normalized) {
        return Err(CatalogError::InvalidAlias {
            alias: alias.to_string(),
            reason: "expected letter-led, non-empty segments of letters and digits".into(),
        });
    }

    if kind == EntryKind::Library {
        let first = normalized.split(SEPARATOR).next().unwrap_or_default();
        if RESERVED_LIBRARY_PREFIXES.contains(&first) {
            return Err(CatalogError::InvalidAlias {
                alias: alias.to_string(),
                reason: format!("library aliases cannot start with '{first}'"),
            });
        }
    }

    Ok(normalized)
}

/// Joins a namespace prefix and a relative alias.
pub fn join(prefix: &str, alias: &str) -> String {
    match (prefix.is_empty(), alias.is_empty()) {
        (true, _) => alias.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}{SEPARATOR}{alias}"),
    }
}

/// Returns the remainder of `alias` below `prefix`, if `alias` lies in that namespace.
pub fn strip_namespace<'a>(alias: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return Some(alias);
    }
    alias
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix(SEPARATOR))
        .filter(|rest| !rest.is_empty())
}
