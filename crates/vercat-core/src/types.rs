//! Domain types for version catalog entries.

use serde::Serialize;
use std::fmt;

/// Section of the catalog an entry belongs to.
///
/// Each kind is its own alias namespace: `room` may be declared both as a
/// version and as a bundle without conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Version,
    Library,
    Plugin,
    Bundle,
}

impl EntryKind {
    pub const ALL: [Self; 4] = [Self::Version, Self::Library, Self::Plugin, Self::Bundle];

    /// Name of the TOML section holding entries of this kind.
    pub fn section(self) -> &'static str {
        match self {
            Self::Version => "versions",
            Self::Library => "libraries",
            Self::Plugin => "plugins",
            Self::Bundle => "bundles",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Version => "version",
            Self::Library => "library",
            Self::Plugin => "plugin",
            Self::Bundle => "bundle",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "version" | "versions" => Ok(Self::Version),
            "library" | "libraries" | "lib" => Ok(Self::Library),
            "plugin" | "plugins" => Ok(Self::Plugin),
            "bundle" | "bundles" => Ok(Self::Bundle),
            other => Err(format!("unknown entry kind '{other}'")),
        }
    }
}

/// A version declaration, possibly a rich constraint.
///
/// A plain `"1.2.3"` in the catalog becomes `require = Some("1.2.3")`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct VersionConstraint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strictly: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reject: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub reject_all: bool,
}

impl VersionConstraint {
    pub fn required(version: impl Into<String>) -> Self {
        Self {
            require: Some(version.into()),
            ..Self::default()
        }
    }

    pub fn strictly(version: impl Into<String>) -> Self {
        Self {
            strictly: Some(version.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.require.is_none()
            && self.strictly.is_none()
            && self.prefer.is_none()
            && self.reject.is_empty()
            && !self.reject_all
    }

    /// Renders the constraint as a single version string.
    ///
    /// Returns an empty string when the constraint cannot be expressed as one
    /// literal: ranges, rejections, or conflicting require/strictly/prefer parts.
    pub fn display(&self) -> String {
        if self.reject_all || !self.reject.is_empty() {
            return String::new();
        }

        let pinned = match (&self.require, &self.strictly) {
            (Some(r), None) => Some(r),
            (None, Some(s)) => Some(s),
            (Some(r), Some(s)) if r == s => Some(r),
            (Some(_), Some(_)) => return String::new(),
            (None, None) => None,
        };

        let single = match (pinned, &self.prefer) {
            (Some(v), None) => v,
            (Some(v), Some(p)) if v == p => v,
            (Some(_), Some(_)) => return String::new(),
            (None, Some(p)) => p,
            (None, None) => return String::new(),
        };

        if is_range_expression(single) {
            String::new()
        } else {
            single.clone()
        }
    }
}

/// Returns `true` for Maven-style range expressions such as `[1.0,2.0[` or `(,3.0]`.
pub fn is_range_expression(version: &str) -> bool {
    let trimmed = version.trim();
    trimmed.starts_with(['[', ']', '(']) && trimmed.contains(',')
}

/// How a library or plugin declares its version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionRef {
    /// `version.ref = "alias"`, pointing into `[versions]`.
    Ref(String),
    /// Version declared inline on the entry.
    Literal(VersionConstraint),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleCoordinate {
    pub group: String,
    pub artifact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionRef>,
}

impl ModuleCoordinate {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: None,
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: VersionRef) -> Self {
        self.version = Some(version);
        self
    }

    /// Canonical identifier: "{group}:{artifact}"
    pub fn notation(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}

impl fmt::Display for ModuleCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginId {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionRef>,
}

impl PluginId {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: None,
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: VersionRef) -> Self {
        self.version = Some(version);
        self
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CatalogEntry {
    Version(VersionConstraint),
    Module(ModuleCoordinate),
    Plugin(PluginId),
    /// Member library aliases, in declaration order.
    Bundle(Vec<String>),
}

impl CatalogEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Version(_) => EntryKind::Version,
            Self::Module(_) => EntryKind::Library,
            Self::Plugin(_) => EntryKind::Plugin,
            Self::Bundle(_) => EntryKind::Bundle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_version_display() {
        assert_eq!(VersionConstraint::required("2.6.1").display(), "2.6.1");
        assert_eq!(VersionConstraint::strictly("1.9.0").display(), "1.9.0");
    }

    #[test]
    fn test_range_version_display_is_empty() {
        assert_eq!(VersionConstraint::required("[1.0,2.0[").display(), "");
        assert_eq!(VersionConstraint::strictly("(,3.0]").display(), "");
    }

    #[test]
    fn test_dynamic_version_is_literal() {
        assert_eq!(VersionConstraint::required("1.+").display(), "1.+");
    }

    #[test]
    fn test_prefer_only_display() {
        let v = VersionConstraint {
            prefer: Some("1.5".into()),
            ..VersionConstraint::default()
        };
        assert_eq!(v.display(), "1.5");
    }

    #[test]
    fn test_rich_version_display_is_empty() {
        let v = VersionConstraint {
            strictly: Some("[1.0,2.0[".into()),
            prefer: Some("1.5".into()),
            ..VersionConstraint::default()
        };
        assert_eq!(v.display(), "");

        let v = VersionConstraint {
            require: Some("1.0".into()),
            reject: vec!["1.0.1".into()],
            ..VersionConstraint::default()
        };
        assert_eq!(v.display(), "");

        let v = VersionConstraint {
            require: Some("1.0".into()),
            strictly: Some("1.1".into()),
            ..VersionConstraint::default()
        };
        assert_eq!(v.display(), "");
    }

    #[test]
    fn test_empty_constraint() {
        let v = VersionConstraint::default();
        assert!(v.is_empty());
        assert_eq!(v.display(), "");
    }

    #[test]
    fn test_is_range_expression() {
        assert!(is_range_expression("[1.0,2.0)"));
        assert!(is_range_expression("]1.0,2.0]"));
        assert!(!is_range_expression("1.0"));
        assert!(!is_range_expression("[1.0]"));
    }

    #[test]
    fn test_module_notation() {
        let m = ModuleCoordinate::new("androidx.room", "room-ktx");
        assert_eq!(m.notation(), "androidx.room:room-ktx");
        assert_eq!(m.to_string(), "androidx.room:room-ktx");
        assert!(m.version.is_none());
    }

    #[test]
    fn test_entry_kind() {
        let entry = CatalogEntry::Bundle(vec!["androidx.room.ktx".into()]);
        assert_eq!(entry.kind(), EntryKind::Bundle);
        let entry = CatalogEntry::Module(ModuleCoordinate::new("a", "b"));
        assert_eq!(entry.kind(), EntryKind::Library);
    }

    #[test]
    fn test_entry_kind_from_str() {
        assert_eq!("libraries".parse::<EntryKind>(), Ok(EntryKind::Library));
        assert_eq!("Plugin".parse::<EntryKind>(), Ok(EntryKind::Plugin));
        assert!("widgets".parse::<EntryKind>().is_err());
    }

    #[test]
    fn test_entry_serialization() {
        let entry = CatalogEntry::Version(VersionConstraint::required("1.0"));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "version", "value": { "require": "1.0" } })
        );
    }
}
