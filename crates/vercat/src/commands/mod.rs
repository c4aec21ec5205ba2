//! Subcommand implementations.
//!
//! Each command writes to the given writer so output can be captured in tests.

pub(crate) mod dump;
pub(crate) mod resolve;
pub(crate) mod tree;

/// `base:version`, or `base` alone when no single version applies.
pub(crate) fn with_version(base: &str, version: Option<&str>) -> String {
    match version {
        Some(v) if !v.is_empty() => format!("{base}:{v}"),
        _ => base.to_string(),
    }
}
