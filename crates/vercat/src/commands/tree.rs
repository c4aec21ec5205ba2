//! `tree` command: aliases grouped by dotted path segment.

use super::with_version;
use anyhow::Result;
use std::io::Write;
use vercat_core::{AliasResolver, EntryKind, VersionRef};

const INDENT: &str = "  ";

pub(crate) fn run(
    resolver: &AliasResolver<'_>,
    kind: Option<EntryKind>,
    out: &mut impl Write,
) -> Result<()> {
    let kinds = kind.map_or_else(|| EntryKind::ALL.to_vec(), |k| vec![k]);

    for kind in kinds {
        if resolver.children(kind).is_empty() {
            continue;
        }
        writeln!(out, "{}", kind.section())?;
        write_group(resolver, kind, 1, out)?;
    }
    Ok(())
}

fn write_group(
    resolver: &AliasResolver<'_>,
    kind: EntryKind,
    depth: usize,
    out: &mut impl Write,
) -> Result<()> {
    let indent = INDENT.repeat(depth);

    for segment in resolver.children(kind) {
        if resolver.contains(kind, &segment) {
            writeln!(out, "{indent}{segment} = {}", describe(resolver, kind, &segment)?)?;
        } else {
            writeln!(out, "{indent}{segment}")?;
        }
        write_group(&resolver.namespace(&segment), kind, depth + 1, out)?;
    }
    Ok(())
}

fn describe(resolver: &AliasResolver<'_>, kind: EntryKind, alias: &str) -> Result<String> {
    let text = match kind {
        EntryKind::Version => format!("\"{}\"", resolver.resolve_version(alias)?),
        EntryKind::Library => {
            let module = resolver.resolve_module(alias)?;
            describe_versioned(resolver, &module.notation(), module.version.as_ref())
        }
        EntryKind::Plugin => {
            let plugin = resolver.resolve_plugin(alias)?;
            describe_versioned(resolver, &plugin.id, plugin.version.as_ref())
        }
        EntryKind::Bundle => format!("[{}]", resolver.bundle_members(alias)?.join(", ")),
    };
    Ok(text)
}

/// A dangling `version.ref` is shown in place so the rest of the tree still prints.
fn describe_versioned(
    resolver: &AliasResolver<'_>,
    base: &str,
    version: Option<&VersionRef>,
) -> String {
    match resolver.resolve_version_ref(version) {
        Ok(resolved) => with_version(base, resolved.as_deref()),
        Err(e) => {
            tracing::warn!("{}: {}", base, e);
            match version {
                Some(VersionRef::Ref(reference)) => {
                    format!("{base} (version.ref '{reference}' not declared)")
                }
                _ => base.to_string(),
            }
        }
    }
}
