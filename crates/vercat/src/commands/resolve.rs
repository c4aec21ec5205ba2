//! `version`, `library`, `plugin` and `bundle` commands.

use super::with_version;
use anyhow::Result;
use std::io::Write;
use vercat_core::AliasResolver;

pub(crate) fn version(
    resolver: &AliasResolver<'_>,
    alias: &str,
    out: &mut impl Write,
) -> Result<()> {
    let version = resolver.resolve_version(alias)?;
    writeln!(out, "{version}")?;
    Ok(())
}

pub(crate) fn library(
    resolver: &AliasResolver<'_>,
    alias: &str,
    out: &mut impl Write,
) -> Result<()> {
    let module = resolver.resolve_module(alias)?;
    let version = resolver.resolve_module_version(alias)?;
    writeln!(out, "{}", with_version(&module.notation(), version.as_deref()))?;
    Ok(())
}

pub(crate) fn plugin(
    resolver: &AliasResolver<'_>,
    alias: &str,
    out: &mut impl Write,
) -> Result<()> {
    let plugin = resolver.resolve_plugin(alias)?;
    let version = resolver.resolve_plugin_version(alias)?;
    writeln!(out, "{}", with_version(&plugin.id, version.as_deref()))?;
    Ok(())
}

pub(crate) fn bundle(
    resolver: &AliasResolver<'_>,
    alias: &str,
    out: &mut impl Write,
) -> Result<()> {
    for module in resolver.resolve_bundle(alias)? {
        let version = resolver.resolve_version_ref(module.version.as_ref())?;
        writeln!(out, "{}", with_version(&module.notation(), version.as_deref()))?;
    }
    Ok(())
}
