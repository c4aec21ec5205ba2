//! Parser for Gradle Version Catalog (gradle/libs.versions.toml).
//!
//! Handles \[versions\], \[libraries\], \[plugins\] and \[bundles\]. Entries may
//! be written as short string notation, inline tables, or explicit tables;
//! dotted keys such as `version.ref` parse as nested tables either way.

use crate::error::{Result, TomlCatalogError};
use std::collections::HashSet;
use toml_edit::{DocumentMut, Item, TableLike, TomlError};
use vercat_core::{
    Catalog, CatalogBuilder, CatalogError, EntryKind, ModuleCoordinate, PluginId,
    VersionConstraint, VersionRef, alias,
};

const VERSIONS: &str = "versions";
const LIBRARIES: &str = "libraries";
const PLUGINS: &str = "plugins";
const BUNDLES: &str = "bundles";

const LIBRARY_KEYS: &[&str] = &["module", "group", "name", "version"];
const PLUGIN_KEYS: &[&str] = &["id", "version"];

pub fn parse_version_catalog(content: &str) -> Result<Catalog> {
    let doc: DocumentMut = content
        .parse()
        .map_err(|err: TomlError| duplicate_key_error(content, err))?;
    let mut builder = Catalog::builder();

    for (section, item) in doc.iter() {
        let parse: fn(&dyn TableLike, &mut CatalogBuilder) -> Result<()> = match section {
            VERSIONS => parse_versions,
            LIBRARIES => parse_libraries,
            PLUGINS => parse_plugins,
            BUNDLES => parse_bundles,
            other => {
                tracing::debug!("Ignoring catalog section [{}]", other);
                continue;
            }
        };

        let Some(table) = item.as_table_like() else {
            return Err(TomlCatalogError::ParseError {
                message: format!("[{section}] must be a table, found {}", item.type_name()),
            });
        };
        parse(table, &mut builder)?;
    }

    Ok(builder.build())
}

/// toml_edit rejects a repeated key before any entry is declared; report it
/// as the alias it repeats when it lies in one of the catalog sections.
fn duplicate_key_error(content: &str, err: TomlError) -> TomlCatalogError {
    if !err.message().contains("duplicate key") {
        return err.into();
    }
    match find_repeated_alias(content) {
        Some((kind, alias)) => {
            tracing::debug!("Alias '{}' repeated in [{}]", alias, kind.section());
            CatalogError::DuplicateAlias { alias, kind }.into()
        }
        None => err.into(),
    }
}

fn find_repeated_alias(content: &str) -> Option<(EntryKind, String)> {
    let mut section = None;
    let mut seen = HashSet::new();

    for line in content.lines().map(str::trim) {
        if let Some(header) = line.strip_prefix('[') {
            section = header.split(']').next().and_then(|name| section_kind(name.trim()));
            continue;
        }
        let Some(kind) = section else {
            continue;
        };
        let Some((key, _)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim().trim_matches('"');
        // Dotted keys extend one entry's table rather than assigning an alias.
        if key.is_empty() || key.starts_with('#') || key.contains('.') {
            continue;
        }
        if !seen.insert((kind, key.to_string())) {
            return Some((kind, alias::normalize(key)));
        }
    }
    None
}

fn section_kind(name: &str) -> Option<EntryKind> {
    match name {
        VERSIONS => Some(EntryKind::Version),
        LIBRARIES => Some(EntryKind::Library),
        PLUGINS => Some(EntryKind::Plugin),
        BUNDLES => Some(EntryKind::Bundle),
        _ => None,
    }
}

fn parse_versions(table: &dyn TableLike, builder: &mut CatalogBuilder) -> Result<()> {
    for (alias, item) in table.iter() {
        let version = if let Some(ver_str) = item.as_str() {
            VersionConstraint::required(ver_str)
        } else if let Some(rich) = item.as_table_like() {
            parse_rich_version(VERSIONS, alias, rich)?
        } else {
            return Err(TomlCatalogError::invalid(
                VERSIONS,
                alias,
                format!("expected a version string or table, found {}", item.type_name()),
            ));
        };
        builder.declare_version(alias, version)?;
    }
    Ok(())
}

fn parse_libraries(table: &dyn TableLike, builder: &mut CatalogBuilder) -> Result<()> {
    for (alias, item) in table.iter() {
        let module = parse_library_entry(alias, item)?;
        builder.declare_library(alias, module)?;
    }
    Ok(())
}

fn parse_plugins(table: &dyn TableLike, builder: &mut CatalogBuilder) -> Result<()> {
    for (alias, item) in table.iter() {
        let plugin = parse_plugin_entry(alias, item)?;
        builder.declare_plugin(alias, plugin)?;
    }
    Ok(())
}

fn parse_bundles(table: &dyn TableLike, builder: &mut CatalogBuilder) -> Result<()> {
    for (alias, item) in table.iter() {
        let Some(array) = item.as_array() else {
            return Err(TomlCatalogError::invalid(
                BUNDLES,
                alias,
                format!("expected an array of library aliases, found {}", item.type_name()),
            ));
        };

        let members = array
            .iter()
            .map(|value| {
                value.as_str().ok_or_else(|| {
                    TomlCatalogError::invalid(
                        BUNDLES,
                        alias,
                        format!("bundle members must be strings, found {}", value.type_name()),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;

        builder.declare_bundle(alias, members)?;
    }
    Ok(())
}

fn parse_library_entry(alias: &str, item: &Item) -> Result<ModuleCoordinate> {
    if let Some(notation) = item.as_str() {
        return parse_module_notation(alias, notation);
    }
    let Some(table) = item.as_table_like() else {
        return Err(TomlCatalogError::invalid(
            LIBRARIES,
            alias,
            format!("expected a coordinate string or table, found {}", item.type_name()),
        ));
    };
    check_keys(LIBRARIES, alias, table, LIBRARY_KEYS)?;

    let mut module = if let Some(module_item) = table.get("module") {
        if table.contains_key("group") || table.contains_key("name") {
            return Err(TomlCatalogError::invalid(
                LIBRARIES,
                alias,
                "'module' cannot be combined with 'group' or 'name'",
            ));
        }
        let module_str = expect_str(LIBRARIES, alias, "module", module_item)?;
        let (group, artifact) = split_coordinates(alias, module_str)?;
        ModuleCoordinate::new(group, artifact)
    } else {
        let (Some(group_item), Some(name_item)) = (table.get("group"), table.get("name")) else {
            return Err(TomlCatalogError::invalid(
                LIBRARIES,
                alias,
                "expected 'module' or both 'group' and 'name'",
            ));
        };
        let group = expect_str(LIBRARIES, alias, "group", group_item)?;
        let name = expect_str(LIBRARIES, alias, "name", name_item)?;
        if group.is_empty() || name.is_empty() {
            return Err(TomlCatalogError::invalid(
                LIBRARIES,
                alias,
                "'group' and 'name' must not be empty",
            ));
        }
        ModuleCoordinate::new(group, name)
    };

    if let Some(version_item) = table.get("version") {
        module.version = Some(parse_version_ref(LIBRARIES, alias, version_item)?);
    }

    Ok(module)
}

/// `"group:artifact"` or `"group:artifact:version"`.
fn parse_module_notation(alias: &str, notation: &str) -> Result<ModuleCoordinate> {
    match notation.rsplit_once(':') {
        Some((coordinates, version)) if coordinates.contains(':') => {
            if version.is_empty() {
                return Err(TomlCatalogError::invalid(
                    LIBRARIES,
                    alias,
                    format!("empty version in '{notation}'"),
                ));
            }
            let (group, artifact) = split_coordinates(alias, coordinates)?;
            Ok(ModuleCoordinate::new(group, artifact)
                .with_version(VersionRef::Literal(VersionConstraint::required(version))))
        }
        _ => {
            let (group, artifact) = split_coordinates(alias, notation)?;
            Ok(ModuleCoordinate::new(group, artifact))
        }
    }
}

fn split_coordinates<'a>(alias: &str, coordinates: &'a str) -> Result<(&'a str, &'a str)> {
    match coordinates.split_once(':') {
        Some((group, artifact))
            if !group.is_empty() && !artifact.is_empty() && !artifact.contains(':') =>
        {
            Ok((group, artifact))
        }
        _ => Err(TomlCatalogError::invalid(
            LIBRARIES,
            alias,
            format!("invalid module '{coordinates}': expected 'group:artifact'"),
        )),
    }
}

fn parse_plugin_entry(alias: &str, item: &Item) -> Result<PluginId> {
    if let Some(notation) = item.as_str() {
        return match notation.split_once(':') {
            Some((id, version)) if !id.is_empty() && !version.is_empty() => Ok(PluginId::new(id)
                .with_version(VersionRef::Literal(VersionConstraint::required(version)))),
            None if !notation.is_empty() => Ok(PluginId::new(notation)),
            _ => Err(TomlCatalogError::invalid(
                PLUGINS,
                alias,
                format!("invalid plugin notation '{notation}': expected 'id:version'"),
            )),
        };
    }
    let Some(table) = item.as_table_like() else {
        return Err(TomlCatalogError::invalid(
            PLUGINS,
            alias,
            format!("expected a plugin string or table, found {}", item.type_name()),
        ));
    };
    check_keys(PLUGINS, alias, table, PLUGIN_KEYS)?;

    let Some(id_item) = table.get("id") else {
        return Err(TomlCatalogError::invalid(PLUGINS, alias, "missing 'id'"));
    };
    let id = expect_str(PLUGINS, alias, "id", id_item)?;
    if id.is_empty() {
        return Err(TomlCatalogError::invalid(PLUGINS, alias, "'id' must not be empty"));
    }

    let mut plugin = PluginId::new(id);
    if let Some(version_item) = table.get("version") {
        plugin.version = Some(parse_version_ref(PLUGINS, alias, version_item)?);
    }
    Ok(plugin)
}

/// Version of a library or plugin: a literal, `{ ref = "..." }`, or a rich table.
fn parse_version_ref(section: &'static str, alias: &str, item: &Item) -> Result<VersionRef> {
    if let Some(ver_str) = item.as_str() {
        return Ok(VersionRef::Literal(VersionConstraint::required(ver_str)));
    }
    let Some(table) = item.as_table_like() else {
        return Err(TomlCatalogError::invalid(
            section,
            alias,
            format!("expected a version string or table, found {}", item.type_name()),
        ));
    };

    if let Some(ref_item) = table.get("ref") {
        if table.len() > 1 {
            return Err(TomlCatalogError::invalid(
                section,
                alias,
                "'version.ref' cannot be combined with other version keys",
            ));
        }
        let ref_key = expect_str(section, alias, "version.ref", ref_item)?;
        return Ok(VersionRef::Ref(vercat_core::alias::normalize(ref_key)));
    }

    parse_rich_version(section, alias, table).map(VersionRef::Literal)
}

fn parse_rich_version(
    section: &'static str,
    alias: &str,
    table: &dyn TableLike,
) -> Result<VersionConstraint> {
    let mut version = VersionConstraint::default();

    for (key, item) in table.iter() {
        match key {
            "require" => version.require = Some(expect_str(section, alias, key, item)?.to_string()),
            "strictly" => {
                version.strictly = Some(expect_str(section, alias, key, item)?.to_string());
            }
            "prefer" => version.prefer = Some(expect_str(section, alias, key, item)?.to_string()),
            "reject" => {
                let Some(array) = item.as_array() else {
                    return Err(TomlCatalogError::invalid(
                        section,
                        alias,
                        "'reject' must be an array of versions",
                    ));
                };
                for value in array {
                    let Some(rejected) = value.as_str() else {
                        return Err(TomlCatalogError::invalid(
                            section,
                            alias,
                            "'reject' must be an array of versions",
                        ));
                    };
                    version.reject.push(rejected.to_string());
                }
            }
            "rejectAll" => {
                version.reject_all = item.as_bool().ok_or_else(|| {
                    TomlCatalogError::invalid(section, alias, "'rejectAll' must be a boolean")
                })?;
            }
            other => {
                return Err(TomlCatalogError::invalid(
                    section,
                    alias,
                    format!("unknown version key '{other}'"),
                ));
            }
        }
    }

    if version.is_empty() {
        return Err(TomlCatalogError::invalid(
            section,
            alias,
            "version table declares no constraint",
        ));
    }
    Ok(version)
}

fn check_keys(
    section: &'static str,
    alias: &str,
    table: &dyn TableLike,
    allowed: &[&str],
) -> Result<()> {
    match table.iter().map(|(key, _)| key).find(|key| !allowed.contains(key)) {
        Some(unknown) => Err(TomlCatalogError::invalid(
            section,
            alias,
            format!("unknown key '{unknown}'"),
        )),
        None => Ok(()),
    }
}

fn expect_str<'a>(
    section: &'static str,
    alias: &str,
    key: &str,
    item: &'a Item,
) -> Result<&'a str> {
    item.as_str().ok_or_else(|| {
        TomlCatalogError::invalid(
            section,
            alias,
            format!("'{key}' must be a string, found {}", item.type_name()),
        )
    })
}
