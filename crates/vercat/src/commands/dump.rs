//! `dump` command: the whole catalog as JSON, one object per section.

use anyhow::Result;
use serde_json::{Map, Value};
use std::io::Write;
use vercat_core::{Catalog, CatalogEntry, EntryKind};

pub(crate) fn run(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    let json = to_json(catalog)?;
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}

fn to_json(catalog: &Catalog) -> Result<Value> {
    let mut sections: Map<String, Value> = EntryKind::ALL
        .into_iter()
        .map(|kind| (kind.section().to_string(), Value::Object(Map::new())))
        .collect();

    for (kind, alias, entry) in catalog.entries() {
        let value = match entry {
            CatalogEntry::Version(version) => serde_json::to_value(version)?,
            CatalogEntry::Module(module) => serde_json::to_value(module)?,
            CatalogEntry::Plugin(plugin) => serde_json::to_value(plugin)?,
            CatalogEntry::Bundle(members) => serde_json::to_value(members)?,
        };
        if let Some(Value::Object(section)) = sections.get_mut(kind.section()) {
            section.insert(alias.to_string(), value);
        }
    }

    Ok(Value::Object(sections))
}
