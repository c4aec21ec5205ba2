//! vercat CLI tool.
//!
//! Usage:
//! ```bash
//! vercat version app.build.minimumSDK
//! vercat library androidx-room-compiler
//! vercat tree --kind libraries --prefix androidx
//! vercat dump
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vercat_core::EntryKind;

mod catalog_path;
mod commands;

/// Resolve aliases declared in a Gradle version catalog
#[derive(Parser)]
#[command(name = "vercat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to libs.versions.toml (default: search upward from the current directory)
    #[arg(short, long, global = true, env = "VERCAT_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the version declared for an alias in [versions]
    Version { alias: String },

    /// Print the coordinates of a library alias
    Library { alias: String },

    /// Print the id of a plugin alias
    Plugin { alias: String },

    /// Print the coordinates of every library in a bundle
    Bundle { alias: String },

    /// Print aliases grouped by their dotted path segments
    Tree {
        /// Only show one section (versions, libraries, plugins, bundles)
        #[arg(short, long)]
        kind: Option<EntryKind>,

        /// Only show aliases below this namespace
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// Print the whole catalog as JSON
    Dump,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let path = catalog_path::resolve(&cwd, cli.catalog.as_deref())?;
    let catalog = vercat_toml::load_catalog_file(&path)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;

    let resolver = catalog.resolver();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Version { alias } => commands::resolve::version(&resolver, &alias, &mut out),
        Commands::Library { alias } => commands::resolve::library(&resolver, &alias, &mut out),
        Commands::Plugin { alias } => commands::resolve::plugin(&resolver, &alias, &mut out),
        Commands::Bundle { alias } => commands::resolve::bundle(&resolver, &alias, &mut out),
        Commands::Tree { kind, prefix } => {
            let scoped = match prefix {
                Some(prefix) => resolver.namespace(&prefix),
                None => resolver,
            };
            commands::tree::run(&scoped, kind, &mut out)
        }
        Commands::Dump => commands::dump::run(&catalog, &mut out),
    }?;

    out.flush()?;
    Ok(())
}
