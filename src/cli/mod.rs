pub mod all_classes;
pub mod config;
pub mod doc;
pub mod imports;
pub mod refs;
pub mod resolve;
pub mod select;
pub mod wrap;

use crate::config::resolve::{resolve_config, CliOverrides};
use crate::config::ResolvedConfig;
use crate::docs::Notice;
use crate::errors::Result;
use crate::oracle::TypeCatalog;
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "docsearch",
    version,
    about = "Import-aware Java class lookup and editor actions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the import index of a compilation unit
    Imports(imports::ImportsArgs),
    /// Resolve simple or qualified class names against a file's imports
    Resolve(resolve::ResolveArgs),
    /// Open the documentation page for the class under each caret
    Doc(doc::DocArgs),
    /// Open the all-classes documentation index
    AllClasses(all_classes::AllClassesArgs),
    /// Wrap lines or ranges in a statement template
    Wrap(wrap::WrapArgs),
    /// Expand a caret to a line, word or qualified name
    Select(select::SelectArgs),
    /// Resolve every type reference in a set of files
    Refs(refs::RefsArgs),
    /// Inspect configuration
    Config(config::ConfigArgs),
}

/// Where known types come from, on top of the configured ones.
#[derive(Debug, Default, Args)]
pub struct CatalogArgs {
    /// Class list file: one binary or canonical name per line (`jar tf` output works)
    #[arg(long = "class-list", value_name = "FILE")]
    pub class_lists: Vec<PathBuf>,

    /// Directory of Java sources whose declared types are known
    #[arg(long = "source-root", value_name = "DIR")]
    pub source_roots: Vec<PathBuf>,

    /// Do not seed the catalog with the bundled JDK types
    #[arg(long)]
    pub no_builtin: bool,
}

#[derive(Debug, Default, Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Suppress notices and progress output
    #[arg(long)]
    pub quiet: bool,
}

/// Dispatch to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Imports(args) => imports::run(&args),
        Commands::Resolve(args) => resolve::run(&args),
        Commands::Doc(args) => doc::run(&args),
        Commands::AllClasses(args) => all_classes::run(&args),
        Commands::Wrap(args) => wrap::run(&args),
        Commands::Select(args) => select::run(&args),
        Commands::Refs(args) => refs::run(&args),
        Commands::Config(args) => config::run(&args),
    }
}

/// Resolve configuration from the current directory with the command's flags on top.
pub(crate) fn load_config(output: &OutputArgs, catalog: Option<&CatalogArgs>) -> Result<ResolvedConfig> {
    let mut overrides = CliOverrides {
        format: output.format,
        quiet: output.quiet,
        ..CliOverrides::default()
    };
    if let Some(catalog) = catalog {
        overrides.no_builtin = catalog.no_builtin;
        overrides.class_lists = catalog.class_lists.clone();
        overrides.source_roots = catalog.source_roots.clone();
    }
    resolve_config(&std::env::current_dir()?, &overrides)
}

pub(crate) fn load_catalog(config: &ResolvedConfig) -> Result<TypeCatalog> {
    TypeCatalog::load(&config.catalog_options())
}

/// Print a passive notice to stderr unless quiet.
pub(crate) fn notify(config: &ResolvedConfig, notice: &Notice) {
    if !config.quiet {
        eprintln!("{notice}");
    }
}
