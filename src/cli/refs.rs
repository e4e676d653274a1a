use crate::cli::{load_catalog, load_config, CatalogArgs, OutputArgs};
use crate::errors::{DocsearchError, Result};
use crate::oracle::TypeOracle;
use crate::output::json::{FileRefs, RefsOutput, ResolvedReference};
use crate::output::OutputFormat;
use crate::parse::java::JavaFrontend;
use crate::parse::{build_index, resolve};
use clap::Args;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Args)]
pub struct RefsArgs {
    /// Java source files to report on
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: &RefsArgs) -> Result<()> {
    let config = load_config(&args.output, Some(&args.catalog))?;
    let catalog = load_catalog(&config)?;

    let files_skipped = AtomicUsize::new(0);
    let files: Vec<FileRefs> = args
        .files
        .par_iter()
        .filter_map(|path| match std::fs::read_to_string(path) {
            Ok(source) => Some(file_refs(path, &source, &config.implicit_root, &catalog)),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                files_skipped.fetch_add(1, Ordering::Relaxed);
                None
            }
        })
        .collect();

    if files.is_empty() {
        return Err(DocsearchError::NoFiles {
            path: args.files.first().cloned().unwrap_or_default(),
        });
    }
    tracing::info!(
        files = files.len(),
        skipped = files_skipped.load(Ordering::Relaxed),
        "references collected"
    );

    let resolved = files
        .iter()
        .flat_map(|f| &f.references)
        .filter(|r| r.fqn.is_some())
        .count();
    let total: usize = files.iter().map(|f| f.references.len()).sum();

    let output = RefsOutput {
        files,
        resolved,
        unresolved: total - resolved,
    };

    let mut stdout = std::io::stdout().lock();
    match config.format {
        OutputFormat::Json => crate::output::json::write_json(&mut stdout, &output),
        OutputFormat::Text => crate::output::text::write_refs_text(&mut stdout, &output),
    }
}

/// Resolve every type reference in one compilation unit against its own imports.
fn file_refs(path: &Path, source: &str, implicit_root: &str, oracle: &dyn TypeOracle) -> FileRefs {
    let index = build_index(source, implicit_root);
    let references = JavaFrontend::new()
        .type_references(source.as_bytes())
        .into_iter()
        .map(|reference| {
            let resolved = resolve(&reference.name, &index, oracle);
            ResolvedReference {
                fqn: resolved.as_ref().map(|r| r.fqn.clone()),
                origin: resolved.map(|r| r.info.origin),
                reference,
            }
        })
        .collect();

    FileRefs {
        file: path.to_path_buf(),
        references,
    }
}
