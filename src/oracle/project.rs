use crate::errors::{DocsearchError, Result};
use crate::oracle::{CatalogOptions, TypeCatalog, TypeInfo, TypeOrigin};
use crate::parse::java::{DeclaredTypes, JavaFrontend};
use crate::walk;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Index every type declared in `.java` files under `root`.
/// Returns how many new types were added to `catalog`.
pub fn scan_source_root(
    catalog: &mut TypeCatalog,
    root: &Path,
    options: &CatalogOptions,
) -> Result<usize> {
    if !root.is_dir() {
        return Err(DocsearchError::Config(format!(
            "Source root is not a directory: {}",
            root.display()
        )));
    }

    let files = walk::discover_files(root, &options.include, &options.exclude)?;

    let progress = if !options.quiet && !files.is_empty() {
        let pb = indicatif::ProgressBar::new(files.len() as u64);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} sources ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    // Each worker builds its own parser
    let parsed: Vec<(PathBuf, DeclaredTypes)> = files
        .par_iter()
        .filter_map(|file_path| {
            let source = match std::fs::read(file_path) {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", file_path.display(), e);
                    return None;
                }
            };
            let declared = JavaFrontend::new().declared_types(&source);

            if let Some(ref pb) = progress {
                pb.inc(1);
            }

            Some((file_path.clone(), declared))
        })
        .collect();

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let mut added = 0usize;
    for (file_path, declared) in parsed {
        let package = declared.package.unwrap_or_default();
        for nested in declared.types {
            let info = TypeInfo::new(
                package.clone(),
                nested,
                TypeOrigin::Project(file_path.clone()),
            );
            if catalog.insert(info) {
                added += 1;
            }
        }
    }

    Ok(added)
}
