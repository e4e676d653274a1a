use crate::errors::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Extension of the source files we index.
pub const JAVA_EXTENSION: &str = "java";

/// Discover Java source files under `root`.
///
/// - Respects `.gitignore`
/// - Applies include/exclude glob patterns (relative to `root` or absolute)
/// - Returns sorted paths for deterministic output
pub fn discover_files(
    root: &Path,
    include_patterns: &[String],
    exclude_patterns: &[String],
) -> Result<Vec<PathBuf>> {
    let exclude_set = build_globset(exclude_patterns)?;
    let include_set = if include_patterns.is_empty() {
        None
    } else {
        Some(build_globset(include_patterns)?)
    };

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .build();

    let mut files = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("walk error under {}: {e}", root.display());
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_java = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ext == JAVA_EXTENSION);
        if !is_java {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);

        if exclude_set.is_match(relative) || exclude_set.is_match(path) {
            continue;
        }

        if let Some(ref include) = include_set {
            if !include.is_match(relative) && !include.is_match(path) {
                continue;
            }
        }

        files.push(path.to_path_buf());
    }

    files.sort();

    Ok(files)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}
