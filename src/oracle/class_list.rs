use crate::errors::{DocsearchError, Result};
use crate::oracle::{TypeCatalog, TypeInfo, TypeOrigin};
use std::path::Path;

/// Load a class list into `catalog`, returning how many new types it added.
///
/// Accepts one class per line as a dotted binary name, a `jar tf` path
/// (`java/util/Map$Entry.class`) or a canonical name. Blank lines and `#`
/// comments are ignored.
pub fn load_class_list(catalog: &mut TypeCatalog, path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        DocsearchError::Config(format!("Could not read class list {}: {e}", path.display()))
    })?;

    let mut added = 0usize;
    for line in content.lines() {
        let Some(name) = normalize_entry(line) else {
            continue;
        };
        match TypeInfo::parse(&name, TypeOrigin::ClassList(path.to_path_buf())) {
            Some(info) => {
                if catalog.insert(info) {
                    added += 1;
                }
            }
            None => tracing::debug!("ignoring class list entry {name:?}"),
        }
    }
    Ok(added)
}

/// Turn one class-list line into a dotted class name.
fn normalize_entry(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.ends_with('/') {
        return None;
    }

    let name = line.strip_suffix(".class").unwrap_or(line).replace('/', ".");
    let simple = name.rsplit('.').next().unwrap_or(&name);
    if simple == "module-info" || simple == "package-info" {
        return None;
    }
    Some(name)
}
