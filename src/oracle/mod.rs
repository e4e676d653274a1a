pub mod builtin;
pub mod class_list;
pub mod project;

use crate::errors::Result;
use crate::parse::common::is_java_identifier;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Answers whether a fully-qualified name denotes a real type.
///
/// A miss is `None`, never an error: callers try the next candidate.
pub trait TypeOracle {
    fn confirm(&self, name: &str) -> Option<TypeInfo>;
}

/// A confirmed type, split into package and (possibly nested) class path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeInfo {
    /// `java.util` for `java.util.Map.Entry`; empty for the default package
    pub package: String,
    /// `Map.Entry` for `java.util.Map.Entry`
    pub nested_path: String,
    pub origin: TypeOrigin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum TypeOrigin {
    Builtin,
    ClassList(PathBuf),
    Project(PathBuf),
}

impl std::fmt::Display for TypeOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeOrigin::Builtin => write!(f, "builtin"),
            TypeOrigin::ClassList(path) => write!(f, "class list ({})", path.display()),
            TypeOrigin::Project(path) => write!(f, "project ({})", path.display()),
        }
    }
}

impl TypeInfo {
    pub fn new(
        package: impl Into<String>,
        nested_path: impl Into<String>,
        origin: TypeOrigin,
    ) -> Self {
        Self {
            package: package.into(),
            nested_path: nested_path.into(),
            origin,
        }
    }

    /// Parse a binary (`java.util.Map$Entry`) or canonical
    /// (`java.util.Map.Entry`) class name.
    ///
    /// Without a `$`, the package ends before the first segment that starts
    /// with an uppercase letter. Anonymous and local classes (`Foo$1`,
    /// `Foo$1Local`) are rejected.
    pub fn parse(name: &str, origin: TypeOrigin) -> Option<Self> {
        let segments: Vec<&str> = name.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return None;
        }

        let (package, nested) = if name.contains('$') {
            let (class, package) = segments.split_last()?;
            let parts: Vec<&str> = class.split('$').collect();
            if !parts.iter().all(|p| is_java_identifier(p)) {
                return None;
            }
            (package.join("."), parts.join("."))
        } else {
            let split = segments
                .iter()
                .position(|s| s.starts_with(char::is_uppercase))
                .unwrap_or(segments.len() - 1);
            (segments[..split].join("."), segments[split..].join("."))
        };

        if !segments[..segments.len() - 1]
            .iter()
            .all(|s| is_java_identifier(s))
            || !nested.split('.').all(is_java_identifier)
        {
            return None;
        }

        Some(Self::new(package, nested, origin))
    }

    /// Dotted name as written in source: `java.util.Map.Entry`.
    pub fn canonical_name(&self) -> String {
        if self.package.is_empty() {
            self.nested_path.clone()
        } else {
            format!("{}.{}", self.package, self.nested_path)
        }
    }

    /// Name with nested classes joined by `$`: `java.util.Map$Entry`.
    pub fn binary_name(&self) -> String {
        let nested = self.nested_path.replace('.', "$");
        if self.package.is_empty() {
            nested
        } else {
            format!("{}.{}", self.package, nested)
        }
    }
}

/// Where the catalog should look for types.
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    pub builtin: bool,
    pub class_lists: Vec<PathBuf>,
    pub source_roots: Vec<PathBuf>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub quiet: bool,
}

/// In-memory set of known types, addressable by binary or canonical name.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    by_name: HashMap<String, TypeInfo>,
    types: usize,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog containing only the bundled JDK names.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for name in builtin::BUILTIN_TYPES {
            if let Some(info) = TypeInfo::parse(name, TypeOrigin::Builtin) {
                catalog.insert(info);
            }
        }
        catalog
    }

    /// Build a catalog from every source enabled in `options`.
    /// Earlier sources win when two declare the same name.
    pub fn load(options: &CatalogOptions) -> Result<Self> {
        let mut catalog = if options.builtin {
            Self::builtin()
        } else {
            Self::new()
        };

        for path in &options.class_lists {
            let added = class_list::load_class_list(&mut catalog, path)?;
            tracing::info!("loaded {added} types from {}", path.display());
        }

        for root in &options.source_roots {
            let added = project::scan_source_root(&mut catalog, root, options)?;
            tracing::info!("indexed {added} project types under {}", root.display());
        }

        Ok(catalog)
    }

    /// Add a type. Returns false if its canonical name was already known.
    pub fn insert(&mut self, info: TypeInfo) -> bool {
        let canonical = info.canonical_name();
        if self.by_name.contains_key(&canonical) {
            return false;
        }
        let binary = info.binary_name();
        if binary != canonical {
            self.by_name.entry(binary).or_insert_with(|| info.clone());
        }
        self.by_name.insert(canonical, info);
        self.types += 1;
        true
    }

    /// Number of distinct types.
    pub fn len(&self) -> usize {
        self.types
    }

    pub fn is_empty(&self) -> bool {
        self.types == 0
    }
}

impl TypeOracle for TypeCatalog {
    fn confirm(&self, name: &str) -> Option<TypeInfo> {
        self.by_name.get(name).cloned()
    }
}
