use serde::Serialize;

/// Package whose members every compilation unit sees without an import.
pub const DEFAULT_IMPLICIT_ROOT: &str = "java.lang";

/// One import-like declaration, normalized to a dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportDeclaration {
    /// Dotted path, ending in `.*` for wildcard entries
    pub path: String,
    /// True for on-demand imports and the synthetic package/root entries
    pub is_wildcard: bool,
    /// Where the declaration came from
    pub kind: DeclarationKind,
    /// Line of the declaration keyword (1-indexed); `None` for the implicit root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    /// `import a.b.C;` / `import a.b.*;`
    Import,
    /// `import static a.b.C.m;` / `import static a.b.C.*;`
    StaticImport,
    /// `package a.b;`, turned into `a.b.*`
    Package,
    /// The always-visible root namespace
    ImplicitRoot,
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeclarationKind::Import => write!(f, "import"),
            DeclarationKind::StaticImport => write!(f, "import static"),
            DeclarationKind::Package => write!(f, "package"),
            DeclarationKind::ImplicitRoot => write!(f, "implicit"),
        }
    }
}

impl ImportDeclaration {
    pub fn new(path: impl Into<String>, kind: DeclarationKind, line: Option<usize>) -> Self {
        let path = path.into();
        let is_wildcard = path.ends_with(".*");
        Self {
            path,
            is_wildcard,
            kind,
            line,
        }
    }

    /// Wildcard entry for everything declared in `package`.
    pub fn package_wildcard(package: &str, kind: DeclarationKind, line: Option<usize>) -> Self {
        Self::new(format!("{package}.*"), kind, line)
    }

    /// Final dotted segment (`C` for `a.b.C`, `*` for `a.b.*`).
    pub fn last_segment(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }

    /// The path with its trailing `*` removed (`a.b.` for `a.b.*`).
    /// Returns `None` for exact entries.
    pub fn wildcard_prefix(&self) -> Option<&str> {
        if self.is_wildcard {
            self.path.strip_suffix('*')
        } else {
            None
        }
    }
}

/// True if `s` is a Java identifier (`$` and `_` allowed, no leading digit).
pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(is_identifier_char)
}

pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// True if `path` is a dotted name whose segments are all identifiers,
/// optionally ending in a `*` segment.
pub fn is_import_path(path: &str) -> bool {
    let body = path.strip_suffix(".*").unwrap_or(path);
    !body.is_empty() && body.split('.').all(is_java_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_follows_trailing_star() {
        let exact = ImportDeclaration::new("a.b.C", DeclarationKind::Import, Some(1));
        assert!(!exact.is_wildcard);
        assert_eq!(exact.last_segment(), "C");
        assert_eq!(exact.wildcard_prefix(), None);

        let wild = ImportDeclaration::new("a.b.*", DeclarationKind::Import, Some(2));
        assert!(wild.is_wildcard);
        assert_eq!(wild.wildcard_prefix(), Some("a.b."));
    }

    #[test]
    fn package_wildcard_appends_star() {
        let decl = ImportDeclaration::package_wildcard("p.q", DeclarationKind::Package, Some(1));
        assert_eq!(decl.path, "p.q.*");
        assert!(decl.is_wildcard);
    }

    #[test]
    fn identifiers() {
        assert!(is_java_identifier("List"));
        assert!(is_java_identifier("_x$1"));
        assert!(!is_java_identifier("1abc"));
        assert!(!is_java_identifier(""));
        assert!(!is_java_identifier("a-b"));
    }

    #[test]
    fn import_paths() {
        assert!(is_import_path("java.util.List"));
        assert!(is_import_path("java.util.*"));
        assert!(is_import_path("Foo"));
        assert!(!is_import_path("*"));
        assert!(!is_import_path("java..util"));
        assert!(!is_import_path("java.util.*.List"));
        assert!(!is_import_path(""));
    }
}
