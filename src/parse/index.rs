use crate::parse::common::{is_import_path, DeclarationKind, ImportDeclaration};
use serde::Serialize;

/// Imports visible to a single compilation unit, split by kind.
///
/// Built fresh from the current text for every lookup and never cached;
/// both lists keep source order so the first declaration is tried first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportIndex {
    pub exact: Vec<ImportDeclaration>,
    pub wildcard: Vec<ImportDeclaration>,
}

impl ImportIndex {
    /// Index seeded only with the implicit root wildcard.
    pub fn with_implicit_root(implicit_root: &str) -> Self {
        Self {
            exact: Vec::new(),
            wildcard: vec![ImportDeclaration::package_wildcard(
                implicit_root,
                DeclarationKind::ImplicitRoot,
                None,
            )],
        }
    }

    pub fn push(&mut self, decl: ImportDeclaration) {
        if decl.is_wildcard {
            self.wildcard.push(decl);
        } else {
            self.exact.push(decl);
        }
    }

    /// Declared package, if the source had a `package` statement.
    pub fn package(&self) -> Option<&str> {
        self.wildcard
            .iter()
            .find(|d| d.kind == DeclarationKind::Package)
            .and_then(|d| d.path.strip_suffix(".*"))
    }

    pub fn len(&self) -> usize {
        self.exact.len() + self.wildcard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the import index for `source`.
///
/// Declarations are read statement by statement until the first statement
/// that is neither a declaration nor pure whitespace/comments; anything
/// after that point is ignored.
pub fn build_index(source: &str, implicit_root: &str) -> ImportIndex {
    let mut index = ImportIndex::with_implicit_root(implicit_root);

    for statement in HeaderStatements::new(source) {
        let Some((kind, body)) = classify(statement.text) else {
            tracing::trace!(line = statement.line, "header scan stopped at first code");
            break;
        };

        let path: String = body.chars().filter(|c| !c.is_whitespace()).collect();
        if !is_import_path(&path) {
            tracing::debug!(line = statement.line, path = %path, "skipping malformed declaration");
            continue;
        }

        let decl = match kind {
            DeclarationKind::Package => {
                ImportDeclaration::package_wildcard(&path, kind, Some(statement.line))
            }
            _ => ImportDeclaration::new(path, kind, Some(statement.line)),
        };
        index.push(decl);
    }

    index
}

/// Split a statement into its declaration kind and the text after the keywords.
/// Returns `None` when the statement is not a declaration.
fn classify(statement: &str) -> Option<(DeclarationKind, &str)> {
    if let Some(rest) = strip_keyword(statement, "import") {
        return match strip_keyword(rest.trim_start(), "static") {
            Some(rest) => Some((DeclarationKind::StaticImport, rest)),
            None => Some((DeclarationKind::Import, rest)),
        };
    }
    strip_keyword(statement, "package").map(|rest| (DeclarationKind::Package, rest))
}

fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(keyword)?;
    (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest)
}

/// A `;`-terminated statement with leading comments and whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Statement<'a> {
    text: &'a str,
    line: usize,
}

/// Iterator over the statements of a source header.
///
/// Comments are skipped as whole tokens, so a `;` inside a comment never
/// splits a statement. The final statement may lack its terminator.
struct HeaderStatements<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> HeaderStatements<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
        }
    }

    fn advance_to(&mut self, pos: usize) {
        self.line += self.source[self.pos..pos].matches('\n').count();
        self.pos = pos;
    }

    /// Move past whitespace, `//` comments and `/* */` comments.
    fn skip_trivia(&mut self) {
        loop {
            let rest = &self.source[self.pos..];
            let trimmed = rest.trim_start();
            let mut next = self.pos + (rest.len() - trimmed.len());

            if let Some(after) = trimmed.strip_prefix("//") {
                next += 2 + after.find('\n').map_or(after.len(), |i| i + 1);
            } else if let Some(after) = trimmed.strip_prefix("/*") {
                next += 2 + after.find("*/").map_or(after.len(), |i| i + 2);
            } else {
                self.advance_to(next);
                return;
            }
            self.advance_to(next);
        }
    }
}

impl<'a> Iterator for HeaderStatements<'a> {
    type Item = Statement<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_trivia();
        if self.pos >= self.source.len() {
            return None;
        }

        let start = self.pos;
        let line = self.line;
        let rest = &self.source[start..];
        let (text, consumed) = match rest.find(';') {
            Some(i) => (&rest[..i], i + 1),
            None => (rest, rest.len()),
        };
        self.advance_to(start + consumed);

        Some(Statement {
            text: text.trim_end(),
            line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::common::DEFAULT_IMPLICIT_ROOT;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn paths(decls: &[ImportDeclaration]) -> Vec<&str> {
        decls.iter().map(|d| d.path.as_str()).collect()
    }

    fn index(source: &str) -> ImportIndex {
        build_index(source, DEFAULT_IMPLICIT_ROOT)
    }

    #[test]
    fn empty_source_has_only_implicit_root() {
        let idx = index("");
        assert!(idx.exact.is_empty());
        assert_eq!(paths(&idx.wildcard), vec!["java.lang.*"]);
        assert_eq!(idx.wildcard[0].kind, DeclarationKind::ImplicitRoot);
    }

    #[test]
    fn exact_and_wildcard_imports() {
        let idx = index("import a.b.C;\nimport a.b.*;\n");
        assert_eq!(paths(&idx.exact), vec!["a.b.C"]);
        assert_eq!(paths(&idx.wildcard), vec!["java.lang.*", "a.b.*"]);
        assert_eq!(idx.exact[0].line, Some(1));
        assert_eq!(idx.wildcard[1].line, Some(2));
    }

    #[test]
    fn package_becomes_wildcard() {
        let idx = index("package a.b;\n\nclass X {}");
        assert_eq!(paths(&idx.wildcard), vec!["java.lang.*", "a.b.*"]);
        assert_eq!(idx.wildcard[1].kind, DeclarationKind::Package);
        assert_eq!(idx.package(), Some("a.b"));
    }

    #[test]
    fn internal_whitespace_is_collapsed() {
        let idx = index("import java.util.       List;\nimport java .\n  io . *;");
        assert_eq!(paths(&idx.exact), vec!["java.util.List"]);
        assert_eq!(paths(&idx.wildcard), vec!["java.lang.*", "java.io.*"]);
    }

    #[test]
    fn comments_before_and_between_declarations() {
        let source = "/* License; all rights reserved */\n\
                      // header; with semicolon\n\
                      package p;\n\
                      /** docs */ import a.b.C; // trailing; comment\n\
                      import d.e.*;\n";
        let idx = index(source);
        assert_eq!(paths(&idx.exact), vec!["a.b.C"]);
        assert_eq!(paths(&idx.wildcard), vec!["java.lang.*", "p.*", "d.e.*"]);
        assert_eq!(idx.exact[0].line, Some(4));
    }

    #[test]
    fn static_imports_are_tagged() {
        let idx = index("import static org.junit.Assert.*;\nimport static java.lang.Math.max;");
        assert_eq!(idx.wildcard[1].kind, DeclarationKind::StaticImport);
        assert_eq!(idx.wildcard[1].path, "org.junit.Assert.*");
        assert_eq!(idx.exact[0].path, "java.lang.Math.max");
    }

    #[test]
    fn scan_stops_at_first_code() {
        let source = "import a.b.C;\npublic class X {\n  String s = \"x\";\n}\nimport d.e.F;";
        let idx = index(source);
        assert_eq!(paths(&idx.exact), vec!["a.b.C"]);
        assert_eq!(idx.wildcard.len(), 1);
    }

    #[test]
    fn identifiers_starting_with_keyword_are_code() {
        let idx = index("imports.clear();\nimport a.b.C;");
        assert!(idx.exact.is_empty());
    }

    #[test]
    fn malformed_declaration_is_skipped_not_fatal() {
        let idx = index("import ;\nimport a..b;\nimport x.Y;");
        assert_eq!(paths(&idx.exact), vec!["x.Y"]);
    }

    #[test]
    fn unterminated_final_declaration_is_kept() {
        let idx = index("import a.b.C;\nimport d.e.F");
        assert_eq!(paths(&idx.exact), vec!["a.b.C", "d.e.F"]);
    }

    #[test]
    fn custom_implicit_root() {
        let idx = build_index("", "kotlin");
        assert_eq!(paths(&idx.wildcard), vec!["kotlin.*"]);
    }

    fn segment() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,6}"
    }

    fn type_name() -> impl Strategy<Value = String> {
        "[A-Z][A-Za-z0-9]{0,8}"
    }

    proptest! {
        #[test]
        fn code_without_declarations_has_only_root(body in "[a-zA-Z0-9 (){}=+\n]{0,80}") {
            let source = format!("class Foo {{ {body} }}");
            let idx = index(&source);
            prop_assert!(idx.exact.is_empty());
            prop_assert_eq!(idx.wildcard.len(), 1);
        }

        #[test]
        fn exact_imports_keep_path_and_order(
            decls in prop::collection::vec((prop::collection::vec(segment(), 1..4), type_name()), 1..8)
        ) {
            let expected: Vec<String> = decls
                .iter()
                .map(|(pkg, name)| format!("{}.{}", pkg.join("."), name))
                .collect();
            let source: String = expected.iter().map(|p| format!("import {p};\n")).collect();
            let idx = index(&source);
            prop_assert_eq!(paths(&idx.exact), expected.iter().map(String::as_str).collect::<Vec<_>>());
            prop_assert_eq!(idx.wildcard.len(), 1);
        }

        #[test]
        fn wildcard_imports_are_classified_wildcard(pkg in prop::collection::vec(segment(), 1..5)) {
            let path = format!("{}.*", pkg.join("."));
            let idx = index(&format!("import {path};"));
            prop_assert!(idx.exact.is_empty());
            prop_assert_eq!(idx.wildcard[1].path.as_str(), path.as_str());
        }

        #[test]
        fn declarations_after_code_are_ignored(pkg in prop::collection::vec(segment(), 1..4), name in type_name()) {
            let source = format!("int x = 1;\nimport {}.{};", pkg.join("."), name);
            let idx = index(&source);
            prop_assert!(idx.exact.is_empty());
        }
    }
}
