use serde::Serialize;
use std::collections::{HashMap, HashSet};
use streaming_iterator::StreamingIterator;

/// Declarations that introduce a named type.
const TYPE_DECLARATIONS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
    "annotation_type_declaration",
];

/// Bodies that may hold member types. Local classes in method bodies are
/// not addressable from other files, so method bodies are not listed.
const MEMBER_BODIES: &[&str] = &[
    "class_body",
    "interface_body",
    "enum_body",
    "enum_body_declarations",
    "annotation_type_body",
];

/// Package and type names declared by one compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredTypes {
    pub package: Option<String>,
    /// Nested paths relative to the package, e.g. `Outer.Inner`
    pub types: Vec<String>,
}

/// A type name used somewhere in a file, de-duplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeReference {
    /// Simple (`List`) or dotted (`java.util.List`) as written
    pub name: String,
    /// First line it appears on (1-indexed)
    pub line: usize,
    pub occurrences: usize,
}

/// tree-sitter frontend for Java sources.
pub struct JavaFrontend;

impl JavaFrontend {
    pub fn new() -> Self {
        Self
    }

    pub fn language(&self) -> tree_sitter::Language {
        tree_sitter_java::LANGUAGE.into()
    }

    fn parse(&self, source: &[u8]) -> Option<tree_sitter::Tree> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.language())
            .expect("failed to set Java language");
        parser.parse(source, None)
    }

    /// Extract the package declaration and every member-reachable type.
    pub fn declared_types(&self, source: &[u8]) -> DeclaredTypes {
        let Some(tree) = self.parse(source) else {
            return DeclaredTypes::default();
        };
        let root = tree.root_node();

        let mut declared = DeclaredTypes::default();
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            if child.kind() == "package_declaration" {
                declared.package = package_name(child, source);
                break;
            }
        }

        collect_types(root, source, &[], &mut declared.types);
        declared
    }

    /// Every type name referenced in `source`, in first-seen order.
    ///
    /// A qualified type (`java.util.List`) is reported once as a whole,
    /// not per segment. Declared type parameters are skipped.
    pub fn type_references(&self, source: &[u8]) -> Vec<TypeReference> {
        let Some(tree) = self.parse(source) else {
            return vec![];
        };

        let lang = self.language();
        let query = tree_sitter::Query::new(&lang, "(type_identifier) @type")
            .expect("failed to compile Java type query");

        let mut refs: Vec<TypeReference> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();
        let mut seen_nodes: HashSet<usize> = HashSet::new();

        let mut cursor = tree_sitter::QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), source);
        while let Some(m) = matches.next() {
            for capture in m.captures {
                let mut node = capture.node;
                if node.parent().is_some_and(|p| p.kind() == "type_parameter") {
                    continue;
                }
                while let Some(parent) = node.parent() {
                    if parent.kind() != "scoped_type_identifier" {
                        break;
                    }
                    node = parent;
                }
                if !seen_nodes.insert(node.id()) {
                    continue;
                }

                let name: String = node
                    .utf8_text(source)
                    .unwrap_or_default()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect();
                if name.is_empty() {
                    continue;
                }

                match by_name.get(&name) {
                    Some(&i) => refs[i].occurrences += 1,
                    None => {
                        by_name.insert(name.clone(), refs.len());
                        refs.push(TypeReference {
                            name,
                            line: node.start_position().row + 1,
                            occurrences: 1,
                        });
                    }
                }
            }
        }

        refs
    }
}

impl Default for JavaFrontend {
    fn default() -> Self {
        Self::new()
    }
}

fn package_name(node: tree_sitter::Node, source: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    let name_node = node
        .named_children(&mut cursor)
        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))?;
    let text: String = name_node
        .utf8_text(source)
        .ok()?
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    (!text.is_empty()).then_some(text)
}

fn collect_types(
    node: tree_sitter::Node,
    source: &[u8],
    enclosing: &[String],
    out: &mut Vec<String>,
) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if TYPE_DECLARATIONS.contains(&child.kind()) {
            let Some(name) = child
                .child_by_field_name("name")
                .and_then(|n| n.utf8_text(source).ok())
            else {
                continue;
            };
            let mut chain = enclosing.to_vec();
            chain.push(name.to_string());
            out.push(chain.join("."));
            if let Some(body) = child.child_by_field_name("body") {
                collect_types(body, source, &chain, out);
            }
        } else if MEMBER_BODIES.contains(&child.kind()) {
            collect_types(child, source, enclosing, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const WIDGET: &str = r#"package com.acme;

import java.util.List;

public class Widget<T> {
    private List<String> names;
    private java.util.Map<String, Integer> index;

    static class Inner {
        interface Deep {}
    }

    enum Mode {
        ON, OFF;
        class InEnum {}
    }

    void run() {
        class Local {}
    }
}

interface Helper {}
"#;

    #[test]
    fn declared_types_include_nested_members() {
        let declared = JavaFrontend::new().declared_types(WIDGET.as_bytes());
        assert_eq!(declared.package.as_deref(), Some("com.acme"));
        assert_eq!(
            declared.types,
            vec![
                "Widget",
                "Widget.Inner",
                "Widget.Inner.Deep",
                "Widget.Mode",
                "Widget.Mode.InEnum",
                "Helper",
            ]
        );
    }

    #[test]
    fn declared_types_without_package() {
        let declared = JavaFrontend::new().declared_types(b"class Main {}");
        assert_eq!(declared.package, None);
        assert_eq!(declared.types, vec!["Main"]);
    }

    #[test]
    fn type_references_are_deduplicated_and_qualified() {
        let refs = JavaFrontend::new().type_references(WIDGET.as_bytes());
        let names: Vec<&str> = refs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["List", "String", "java.util.Map", "Integer"]);

        let string = refs.iter().find(|r| r.name == "String").unwrap();
        assert_eq!(string.line, 6);
        assert_eq!(string.occurrences, 2);

        let map = refs.iter().find(|r| r.name == "java.util.Map").unwrap();
        assert_eq!(map.occurrences, 1);
        assert_eq!(map.line, 7);
    }
}
