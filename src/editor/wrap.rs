use crate::editor::buffer::{Buffer, Selection};
use crate::editor::selection::select_line;
use serde::Serialize;
use std::collections::HashSet;

pub const STATEMENT_TERMINATOR: char = ';';

/// Literal text placed around a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrapTemplate {
    pub prefix: String,
    pub suffix: String,
}

impl WrapTemplate {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// `System.out.println(...);`
    pub fn sout() -> Self {
        Self::new("System.out.println(", ");")
    }

    /// `Integer.parseInt(...)`
    pub fn parse_int() -> Self {
        Self::new("Integer.parseInt(", ")")
    }

    /// Templates available without configuration.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "sout" => Some(Self::sout()),
            "parse-int" | "parse_int" => Some(Self::parse_int()),
            _ => None,
        }
    }
}

/// Wrap `text` with the template. A trailing statement terminator is
/// dropped first so `foo();` and `foo()` wrap the same way.
pub fn wrap_text(text: &str, template: &WrapTemplate) -> String {
    let trimmed = text.trim();
    let body = trimmed
        .strip_suffix(STATEMENT_TERMINATOR)
        .map_or(trimmed, str::trim_end);
    format!("{}{}{}", template.prefix, body, template.suffix)
}

/// What a wrap applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapTarget {
    /// Expand to the caret's trimmed line; one edit per line
    Line(usize),
    /// Wrap exactly this range
    Range(Selection),
}

/// One replacement, in original-buffer offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrapEdit {
    pub range: Selection,
    pub original: String,
    pub replacement: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapOutcome {
    pub text: String,
    pub edits: Vec<WrapEdit>,
}

/// Plan the edits for `targets` without touching the buffer.
///
/// Empty selections (blank lines, empty ranges) are skipped, as are
/// carets on a line that already has one and ranges overlapping an
/// earlier edit.
pub fn plan_wraps(buffer: &Buffer, targets: &[WrapTarget], template: &WrapTemplate) -> Vec<WrapEdit> {
    let text = buffer.text();
    let mut lines_seen = HashSet::new();
    let mut edits: Vec<WrapEdit> = Vec::new();

    for target in targets {
        let range = match *target {
            WrapTarget::Line(offset) => {
                if !lines_seen.insert(buffer.line_of(offset)) {
                    continue;
                }
                select_line(text, offset)
            }
            WrapTarget::Range(selection) => selection,
        };

        if range.is_empty() {
            tracing::debug!(start = range.start, "nothing selected, skipping wrap");
            continue;
        }
        if edits.iter().any(|e| e.range.overlaps(&range)) {
            tracing::warn!(
                "skipping wrap at {}: overlaps an earlier edit",
                buffer.position_of(range.start)
            );
            continue;
        }

        let original = range.text(text).to_string();
        edits.push(WrapEdit {
            range,
            replacement: wrap_text(&original, template),
            original,
        });
    }

    edits
}

/// Apply every wrap to a copy of the buffer, last offset first so earlier
/// offsets stay valid.
pub fn apply_wraps(buffer: &Buffer, targets: &[WrapTarget], template: &WrapTemplate) -> WrapOutcome {
    let edits = plan_wraps(buffer, targets, template);

    let mut ordered: Vec<&WrapEdit> = edits.iter().collect();
    ordered.sort_by(|a, b| b.range.start.cmp(&a.range.start));

    let mut edited = buffer.clone();
    for edit in ordered {
        edited.replace(edit.range, &edit.replacement);
    }

    WrapOutcome {
        text: edited.into_text(),
        edits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wrap_plain_and_terminated() {
        assert_eq!(
            wrap_text("foo()", &WrapTemplate::sout()),
            "System.out.println(foo());"
        );
        assert_eq!(
            wrap_text("foo();", &WrapTemplate::sout()),
            "System.out.println(foo());"
        );
        assert_eq!(
            wrap_text("  s ;  ", &WrapTemplate::parse_int()),
            "Integer.parseInt(s)"
        );
    }

    #[test]
    fn builtin_templates() {
        assert_eq!(WrapTemplate::builtin("sout"), Some(WrapTemplate::sout()));
        assert_eq!(
            WrapTemplate::builtin("parse-int"),
            Some(WrapTemplate::parse_int())
        );
        assert_eq!(WrapTemplate::builtin("nope"), None);
    }

    #[test]
    fn line_mode_wraps_each_line_once() {
        let buffer = Buffer::new("void f() {\n    a();\n    b()\n}\n");
        let a = buffer.text().find("a()").unwrap();
        let b = buffer.text().find("b()").unwrap();
        let targets = [
            WrapTarget::Line(a),
            WrapTarget::Line(a + 2),
            WrapTarget::Line(b),
        ];
        let outcome = apply_wraps(&buffer, &targets, &WrapTemplate::sout());
        assert_eq!(outcome.edits.len(), 2);
        assert_eq!(
            outcome.text,
            "void f() {\n    System.out.println(a());\n    System.out.println(b());\n}\n"
        );
    }

    #[test]
    fn blank_line_is_a_no_op() {
        let buffer = Buffer::new("x();\n   \ny();");
        let outcome = apply_wraps(&buffer, &[WrapTarget::Line(6)], &WrapTemplate::sout());
        assert!(outcome.edits.is_empty());
        assert_eq!(outcome.text, buffer.text());
    }

    #[test]
    fn range_mode_wraps_exact_selection() {
        let buffer = Buffer::new("int n = args[0];");
        let start = buffer.text().find("args").unwrap();
        let range = Selection::new(start, start + "args[0]".len());
        let outcome = apply_wraps(&buffer, &[WrapTarget::Range(range)], &WrapTemplate::parse_int());
        assert_eq!(outcome.text, "int n = Integer.parseInt(args[0]);");
        assert_eq!(outcome.edits[0].original, "args[0]");
    }

    #[test]
    fn overlapping_ranges_keep_the_first() {
        let buffer = Buffer::new("abcdef");
        let targets = [
            WrapTarget::Range(Selection::new(0, 3)),
            WrapTarget::Range(Selection::new(2, 5)),
            WrapTarget::Range(Selection::new(4, 6)),
        ];
        let outcome = apply_wraps(&buffer, &targets, &WrapTemplate::new("[", "]"));
        assert_eq!(outcome.text, "[abc]d[ef]");
        assert_eq!(outcome.edits.len(), 2);
    }
}
