//! Caret-driven selection expansion.
//!
//! All functions take the full buffer text and a byte offset and return a
//! [`Selection`]. Nothing under the caret is not an error: the result is an
//! empty selection at the caret.

use crate::editor::buffer::Selection;
use crate::parse::common::is_identifier_char;

/// The caret's line without its terminator, trimmed on both ends.
pub fn select_line(text: &str, offset: usize) -> Selection {
    let offset = offset.min(text.len());
    let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[offset..].find('\n').map_or(text.len(), |i| offset + i);
    let line = &text[line_start..line_end];

    let trimmed_start = line.trim_start();
    if trimmed_start.is_empty() {
        return Selection::empty(offset);
    }
    let start = line_start + (line.len() - trimmed_start.len());
    let end = start + trimmed_start.trim_end().len();
    Selection::new(start, end)
}

/// The identifier touching the caret, on either side.
pub fn select_word(text: &str, offset: usize) -> Selection {
    let offset = offset.min(text.len());
    let start = word_start(text, offset);
    let end = offset
        + text[offset..]
            .char_indices()
            .find(|&(_, c)| !is_identifier_char(c))
            .map_or(text.len() - offset, |(i, _)| i);
    if start == end {
        Selection::empty(offset)
    } else {
        Selection::new(start, end)
    }
}

/// The word under the caret, widened to the left across `.`-separated
/// segments, e.g. `java.util.List` for a caret on `List`. Whitespace
/// around the dots is allowed and kept in the selection.
pub fn select_qualified_name(text: &str, offset: usize) -> Selection {
    let word = select_word(text, offset);
    if word.is_empty() {
        return word;
    }

    let mut start = word.start;
    loop {
        let before = text[..start].trim_end();
        let Some(before_dot) = before.strip_suffix('.') else {
            break;
        };
        let segment_end = before_dot.trim_end().len();
        let segment_start = word_start(text, segment_end);
        if segment_start == segment_end {
            break;
        }
        start = segment_start;
    }

    Selection::new(start, word.end)
}

fn word_start(text: &str, offset: usize) -> usize {
    text[..offset]
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_identifier_char(c))
        .last()
        .map_or(offset, |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(text: &str, sel: Selection) -> &str {
        sel.text(text)
    }

    #[test]
    fn line_is_trimmed() {
        let text = "class A {\n    foo();   \n}";
        let sel = select_line(text, 14);
        assert_eq!(selected(text, sel), "foo();");
    }

    #[test]
    fn blank_line_yields_empty_selection() {
        let text = "a\n    \nb";
        let sel = select_line(text, 4);
        assert!(sel.is_empty());
        assert_eq!(sel.start, 4);

        let sel = select_line("", 0);
        assert!(sel.is_empty());
    }

    #[test]
    fn line_at_end_of_buffer() {
        let text = "first\n  last";
        assert_eq!(selected(text, select_line(text, text.len())), "last");
    }

    #[test]
    fn word_around_caret() {
        let text = "List<String> names";
        assert_eq!(selected(text, select_word(text, 2)), "List");
        assert_eq!(selected(text, select_word(text, 4)), "List");
        assert_eq!(selected(text, select_word(text, 5)), "String");
        assert_eq!(selected(text, select_word(text, text.len())), "names");
    }

    #[test]
    fn word_outside_identifier_is_empty() {
        let text = "a + b";
        assert!(select_word(text, 2).is_empty());
    }

    #[test]
    fn qualified_name_extends_left() {
        let text = "java.util.List<String> xs;";
        assert_eq!(selected(text, select_qualified_name(text, 11)), "java.util.List");
    }

    #[test]
    fn qualified_name_across_whitespace() {
        let text = "x = java.util.\n    List.of();";
        let caret = text.find("List").unwrap() + 1;
        assert_eq!(
            selected(text, select_qualified_name(text, caret)),
            "java.util.\n    List"
        );
    }

    #[test]
    fn qualified_name_stops_at_call() {
        let text = "foo().List";
        assert_eq!(selected(text, select_qualified_name(text, 7)), "List");
    }

    #[test]
    fn qualified_name_does_not_over_select() {
        let text = "(java.util.List) o";
        assert_eq!(selected(text, select_qualified_name(text, 12)), "java.util.List");
    }

    #[test]
    fn simple_name_is_unchanged() {
        let text = "  String s;";
        assert_eq!(selected(text, select_qualified_name(text, 4)), "String");
    }
}
