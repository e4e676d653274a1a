use crate::errors::{DocsearchError, Result};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// A 1-based `LINE:COL` caret position; columns count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (line, column) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| format!("expected LINE:COL, got {s:?}"))?;
        let line: usize = line.parse().map_err(|_| format!("bad line in {s:?}"))?;
        let column: usize = column.parse().map_err(|_| format!("bad column in {s:?}"))?;
        if line == 0 || column == 0 {
            return Err(format!("positions are 1-based, got {s:?}"));
        }
        Ok(Self { line, column })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// `LINE:COL-LINE:COL`, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRange {
    pub start: Position,
    pub end: Position,
}

impl FromStr for PositionRange {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| format!("expected LINE:COL-LINE:COL, got {s:?}"))?;
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

/// Byte range into a buffer's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    pub fn overlaps(&self, other: &Selection) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The text being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    text: String,
}

impl Buffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read a buffer from `path`, or from stdin when `path` is `-`.
    pub fn read(path: &Path) -> Result<Self> {
        if path == Path::new("-") {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            return Ok(Self::new(text));
        }
        Ok(Self::new(std::fs::read_to_string(path)?))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    fn line_starts(&self) -> Vec<usize> {
        std::iter::once(0)
            .chain(self.text.match_indices('\n').map(|(i, _)| i + 1))
            .collect()
    }

    /// Byte offset of `pos`. Columns past the end of the line clamp to the
    /// line end; lines past the end of the buffer are an error.
    pub fn offset_of(&self, pos: Position) -> Result<usize> {
        let starts = self.line_starts();
        let invalid = || DocsearchError::InvalidPosition {
            position: pos.to_string(),
        };
        if pos.line == 0 || pos.column == 0 {
            return Err(invalid());
        }
        let start = *starts.get(pos.line - 1).ok_or_else(invalid)?;
        let end = starts
            .get(pos.line)
            .map_or(self.text.len(), |next| next - 1);
        let line = self.text[start..end].trim_end_matches('\r');

        let column = line
            .char_indices()
            .nth(pos.column - 1)
            .map_or(line.len(), |(i, _)| i);
        Ok(start + column)
    }

    /// Position of a byte offset (clamped to the buffer).
    pub fn position_of(&self, offset: usize) -> Position {
        let offset = floor_char_boundary(&self.text, offset);
        let before = &self.text[..offset];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        Position {
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }

    /// 1-based line containing `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        self.position_of(offset).line
    }

    pub fn selection_of(&self, range: PositionRange) -> Result<Selection> {
        let start = self.offset_of(range.start)?;
        let end = self.offset_of(range.end)?;
        if end < start {
            return Err(DocsearchError::InvalidPosition {
                position: format!("{}-{}", range.start, range.end),
            });
        }
        Ok(Selection::new(start, end))
    }

    pub fn replace(&mut self, selection: Selection, replacement: &str) {
        self.text
            .replace_range(selection.start..selection.end, replacement);
    }
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
