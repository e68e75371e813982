//! Source positions, spans, and the snippet extractor.
//!
//! Lines and columns are 1-based throughout this module, matching the
//! public contract of `snippet()`. Internally we still need 0-based
//! offsets to index into `Vec<&str>`, so the conversion happens once,
//! here, rather than being repeated at every call site.

use std::fmt;

/// A single position in source text (1-based line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A region of source text, 1-based and end-inclusive in the same sense
/// Python's `ast` module reports `end_lineno`/`end_col_offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn from_coords(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Every graph node carries one of these: a physical span, or an
/// explicit marker that none exists. Never silently absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    Physical(Span),
    #[default]
    NoLocation,
}

impl Location {
    pub fn span(&self) -> Option<Span> {
        match self {
            Location::Physical(span) => Some(*span),
            Location::NoLocation => None,
        }
    }
}

/// Splits source text on line terminators and answers `snippet()` queries.
///
/// Immutable once constructed: one pass of `splitlines()` up front,
/// slicing afterward. Also keeps
/// the byte offset of every line start, so the oracle's `TextRange`
/// (byte-offset) spans can be converted to the 1-based line/column
/// positions the rest of the crate works in.
#[derive(Debug, Clone)]
pub struct SourceMap {
    lines: Vec<String>,
    line_starts: Vec<u32>,
}

impl SourceMap {
    pub fn new(content: &str) -> Self {
        let lines = content.lines().map(str::to_owned).collect();
        let mut line_starts = vec![0u32];
        for (i, b) in content.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self { lines, line_starts }
    }

    /// Converts a byte offset (as produced by `rustpython-parser`'s
    /// `TextRange`) into a 1-based line/char-column `Position`.
    pub fn position_for_offset(&self, offset: u32) -> Position {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line_start = self.line_starts[line_idx];
        let line_text = self.lines.get(line_idx).map(String::as_str).unwrap_or("");
        let byte_col = (offset.saturating_sub(line_start) as usize).min(line_text.len());
        let column = line_text
            .get(..byte_col)
            .map(|s| s.chars().count())
            .unwrap_or_else(|| line_text.chars().count()) as u32;
        Position::new((line_idx + 1) as u32, column)
    }

    /// Converts a `text_size::TextRange` into a `Span` of 1-based
    /// line/column positions.
    pub fn span_for_range(&self, range: text_size::TextRange) -> Span {
        Span::new(
            self.position_for_offset(range.start().into()),
            self.position_for_offset(range.end().into()),
        )
    }

    fn line(&self, one_based: u32) -> &str {
        self.lines
            .get((one_based as usize).saturating_sub(1))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Returns the exact text slice for `span`, 1-based inclusive lines
    /// and 0-based-from-`col` character offsets within each line (mirrors
    /// Python's `col_offset`/`end_col_offset`, which are character counts,
    /// not line positions).
    ///
    /// Multiline spans concatenate with `\n`; the first line keeps only
    /// its tail (from `start.column`), the last line keeps only its head
    /// (up to `end.column`), and interior lines are taken whole.
    pub fn snippet(&self, span: Span) -> String {
        let start = span.start;
        let end = span.end;

        if start.line == end.line {
            let line = self.line(start.line);
            let s = char_slice(line, start.column as usize, end.column as usize);
            return s.to_string();
        }

        let mut out = Vec::with_capacity((end.line - start.line + 1) as usize);
        let first = self.line(start.line);
        out.push(char_slice(first, start.column as usize, char_len(first)).to_string());

        for lineno in (start.line + 1)..end.line {
            out.push(self.line(lineno).to_string());
        }

        let last = self.line(end.line);
        out.push(char_slice(last, 0, end.column as usize).to_string());

        out.join("\n")
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Slices `s` by character index (not byte index), clamping out-of-range
/// bounds instead of panicking — source positions from the oracle should
/// always be in range, but a lenient frontend never panics on them.
fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let char_indices: Vec<usize> = s
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .collect();
    let start = start.min(char_indices.len().saturating_sub(1));
    let end = end.min(char_indices.len().saturating_sub(1));
    let (start, end) = if start <= end { (start, end) } else { (end, end) };
    &s[char_indices[start]..char_indices[end]]
}
