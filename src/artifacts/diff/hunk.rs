//! Hunks, their lines and the unified diff hunk header
//!
//! ## Header format
//!
//! `@@ -<old range> +<new range> @@` where a range is rendered as:
//!
//! - `<start>,<count>` in the general case (1-based start)
//! - `<start>` when exactly one line is covered
//! - `<start - 1>,0` when no line is covered, i.e. the line *after which*
//!   the change applies

use bytes::Bytes;
use derive_new::new;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineType {
    Context,
    Added,
    Removed,
}

impl LineType {
    /// Prefix character of the line in unified diff syntax
    pub fn prefix(&self) -> char {
        match self {
            LineType::Context => ' ',
            LineType::Added => '+',
            LineType::Removed => '-',
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            LineType::Context => LineType::Context,
            LineType::Added => LineType::Removed,
            LineType::Removed => LineType::Added,
        }
    }
}

/// A rendered hunk line
///
/// `text` holds the line's bytes exactly as they appear in the file, its own
/// terminator included. Only the last line of a file without a trailing
/// newline has none. Line numbers are 0-based positions in the old and new
/// texts at the moment the line was emitted.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Line {
    pub text: Bytes,
    pub old_line_number: usize,
    pub new_line_number: usize,
    pub line_type: LineType,
}

impl Line {
    pub fn has_trailing_newline(&self) -> bool {
        self.text.ends_with(b"\n")
    }

    /// Line bytes without their terminator
    pub fn content(&self) -> &[u8] {
        let text = self.text.strip_suffix(b"\n").unwrap_or(&self.text[..]);
        text.strip_suffix(b"\r").unwrap_or(text)
    }

    /// The terminator `content` leaves out, possibly empty
    pub fn ending(&self) -> &[u8] {
        &self.text[self.content().len()..]
    }

    /// Content decoded for the terminal; invalid UTF-8 is replaced
    pub fn display_content(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.content())
    }

    /// 1-based old line number, if the line exists on the old side
    pub fn display_old_line_number(&self) -> Option<usize> {
        match self.line_type {
            LineType::Added => None,
            _ => Some(self.old_line_number + 1),
        }
    }

    /// 1-based new line number, if the line exists on the new side
    pub fn display_new_line_number(&self) -> Option<usize> {
        match self.line_type {
            LineType::Removed => None,
            _ => Some(self.new_line_number + 1),
        }
    }
}

/// Half-open, 0-based line ranges covered by a hunk on both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct HunkRange {
    pub old_start: usize,
    pub old_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl HunkRange {
    pub fn old_count(&self) -> usize {
        self.old_end - self.old_start
    }

    pub fn new_count(&self) -> usize {
        self.new_end - self.new_start
    }

    pub fn reversed(&self) -> Self {
        HunkRange::new(self.new_start, self.new_end, self.old_start, self.old_end)
    }

    pub fn header(&self) -> String {
        create_hunk_header(self.old_start, self.old_end, self.new_start, self.new_end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    header: String,
    range: HunkRange,
    lines: Vec<Line>,
}

impl Hunk {
    pub fn new(range: HunkRange, lines: Vec<Line>) -> Self {
        Hunk {
            header: range.header(),
            range,
            lines,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn range(&self) -> HunkRange {
        self.range
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn count(&self, line_type: LineType) -> usize {
        self.lines
            .iter()
            .filter(|line| line.line_type == line_type)
            .count()
    }

    /// The same hunk seen from the other side: added and removed lines swap
    /// and so do the old and new ranges.
    pub fn reversed(&self) -> Self {
        let lines = self
            .lines
            .iter()
            .map(|line| Line {
                text: line.text.clone(),
                old_line_number: line.new_line_number,
                new_line_number: line.old_line_number,
                line_type: line.line_type.reversed(),
            })
            .collect();

        Hunk::new(self.range.reversed(), lines)
    }
}

/// Formats the `@@ -a,b +c,d @@` header from 0-based, half-open ranges
pub fn create_hunk_header(
    old_start: usize,
    old_end: usize,
    new_start: usize,
    new_end: usize,
) -> String {
    let content_removed = create_range('-', old_start + 1, old_end - old_start);
    let content_added = create_range('+', new_start + 1, new_end - new_start);

    format!("@@{content_removed}{content_added} @@")
}

fn create_range(symbol: char, begin: usize, lines_count: usize) -> String {
    match lines_count {
        0 => format!(" {symbol}{},0", begin - 1),
        1 => format!(" {symbol}{begin}"),
        _ => format!(" {symbol}{begin},{lines_count}"),
    }
}
