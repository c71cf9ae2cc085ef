//! Line-split view over one side's file content
//!
//! A `RawText` keeps the original bytes and records where every line starts
//! and ends, terminator included. Lines are compared with their terminator so
//! that a final line gaining or losing its newline counts as a change. The
//! delimiter itself is recorded once, taken from the first line of the
//! content:
//!
//! - `"\r\n"` if the first line ends with CR LF
//! - `"\n"` if it ends with a bare LF
//! - nothing if the content has no LF at all
//!
//! A final line that is not followed by LF sets `missing_trailing_newline`,
//! which later decides whether `\ No newline at end of file` is emitted.

use bytes::Bytes;
use std::ops::Range;

const LF: u8 = b'\n';
const CR: u8 = b'\r';

/// Immutable, delimiter-aware sequence of lines
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawText {
    content: Bytes,
    lines: Vec<Range<usize>>,
    line_delimiter: Option<&'static str>,
    missing_trailing_newline: bool,
}

impl RawText {
    pub fn new(content: impl Into<Bytes>) -> Self {
        let content = content.into();
        let line_delimiter = Self::detect_delimiter(&content);

        let mut lines = Vec::new();
        let mut start = 0;
        for (pos, byte) in content.iter().enumerate() {
            if *byte == LF {
                lines.push(start..pos + 1);
                start = pos + 1;
            }
        }

        if start < content.len() {
            lines.push(start..content.len());
        }

        let missing_trailing_newline = content.last().is_some_and(|byte| *byte != LF);

        RawText {
            content,
            lines,
            line_delimiter,
            missing_trailing_newline,
        }
    }

    /// The text of a missing file: no lines and no delimiter
    pub fn empty() -> Self {
        Self::default()
    }

    fn detect_delimiter(content: &[u8]) -> Option<&'static str> {
        let lf = content.iter().position(|byte| *byte == LF)?;

        if lf > 0 && content[lf - 1] == CR {
            Some("\r\n")
        } else {
            Some("\n")
        }
    }

    pub fn size(&self) -> usize {
        self.lines.len()
    }

    pub fn line_delimiter(&self) -> Option<&'static str> {
        self.line_delimiter
    }

    pub fn is_missing_trailing_newline(&self) -> bool {
        self.missing_trailing_newline
    }

    /// Raw bytes of line `index`, terminator included
    pub fn raw_line(&self, index: usize) -> &[u8] {
        &self.content[self.lines[index].clone()]
    }

    /// Line `index` as it appears in a hunk, byte for byte: its own
    /// terminator is kept, and the last line of a file without a trailing
    /// newline has none.
    pub fn rendered_line(&self, index: usize) -> Bytes {
        self.content.slice(self.lines[index].clone())
    }

    /// All lines with their terminators, the unit the edit list is computed over
    pub fn line_slices(&self) -> Vec<&[u8]> {
        (0..self.size()).map(|index| self.raw_line(index)).collect()
    }
}

impl From<&str> for RawText {
    fn from(value: &str) -> Self {
        RawText::new(Bytes::copy_from_slice(value.as_bytes()))
    }
}
