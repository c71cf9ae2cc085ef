use crate::artifacts::diff::raw_text::RawText;
use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempPath;

/// Temporary copy of an image side, removed from disk once the last handle
/// to it is dropped
#[derive(Debug, Clone)]
pub struct ImagePreview(Arc<TempPath>);

impl ImagePreview {
    pub fn new(path: TempPath) -> Self {
        ImagePreview(Arc::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl PartialEq for ImagePreview {
    fn eq(&self, other: &Self) -> bool {
        self.path() == other.path()
    }
}

impl Eq for ImagePreview {}

/// Classification of one side of a diff request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryContent {
    Text(RawText),
    Binary,
    /// Image whose bytes were written to a temporary file for previewing
    ImageBinary(ImagePreview),
    Missing,
    TooLarge,
    Unreadable(String),
}

impl EntryContent {
    /// Line view used for text diffing; a missing side diffs as an empty file
    pub fn as_raw_text(&self) -> Option<RawText> {
        match self {
            EntryContent::Text(raw_text) => Some(raw_text.clone()),
            EntryContent::Missing => Some(RawText::empty()),
            _ => None,
        }
    }
}

impl Display for EntryContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryContent::Text(raw_text) => {
                write!(f, "text ({} lines", raw_text.size())?;
                if raw_text.line_delimiter() == Some("\r\n") {
                    write!(f, ", crlf")?;
                }
                if raw_text.is_missing_trailing_newline() {
                    write!(f, ", no newline at end")?;
                }
                write!(f, ")")
            }
            EntryContent::Binary => write!(f, "binary"),
            EntryContent::ImageBinary(preview) => {
                write!(f, "image (preview at {})", preview.path().display())
            }
            EntryContent::Missing => write!(f, "missing"),
            EntryContent::TooLarge => write!(f, "too large"),
            EntryContent::Unreadable(reason) => write!(f, "unreadable ({reason})"),
        }
    }
}
