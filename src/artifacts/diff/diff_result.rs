//! Diff request entry point
//!
//! Turns the classified content of both sides into a `DiffResult`:
//!
//! - either side unreadable: the whole request fails
//! - both sides text (a missing side counts as an empty text): hunks
//! - anything else: both classifications are handed back untouched so the
//!   caller can render binary, image or size placeholders

use crate::artifacts::diff::entry_content::EntryContent;
use crate::artifacts::diff::hunk::Hunk;
use crate::artifacts::diff::hunk_generator::format_hunks;
use crate::artifacts::diff::myers::diff_lines;
use crate::artifacts::diff::raw_text::RawText;
use crate::errors::{DiffError, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffResult {
    Text {
        hunks: Vec<Hunk>,
    },
    NonText {
        old_binary_content: EntryContent,
        new_binary_content: EntryContent,
    },
}

impl DiffResult {
    pub fn hunks(&self) -> Option<&[Hunk]> {
        match self {
            DiffResult::Text { hunks } => Some(hunks),
            DiffResult::NonText { .. } => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HunkDiffGenerator;

impl HunkDiffGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn format(
        &self,
        raw_old: EntryContent,
        raw_new: EntryContent,
    ) -> Result<DiffResult, DiffError> {
        for (side, content) in [(Side::Old, &raw_old), (Side::New, &raw_new)] {
            if let EntryContent::Unreadable(reason) = content {
                return Err(DiffError::UnreadableObject {
                    side,
                    reason: reason.clone(),
                });
            }
        }

        match (raw_old.as_raw_text(), raw_new.as_raw_text()) {
            (Some(old_text), Some(new_text)) => Ok(DiffResult::Text {
                hunks: self.format_text(&old_text, &new_text),
            }),
            _ => {
                log::debug!("non text diff between {raw_old} and {raw_new}");
                Ok(DiffResult::NonText {
                    old_binary_content: raw_old,
                    new_binary_content: raw_new,
                })
            }
        }
    }

    pub fn format_text(&self, old_text: &RawText, new_text: &RawText) -> Vec<Hunk> {
        let edits = diff_lines(&old_text.line_slices(), &new_text.line_slices());
        format_hunks(&edits, old_text, new_text)
    }
}
