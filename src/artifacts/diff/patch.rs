//! Single-hunk patches for staging and unstaging
//!
//! A patch fragment is a minimal unified diff containing one file header and
//! one hunk. It is meant to be fed to `git apply --cached`, so every byte of
//! the header and of the lines has to follow the unified diff syntax.
//!
//! Unstaging applies the reverse of the staged hunk: added and removed lines
//! swap roles and the old/new ranges of the header swap with them.

use crate::artifacts::diff::hunk::Hunk;
use derive_new::new;
use std::path::Path;

const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchDirection {
    Stage,
    Unstage,
}

#[derive(Debug, Clone, new)]
pub struct HunkPatch<'h> {
    path: &'h Path,
    hunk: &'h Hunk,
    direction: PatchDirection,
}

impl HunkPatch<'_> {
    /// The patch bytes; line content is copied verbatim so the patch applies
    /// to files in any encoding
    pub fn render(&self) -> Vec<u8> {
        let hunk = match self.direction {
            PatchDirection::Stage => self.hunk.clone(),
            PatchDirection::Unstage => self.hunk.reversed(),
        };

        let path = self.path.to_string_lossy().replace('\\', "/");
        let mut patch =
            format!("diff --git a/{path} b/{path}\n--- a/{path}\n+++ b/{path}\n").into_bytes();

        patch.extend_from_slice(hunk.header().as_bytes());
        patch.push(b'\n');

        for line in hunk.lines() {
            patch.push(line.line_type.prefix() as u8);
            patch.extend_from_slice(&line.text);

            if !line.has_trailing_newline() {
                patch.push(b'\n');
                patch.extend_from_slice(NO_NEWLINE_MARKER.as_bytes());
                patch.push(b'\n');
            }
        }

        patch
    }
}
