//! Groups an edit list into hunks and renders their lines
//!
//! ## Grouping
//!
//! Edits closer than `2 * CONTEXT_LINES` lines on either side share a hunk,
//! otherwise their context windows would overlap. Each group is padded with
//! up to `CONTEXT_LINES` unchanged lines before its first and after its last
//! edit, clipped to the file boundaries.
//!
//! ## Rendering
//!
//! Two cursors walk the old and new texts jointly from the start of the
//! padded window to its end. Positions before the current edit are context,
//! positions inside the edit's old range are removed lines and the rest of
//! the edit is added lines. Once both cursors are past an edit, the next
//! edit of the group becomes current.

use crate::artifacts::diff::edit::{Edit, EditList};
use crate::artifacts::diff::hunk::{Hunk, HunkRange, Line, LineType};
use crate::artifacts::diff::raw_text::RawText;

pub const CONTEXT_LINES: usize = 3;

pub fn format_hunks(edits: &EditList, old_text: &RawText, new_text: &RawText) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let mut cur_idx = 0;

    while cur_idx < edits.len() {
        let end_idx = find_combined_end(edits, cur_idx);
        let group = &edits[cur_idx..=end_idx];

        hunks.push(format_hunk(group, old_text, new_text));
        cur_idx = end_idx + 1;
    }

    log::debug!(
        "formatted {} edit(s) into {} hunk(s)",
        edits.len(),
        hunks.len()
    );

    hunks
}

fn format_hunk(group: &[Edit], old_text: &RawText, new_text: &RawText) -> Hunk {
    let (first, last) = (&group[0], &group[group.len() - 1]);

    let range = HunkRange::new(
        first.begin_a.saturating_sub(CONTEXT_LINES),
        old_text.size().min(last.end_a + CONTEXT_LINES),
        first.begin_b.saturating_sub(CONTEXT_LINES),
        new_text.size().min(last.end_b + CONTEXT_LINES),
    );

    let mut old_cursor = range.old_start;
    let mut new_cursor = range.new_start;
    let mut edit_idx = 0;
    let mut lines = Vec::with_capacity(range.old_count().max(range.new_count()));

    while old_cursor < range.old_end || new_cursor < range.new_end {
        while group
            .get(edit_idx)
            .is_some_and(|edit| edit.is_passed(old_cursor, new_cursor))
        {
            edit_idx += 1;
        }

        let line = match group.get(edit_idx) {
            Some(edit) if old_cursor >= edit.begin_a && old_cursor < edit.end_a => {
                let line = Line::new(
                    old_text.rendered_line(old_cursor),
                    old_cursor,
                    new_cursor,
                    LineType::Removed,
                );
                old_cursor += 1;
                line
            }
            Some(edit) if old_cursor >= edit.begin_a => {
                let line = Line::new(
                    new_text.rendered_line(new_cursor),
                    old_cursor,
                    new_cursor,
                    LineType::Added,
                );
                new_cursor += 1;
                line
            }
            _ => {
                let line = Line::new(
                    old_text.rendered_line(old_cursor),
                    old_cursor,
                    new_cursor,
                    LineType::Context,
                );
                old_cursor += 1;
                new_cursor += 1;
                line
            }
        };

        lines.push(line);
    }

    Hunk::new(range, lines)
}

/// Index of the last edit that shares a hunk with the edit at `i`
pub fn find_combined_end(edits: &[Edit], i: usize) -> usize {
    let mut end = i + 1;
    while end < edits.len() && (combine_a(edits, end) || combine_b(edits, end)) {
        end += 1;
    }
    end - 1
}

fn combine_a(edits: &[Edit], i: usize) -> bool {
    edits[i].begin_a - edits[i - 1].end_a <= 2 * CONTEXT_LINES
}

fn combine_b(edits: &[Edit], i: usize) -> bool {
    edits[i].begin_b - edits[i - 1].end_b <= 2 * CONTEXT_LINES
}
