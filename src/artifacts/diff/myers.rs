//! Myers' O(N·D) shortest edit script
//!
//! The edit script is computed with the linear space variant of Myers'
//! algorithm: the middle snake of the current box is found by running the
//! forward and the backward search towards each other, and both halves are
//! solved recursively. Memory stays proportional to `N + M` no matter how many
//! edits the texts need.
//!
//! Operations of the script are grouped into `Edit`s: every run of deletions,
//! insertions and replacements between two equal stretches becomes one edit.
//! Ties are always broken the same way, so the output only depends on the
//! input sequences.

use crate::artifacts::diff::edit::{Edit, EditList};
use derive_new::new;
use similar::{Algorithm, DiffOp, DiffTag};
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: Eq + Hash + Ord> MyersDiff<'_, T> {
    /// The shortest edit script as produced by the middle snake search
    pub fn script(&self) -> Vec<DiffOp> {
        similar::capture_diff_slices(Algorithm::Myers, self.a, self.b)
    }

    pub fn edit_list(&self) -> EditList {
        if self.a == self.b {
            return Vec::new();
        }

        let mut edits = Vec::new();
        let mut pending: Option<Edit> = None;

        for op in self.script() {
            if op.tag() == DiffTag::Equal {
                if let Some(edit) = pending.take() {
                    edits.push(edit);
                }
                continue;
            }

            let (old_range, new_range) = (op.old_range(), op.new_range());
            match pending.as_mut() {
                Some(edit) => {
                    edit.end_a = old_range.end;
                    edit.end_b = new_range.end;
                }
                None => {
                    pending = Some(Edit::new(
                        old_range.start,
                        old_range.end,
                        new_range.start,
                        new_range.end,
                    ))
                }
            }
        }

        if let Some(edit) = pending {
            edits.push(edit);
        }

        edits
    }
}

/// Computes the edit list between two line sequences
pub fn diff_lines<T: Eq + Hash + Ord>(a: &[T], b: &[T]) -> EditList {
    MyersDiff::new(a, b).edit_list()
}
