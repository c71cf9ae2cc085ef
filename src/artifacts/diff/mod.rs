//! Diff algorithms and hunk generation
//!
//! - `raw_text`: line-split, delimiter-aware file content
//! - `entry_content`: classification of one diff side
//! - `edit` / `myers`: Myers' diff producing line-range edits
//! - `hunk` / `hunk_generator`: grouping edits into unified diff hunks
//! - `diff_result`: the entry point turning two sides into a result
//! - `patch`: single-hunk patches for staging and unstaging
//! - `tree_diff`: which paths changed between two snapshots

pub mod diff_result;
pub mod edit;
pub mod entry_content;
pub mod hunk;
pub mod hunk_generator;
pub mod myers;
pub mod patch;
pub mod raw_text;
pub mod tree_diff;
