//! Line-level diff engine producing unified diff hunks
//!
//! Two sides of a file are classified (text, binary, image, missing, too
//! large or unreadable). Text sides are diffed line by line with Myers'
//! algorithm and the edits are grouped into hunks whose headers and lines
//! follow the unified diff format byte for byte, so a single hunk can be
//! turned into a patch for `git apply`.
//!
//! ```
//! use bitdiff::artifacts::diff::diff_result::HunkDiffGenerator;
//! use bitdiff::artifacts::diff::raw_text::RawText;
//!
//! let old = RawText::from("a\nb\nc\n");
//! let new = RawText::from("a\nx\nc\n");
//! let hunks = HunkDiffGenerator::new().format_text(&old, &new);
//!
//! assert_eq!(hunks[0].header(), "@@ -1,3 +1,3 @@");
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
