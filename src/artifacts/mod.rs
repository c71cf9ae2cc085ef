//! Diff data structures and algorithms
//!
//! - `core`: Shared utilities (pager wrapper)
//! - `diff`: Line diffing, hunks and patches
//! - `objects`: Git object ids and file modes

pub mod core;
pub mod diff;
pub mod objects;
