//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `diff`: Show changes between two snapshots as unified diff hunks
//! - `hunk`: Export one hunk as a patch for staging or unstaging

pub mod diff;
pub mod hunk;
