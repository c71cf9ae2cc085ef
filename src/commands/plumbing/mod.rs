//! Plumbing commands (low-level operations)
//!
//! ## Commands
//!
//! - `classify`: Show how each side of every changed path is classified

pub mod classify;
