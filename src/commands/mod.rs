//! Command implementations
//!
//! Organized the way git organizes its commands:
//!
//! - `plumbing`: Low-level commands for scripting (classify)
//! - `porcelain`: User-facing commands (diff, hunk)

pub mod plumbing;
pub mod porcelain;
