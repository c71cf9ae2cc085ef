//! Error types of the diff engine
//!
//! Engine-level failures are typed so that callers can tell an unreadable
//! object apart from a bad request. The command layer wraps them in
//! `anyhow::Error` like every other failure.

use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Old => write!(f, "old"),
            Side::New => write!(f, "new"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DiffError {
    #[error("Invalid object in diff: {side} side is unreadable ({reason})")]
    UnreadableObject { side: Side, reason: String },

    #[error("Hunk {index} does not exist, {path:?} has {count} hunk(s)")]
    HunkOutOfRange {
        path: PathBuf,
        index: usize,
        count: usize,
    },

    #[error("Hunks can only be staged for modified files, {0:?} is not modified")]
    NotAModification(PathBuf),

    #[error("{0:?} has no text hunks")]
    NotText(PathBuf),

    #[error("Invalid diff filter: {0}")]
    InvalidDiffFilter(String),

    #[error("Invalid config file {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
