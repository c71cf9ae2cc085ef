//! Collaborators around the diff engine
//!
//! - `config`: Classifier configuration file
//! - `classifier`: Decides whether a side can be diffed as text
//! - `session`: The two snapshots being compared and the output writer
//! - `workspace`: File system access to one snapshot

pub mod classifier;
pub mod config;
pub mod session;
pub mod workspace;
