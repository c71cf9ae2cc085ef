//! Git object identity
//!
//! - `object_id`: SHA-1 blob ids shown in the `index` line of a diff
//! - `entry_mode`: file modes shown in mode change lines

pub mod entry_mode;
pub mod object_id;
