//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal SHA-1 hashes.
//! Diff output uses blob ids in its `index <old>..<new>` line, so a blob id is
//! computed the way git does it, over `blob <size>\0<content>`.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "abc123...def")
//! - Short: First 7 characters (e.g., "abc123")

use sha1::{Digest, Sha1};

const NULL_OID_RAW: &str = "0000000000000000000000000000000000000000";

/// Git object identifier (SHA-1 hash)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Id of a blob holding `content`
    pub fn for_blob(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(format!("blob {}\0", content.len()).as_bytes());
        hasher.update(content);

        Self(format!("{:x}", hasher.finalize()))
    }

    /// Id standing in for a side that does not exist
    pub fn null() -> Self {
        Self(NULL_OID_RAW.to_string())
    }

    /// Get abbreviated form of the object ID
    ///
    /// # Returns
    ///
    /// First 7 characters of the hash (standard Git abbreviation)
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
