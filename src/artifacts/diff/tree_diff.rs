//! Changed paths between two snapshots
//!
//! Both snapshots are walked and every path is compared by blob id and file
//! mode. The result is ordered by path so output is stable. When neither
//! snapshot is a directory the two files are compared directly under the new
//! file's name (or the old one's if the new file does not exist).

use crate::areas::workspace::Workspace;
use crate::artifacts::objects::entry_mode::FileMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{DiffError, Side};
use bitflags::bitflags;
use derive_new::new;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct DiffFilter: u32 {
        const ADDED = 0b0001;
        const DELETED = 0b0010;
        const MODIFIED = 0b0100;
    }
}

impl DiffFilter {
    pub fn try_parse(s: &str) -> Result<Self, DiffError> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c {
                'A' => filter |= Self::ADDED,
                'D' => filter |= Self::DELETED,
                'M' => filter |= Self::MODIFIED,
                _ => return Err(DiffError::InvalidDiffFilter(s.to_string())),
            }
        }

        Ok(filter)
    }
}

/// Identity of one side of a changed path
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SnapshotEntry {
    pub oid: ObjectId,
    pub mode: FileMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeChangeType {
    Added(SnapshotEntry),
    Deleted(SnapshotEntry),
    Modified {
        old: SnapshotEntry,
        new: SnapshotEntry,
    },
}

impl TreeChangeType {
    pub fn from_entries(old: Option<SnapshotEntry>, new: Option<SnapshotEntry>) -> Option<Self> {
        match (old, new) {
            (None, Some(new)) => Some(TreeChangeType::Added(new)),
            (Some(old), None) => Some(TreeChangeType::Deleted(old)),
            (Some(old), Some(new)) if old != new => Some(TreeChangeType::Modified { old, new }),
            _ => None,
        }
    }

    pub fn matches_filter(&self, filter: DiffFilter) -> bool {
        match self {
            TreeChangeType::Added(_) => filter.contains(DiffFilter::ADDED),
            TreeChangeType::Deleted(_) => filter.contains(DiffFilter::DELETED),
            TreeChangeType::Modified { .. } => filter.contains(DiffFilter::MODIFIED),
        }
    }

    pub fn old_entry(&self) -> Option<&SnapshotEntry> {
        match self {
            TreeChangeType::Deleted(entry) => Some(entry),
            TreeChangeType::Modified { old, .. } => Some(old),
            TreeChangeType::Added(_) => None,
        }
    }

    pub fn new_entry(&self) -> Option<&SnapshotEntry> {
        match self {
            TreeChangeType::Added(entry) => Some(entry),
            TreeChangeType::Modified { new, .. } => Some(new),
            TreeChangeType::Deleted(_) => None,
        }
    }

    pub fn is_modification(&self) -> bool {
        matches!(self, TreeChangeType::Modified { .. })
    }

    pub fn status_char(&self) -> char {
        match self {
            TreeChangeType::Added(_) => 'A',
            TreeChangeType::Deleted(_) => 'D',
            TreeChangeType::Modified { .. } => 'M',
        }
    }
}

pub type ChangeSet = BTreeMap<PathBuf, TreeChangeType>;

#[derive(Debug)]
pub struct TreeDiff<'w> {
    old: &'w Workspace,
    new: &'w Workspace,
    change_set: ChangeSet,
}

impl<'w> TreeDiff<'w> {
    pub fn new(old: &'w Workspace, new: &'w Workspace) -> Self {
        TreeDiff {
            old,
            new,
            change_set: BTreeMap::new(),
        }
    }

    pub fn into_changes(self) -> ChangeSet {
        self.change_set
    }

    pub fn compare(&mut self, filter: DiffFilter) -> anyhow::Result<()> {
        let paths = if self.old.is_directory() || self.new.is_directory() {
            let mut paths = self.old.list_files()?;
            paths.extend(self.new.list_files()?);
            paths.sort();
            paths.dedup();
            paths
        } else {
            self.new
                .list_files()?
                .into_iter()
                .chain(self.old.list_files()?)
                .take(1)
                .collect()
        };

        for path in paths {
            let old = Self::snapshot_entry(self.old, Side::Old, &path)?;
            let new = Self::snapshot_entry(self.new, Side::New, &path)?;

            if let Some(change) = TreeChangeType::from_entries(old, new)
                && change.matches_filter(filter)
            {
                self.change_set.insert(path, change);
            }
        }

        log::debug!("{} changed path(s)", self.change_set.len());

        Ok(())
    }

    fn snapshot_entry(
        workspace: &Workspace,
        side: Side,
        path: &Path,
    ) -> Result<Option<SnapshotEntry>, DiffError> {
        let Some(mode) = workspace.file_mode(path) else {
            return Ok(None);
        };

        let oid = match workspace.read_file(path) {
            Ok(Some(data)) => ObjectId::for_blob(&data),
            Ok(None) => return Ok(None),
            Err(e) => {
                return Err(DiffError::UnreadableObject {
                    side,
                    reason: format!("{}: {e}", path.display()),
                });
            }
        };

        Ok(Some(SnapshotEntry::new(oid, mode)))
    }
}
