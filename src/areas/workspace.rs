//! One side of a diff on disk
//!
//! A `Workspace` is a snapshot rooted either at a directory (every file below
//! it takes part in the diff) or at a single file. Paths handed to it are
//! relative to the snapshot root; a single-file snapshot resolves every path
//! to its one file, so two files with different names can be compared.

use crate::artifacts::objects::entry_mode::FileMode;
use bytes::Bytes;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [".git"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Root {
    Directory(PathBuf),
    File(PathBuf),
    Nothing(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Workspace {
    root: Root,
}

impl Workspace {
    pub fn new(path: &Path) -> Self {
        let root = if path.is_dir() {
            Root::Directory(path.to_path_buf())
        } else if path.exists() {
            Root::File(path.to_path_buf())
        } else {
            Root::Nothing(path.to_path_buf())
        };

        Workspace { root }
    }

    pub fn path(&self) -> &Path {
        match &self.root {
            Root::Directory(path) | Root::File(path) | Root::Nothing(path) => path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.root, Root::Directory(_))
    }

    /// Files of the snapshot, relative to its root, in name order
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        match &self.root {
            Root::Directory(dir) => {
                let mut files = Vec::new();
                for entry in WalkDir::new(dir).sort_by_file_name() {
                    let entry = entry?;
                    if entry.file_type().is_file()
                        && let Some(relative) = self.relative_path(entry.path())
                    {
                        files.push(relative);
                    }
                }
                Ok(files)
            }
            Root::File(file) => Ok(file.file_name().map(PathBuf::from).into_iter().collect()),
            Root::Nothing(_) => Ok(Vec::new()),
        }
    }

    fn relative_path(&self, path: &Path) -> Option<PathBuf> {
        let relative = path.strip_prefix(self.path()).ok()?;

        if Self::is_ignored(relative) {
            None
        } else {
            Some(relative.to_path_buf())
        }
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                IGNORED_PATHS.contains(&name.to_string_lossy().as_ref())
            } else {
                false
            }
        })
    }

    /// Absolute location of `file_path` inside this snapshot, if it can exist
    pub fn resolve(&self, file_path: &Path) -> Option<PathBuf> {
        match &self.root {
            Root::Directory(dir) => Some(dir.join(file_path)),
            Root::File(file) => Some(file.clone()),
            Root::Nothing(_) => None,
        }
    }

    /// Raw bytes of `file_path`, `None` when the file does not exist on this side
    pub fn read_file(&self, file_path: &Path) -> std::io::Result<Option<Bytes>> {
        let Some(path) = self.resolve(file_path) else {
            return Ok(None);
        };

        match std::fs::read(&path) {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// File size from metadata, `None` when the file does not exist
    pub fn file_size(&self, file_path: &Path) -> std::io::Result<Option<u64>> {
        let Some(path) = self.resolve(file_path) else {
            return Ok(None);
        };

        match std::fs::metadata(&path) {
            Ok(metadata) => Ok(Some(metadata.len())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn file_mode(&self, file_path: &Path) -> Option<FileMode> {
        let path = self.resolve(file_path)?;
        if !path.is_file() {
            return None;
        }

        if is_executable::is_executable(&path) {
            Some(FileMode::Executable)
        } else {
            Some(FileMode::Regular)
        }
    }
}
