use crate::areas::classifier::ContentClassifier;
use crate::areas::config::ClassifierConfig;
use crate::areas::workspace::Workspace;
use crate::artifacts::diff::diff_result::{DiffResult, HunkDiffGenerator};
use crate::artifacts::diff::tree_diff::{ChangeSet, DiffFilter, TreeChangeType, TreeDiff};
use crate::errors::DiffError;
use std::cell::{RefCell, RefMut};
use std::num::NonZero;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// A changed path together with its computed diff
#[derive(Debug, Clone)]
pub struct PathDiff {
    pub path: PathBuf,
    pub change: TreeChangeType,
    pub result: DiffResult,
}

/// Fallback worker count when the available parallelism is unknown
const DEFAULT_DIFF_WORKERS: usize = 4;

/// Both snapshots and the classifier, shared read-only with the diff workers
#[derive(Debug)]
struct DiffSides {
    old: Workspace,
    new: Workspace,
    classifier: ContentClassifier,
}

impl DiffSides {
    fn diff(&self, path: &Path) -> Result<DiffResult, DiffError> {
        let raw_old = self.classifier.classify(&self.old, path);
        let raw_new = self.classifier.classify(&self.new, path);

        HunkDiffGenerator::new().format(raw_old, raw_new)
    }
}

/// Two snapshots being compared plus everything needed to diff them
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    sides: Arc<DiffSides>,
    workers: usize,
}

impl Session {
    pub fn new(
        old: &Path,
        new: &Path,
        config: ClassifierConfig,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let (old, new) = (Workspace::new(old), Workspace::new(new));

        let is_file = |w: &Workspace| w.path().is_file();
        if (old.is_directory() && is_file(&new)) || (new.is_directory() && is_file(&old)) {
            anyhow::bail!(
                "Cannot compare a directory with a file: {} and {}",
                old.path().display(),
                new.path().display()
            );
        }
        if !old.path().exists() && !new.path().exists() {
            anyhow::bail!(
                "Neither {} nor {} exists",
                old.path().display(),
                new.path().display()
            );
        }

        let workers = std::thread::available_parallelism()
            .map(NonZero::get)
            .unwrap_or(DEFAULT_DIFF_WORKERS);

        Ok(Session {
            writer: RefCell::new(writer),
            sides: Arc::new(DiffSides {
                old,
                new,
                classifier: ContentClassifier::new(config),
            }),
            workers,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn old(&self) -> &Workspace {
        &self.sides.old
    }

    pub fn new_side(&self) -> &Workspace {
        &self.sides.new
    }

    pub fn classifier(&self) -> &ContentClassifier {
        &self.sides.classifier
    }

    pub fn changes(&self, filter: DiffFilter) -> anyhow::Result<ChangeSet> {
        let mut tree_diff = TreeDiff::new(&self.sides.old, &self.sides.new);
        tree_diff.compare(filter)?;

        Ok(tree_diff.into_changes())
    }

    /// Diffs one path of the two snapshots
    pub fn diff_path(&self, path: &Path) -> Result<DiffResult, DiffError> {
        self.sides.diff(path)
    }

    /// Diffs every changed path on the blocking pool, at most `workers` at a
    /// time, results in path order
    pub async fn diff_all(&self, changes: ChangeSet) -> anyhow::Result<Vec<PathDiff>> {
        let permits = Arc::new(Semaphore::new(self.workers));
        let mut tasks = Vec::with_capacity(changes.len());

        for (path, change) in changes {
            let permit = Arc::clone(&permits).acquire_owned().await?;
            let sides = Arc::clone(&self.sides);

            tasks.push(tokio::task::spawn_blocking(move || {
                let _permit = permit;
                sides.diff(&path).map(|result| PathDiff {
                    path,
                    change,
                    result,
                })
            }));
        }

        let mut diffs = Vec::with_capacity(tasks.len());
        for task in tasks {
            diffs.push(task.await??);
        }

        Ok(diffs)
    }
}
