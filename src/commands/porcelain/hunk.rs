use crate::areas::session::Session;
use crate::artifacts::diff::patch::{HunkPatch, PatchDirection};
use crate::artifacts::diff::tree_diff::DiffFilter;
use crate::errors::DiffError;
use std::io::Write;
use std::path::Path;

impl Session {
    /// Prints hunk `index` of `path` as a patch that stages it, or unstages it
    /// when `direction` is `Unstage`
    pub fn hunk(
        &self,
        path: Option<&Path>,
        index: usize,
        direction: PatchDirection,
    ) -> anyhow::Result<()> {
        let changes = self.changes(DiffFilter::all())?;

        let (path, change) = match path {
            Some(path) => changes
                .get_key_value(path)
                .ok_or_else(|| anyhow::anyhow!("No changes for {}", path.display()))?,
            None if changes.len() == 1 => changes
                .first_key_value()
                .ok_or_else(|| anyhow::anyhow!("No changes"))?,
            None if changes.is_empty() => anyhow::bail!("No changes"),
            None => anyhow::bail!(
                "{} paths changed, choose one with --path",
                changes.len()
            ),
        };

        if !change.is_modification() {
            return Err(DiffError::NotAModification(path.clone()).into());
        }

        let result = self.diff_path(path)?;
        let hunks = result
            .hunks()
            .ok_or_else(|| DiffError::NotText(path.clone()))?;
        let hunk = hunks.get(index).ok_or_else(|| DiffError::HunkOutOfRange {
            path: path.clone(),
            index,
            count: hunks.len(),
        })?;

        log::debug!("{:?} hunk {index} of {}", direction, path.display());
        self.writer()
            .write_all(&HunkPatch::new(path, hunk, direction).render())?;

        Ok(())
    }
}
