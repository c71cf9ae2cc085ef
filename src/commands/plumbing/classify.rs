use crate::areas::session::Session;
use crate::artifacts::diff::tree_diff::DiffFilter;

impl Session {
    /// Prints `<status>\t<path>\t<old content>\t<new content>` for every changed path
    pub fn classify(&self) -> anyhow::Result<()> {
        for (path, change) in self.changes(DiffFilter::all())? {
            let old = self.classifier().classify(self.old(), &path);
            let new = self.classifier().classify(self.new_side(), &path);

            writeln!(
                self.writer(),
                "{}\t{}\t{old}\t{new}",
                change.status_char(),
                path.display()
            )?;
        }

        Ok(())
    }
}
