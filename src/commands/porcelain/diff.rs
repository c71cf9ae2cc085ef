use crate::areas::session::{PathDiff, Session};
use crate::artifacts::diff::diff_result::DiffResult;
use crate::artifacts::diff::entry_content::EntryContent;
use crate::artifacts::diff::hunk::{Hunk, Line, LineType};
use crate::artifacts::diff::tree_diff::{DiffFilter, SnapshotEntry, TreeChangeType};
use crate::artifacts::objects::object_id::ObjectId;
use colored::{ColoredString, Colorize};
use derive_new::new;
use std::io::Write;
use std::path::Path;

const NULL_PATH: &str = "/dev/null";
const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

#[derive(Debug, Clone, Copy, new)]
pub struct DiffOptions {
    pub filter: DiffFilter,
    pub line_numbers: bool,
}

impl Session {
    pub async fn diff(&self, options: DiffOptions) -> anyhow::Result<()> {
        let changes = self.changes(options.filter)?;
        let diffs = self.diff_all(changes).await?;

        for diff in &diffs {
            self.print_diff(diff, options)?;
        }

        Ok(())
    }

    fn print_diff(&self, diff: &PathDiff, options: DiffOptions) -> anyhow::Result<()> {
        let path = slashed(&diff.path);
        let a_path = format!("a/{path}");
        let b_path = format!("b/{path}");

        writeln!(
            self.writer(),
            "{}",
            format!("diff --git {a_path} {b_path}").bold()
        )?;
        self.print_diff_mode(&diff.change)?;

        let (old, new) = (diff.change.old_entry(), diff.change.new_entry());
        if old.map(|e| &e.oid) == new.map(|e| &e.oid) {
            return Ok(());
        }
        self.print_index_line(old, new)?;

        let a_label = old.map_or(NULL_PATH.to_string(), |_| a_path.clone());
        let b_label = new.map_or(NULL_PATH.to_string(), |_| b_path.clone());

        match &diff.result {
            DiffResult::Text { hunks } => {
                writeln!(self.writer(), "{}", format!("--- {a_label}").bold())?;
                writeln!(self.writer(), "{}", format!("+++ {b_label}").bold())?;

                for hunk in hunks {
                    self.print_diff_hunk(hunk, options.line_numbers)?;
                }
            }
            DiffResult::NonText {
                old_binary_content,
                new_binary_content,
            } => self.print_non_text(
                &a_label,
                &b_label,
                old_binary_content,
                new_binary_content,
            )?,
        }

        Ok(())
    }

    fn print_diff_mode(&self, change: &TreeChangeType) -> anyhow::Result<()> {
        match change {
            TreeChangeType::Added(entry) => {
                writeln!(
                    self.writer(),
                    "{}",
                    format!("new file mode {}", entry.mode).bold()
                )?;
            }
            TreeChangeType::Deleted(entry) => {
                writeln!(
                    self.writer(),
                    "{}",
                    format!("deleted file mode {}", entry.mode).bold()
                )?;
            }
            TreeChangeType::Modified { old, new } if old.mode != new.mode => {
                writeln!(self.writer(), "{}", format!("old mode {}", old.mode).bold())?;
                writeln!(self.writer(), "{}", format!("new mode {}", new.mode).bold())?;
            }
            TreeChangeType::Modified { .. } => {}
        }

        Ok(())
    }

    fn print_index_line(
        &self,
        old: Option<&SnapshotEntry>,
        new: Option<&SnapshotEntry>,
    ) -> anyhow::Result<()> {
        let short_oid = |entry: Option<&SnapshotEntry>| {
            entry.map_or(ObjectId::null().to_short_oid(), |e| e.oid.to_short_oid())
        };

        let mut oid_range = format!("index {}..{}", short_oid(old), short_oid(new));
        if let (Some(old), Some(new)) = (old, new)
            && old.mode == new.mode
        {
            oid_range.push_str(&format!(" {}", old.mode));
        }

        writeln!(self.writer(), "{}", oid_range.bold())?;

        Ok(())
    }

    fn print_non_text(
        &self,
        a_label: &str,
        b_label: &str,
        old: &EntryContent,
        new: &EntryContent,
    ) -> anyhow::Result<()> {
        if matches!(old, EntryContent::TooLarge) || matches!(new, EntryContent::TooLarge) {
            writeln!(
                self.writer(),
                "Files {a_label} and {b_label} differ (too large to diff)"
            )?;
        } else {
            writeln!(self.writer(), "Binary files {a_label} and {b_label} differ")?;
        }

        for (side, content) in [("old", old), ("new", new)] {
            if let EntryContent::ImageBinary(preview) = content {
                writeln!(
                    self.writer(),
                    "Image preview ({side}): {}",
                    preview.path().display()
                )?;
            }
        }

        Ok(())
    }

    fn print_diff_hunk(&self, hunk: &Hunk, line_numbers: bool) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", hunk.header().cyan())?;

        let gutter_width = line_numbers.then(|| gutter_width(hunk));

        for line in hunk.lines() {
            if let Some(width) = gutter_width {
                write!(self.writer(), "{} ", line_number_gutter(line, width))?;
            }

            write!(self.writer(), "{}", colorize(line))?;
            self.writer().write_all(line.ending())?;

            if !line.has_trailing_newline() {
                writeln!(self.writer())?;
                writeln!(self.writer(), "{NO_NEWLINE_MARKER}")?;
            }
        }

        Ok(())
    }
}

fn colorize(line: &Line) -> ColoredString {
    let text = format!("{}{}", line.line_type.prefix(), line.display_content());

    match line.line_type {
        LineType::Added => text.green(),
        LineType::Removed => text.red(),
        LineType::Context => text.normal(),
    }
}

fn gutter_width(hunk: &Hunk) -> usize {
    let range = hunk.range();
    range.old_end.max(range.new_end).max(1).to_string().len()
}

/// `<old> <new>` right aligned, blank on the side the line does not exist on
fn line_number_gutter(line: &Line, width: usize) -> String {
    let number = |n: Option<usize>| n.map_or(" ".repeat(width), |n| format!("{n:>width$}"));

    format!(
        "{} {}",
        number(line.display_old_line_number()),
        number(line.display_new_line_number())
    )
}

fn slashed(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
