use crate::common::command::{bitdiff_diff_output, run_bitdiff_command, snapshot_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

fn write_mixed_changes(dir: &TempDir) {
    write_file(FileSpec::text(dir.path().join("old").join("deleted.txt"), "bye\n"));
    write_file(FileSpec::text(dir.path().join("new").join("added.txt"), "hi\n"));
    write_file(FileSpec::text(dir.path().join("old").join("changed.txt"), "v1\n"));
    write_file(FileSpec::text(dir.path().join("new").join("changed.txt"), "v2\n"));
}

#[rstest]
#[case("A", "added.txt")]
#[case("D", "deleted.txt")]
#[case("M", "changed.txt")]
fn show_only_filtered_changes(
    snapshot_dir: TempDir,
    #[case] filter: &str,
    #[case] expected_path: &str,
) {
    let dir = snapshot_dir;
    write_mixed_changes(&dir);

    let output = bitdiff_diff_output(dir.path(), &["--diff-filter", filter]);
    let headers = output
        .lines()
        .filter(|line| line.starts_with("diff --git"))
        .collect::<Vec<_>>();

    pretty_assertions::assert_eq!(
        headers,
        vec![format!("diff --git a/{expected_path} b/{expected_path}")]
    );
}

#[rstest]
fn reject_unknown_diff_filter(snapshot_dir: TempDir) {
    run_bitdiff_command(snapshot_dir.path(), &["diff", "old", "new", "--diff-filter", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid diff filter: X"));
}
