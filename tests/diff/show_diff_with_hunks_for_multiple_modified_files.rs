use crate::common::command::{
    bitdiff_diff_output, diff_hunks_output, file_a, file_b, snapshot_dir_for_diff_hunks,
};
use crate::common::short_oid;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_diff_with_hunks_for_multiple_modified_files(
    snapshot_dir_for_diff_hunks: TempDir,
    file_a: String,
    file_b: String,
    diff_hunks_output: String,
) {
    let dir = snapshot_dir_for_diff_hunks;
    let (old_oid, new_oid) = (short_oid(&file_a), short_oid(&file_b));

    let expected_output = format!(
        r#"diff --git a/1.txt b/1.txt
index {old_oid}..{new_oid} 100644
--- a/1.txt
+++ b/1.txt
{diff_hunks_output}diff --git a/a/2.txt b/a/2.txt
index {old_oid}..{new_oid} 100644
--- a/a/2.txt
+++ b/a/2.txt
{diff_hunks_output}"#
    );

    pretty_assertions::assert_eq!(bitdiff_diff_output(dir.path(), &[]), expected_output);
}
