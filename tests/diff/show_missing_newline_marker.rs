use crate::common::command::{bitdiff_diff_output, snapshot_dir};
use crate::common::file::{FileSpec, write_file};
use crate::common::short_oid;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_missing_newline_marker(snapshot_dir: TempDir) {
    let dir = snapshot_dir;
    write_file(FileSpec::text(dir.path().join("old").join("notes.txt"), "keep\nold"));
    write_file(FileSpec::text(dir.path().join("new").join("notes.txt"), "keep\nnew"));

    let expected_output = format!(
        r#"diff --git a/notes.txt b/notes.txt
index {}..{} 100644
--- a/notes.txt
+++ b/notes.txt
@@ -1,2 +1,2 @@
 keep
-old
\ No newline at end of file
+new
\ No newline at end of file
"#,
        short_oid("keep\nold"),
        short_oid("keep\nnew")
    );

    pretty_assertions::assert_eq!(bitdiff_diff_output(dir.path(), &[]), expected_output);
}

#[rstest]
fn show_added_trailing_newline_as_a_change(snapshot_dir: TempDir) {
    let dir = snapshot_dir;
    write_file(FileSpec::text(dir.path().join("old").join("notes.txt"), "one\ntwo"));
    write_file(FileSpec::text(dir.path().join("new").join("notes.txt"), "one\ntwo\n"));

    let output = bitdiff_diff_output(dir.path(), &[]);

    assert!(output.ends_with(
        "@@ -1,2 +1,2 @@\n one\n-two\n\\ No newline at end of file\n+two\n"
    ));
}
