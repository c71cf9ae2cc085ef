use crate::common::command::{bitdiff_diff_output, snapshot_dir};
use crate::common::file::{FileSpec, write_file};
use crate::common::short_oid;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_diff_for_added_and_deleted_files(snapshot_dir: TempDir) {
    let dir = snapshot_dir;
    let deleted = "first\nsecond\n";
    let added = "hello\nworld\n";

    write_file(FileSpec::text(dir.path().join("old").join("gone.txt"), deleted));
    write_file(FileSpec::text(
        dir.path().join("new").join("nested").join("fresh.txt"),
        added,
    ));

    let expected_output = format!(
        r#"diff --git a/gone.txt b/gone.txt
deleted file mode 100644
index {}..0000000
--- a/gone.txt
+++ /dev/null
@@ -1,2 +0,0 @@
-first
-second
diff --git a/nested/fresh.txt b/nested/fresh.txt
new file mode 100644
index 0000000..{}
--- /dev/null
+++ b/nested/fresh.txt
@@ -0,0 +1,2 @@
+hello
+world
"#,
        short_oid(deleted),
        short_oid(added)
    );

    pretty_assertions::assert_eq!(bitdiff_diff_output(dir.path(), &[]), expected_output);
}
