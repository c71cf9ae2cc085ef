use crate::common::command::{run_bitdiff_command, snapshot_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_diff_for_a_single_file_pair(snapshot_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = snapshot_dir;
    write_file(FileSpec::text(dir.path().join("before.txt"), "a\nb\nc\n"));
    write_file(FileSpec::text(dir.path().join("after.txt"), "a\nb\nc\nd\n"));

    let output = run_bitdiff_command(dir.path(), &["diff", "before.txt", "after.txt"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    assert!(stdout.starts_with("diff --git a/after.txt b/after.txt\n"));
    assert!(stdout.ends_with("@@ -1,3 +1,4 @@\n a\n b\n c\n+d\n"));

    Ok(())
}
