use crate::common::command::{run_bitdiff_command, snapshot_dir_for_diff_hunks};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn print_first_hunk_of_a_modified_file_as_unstage_patch(
    snapshot_dir_for_diff_hunks: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = snapshot_dir_for_diff_hunks;

    let expected_output = r#"diff --git a/a/2.txt b/a/2.txt
--- a/a/2.txt
+++ b/a/2.txt
@@ -1,6 +1,9 @@
 fn main() {
     let s = String::new();
     std::io::stdin().read_line(&mut s).unwrap();
+    for i in 0..1000000000 {
+        println!("{}",  s);
+    }
 
     println!("Done");
 
"#;

    let output = run_bitdiff_command(
        dir.path(),
        &["hunk", "old", "new", "--path", "a/2.txt", "--index", "0", "--reverse"],
    )
    .assert()
    .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
