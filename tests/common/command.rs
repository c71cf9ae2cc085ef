use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn snapshot_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::create_dir_all(dir.path().join("old")).expect("Failed to create old snapshot");
    std::fs::create_dir_all(dir.path().join("new")).expect("Failed to create new snapshot");
    dir
}

#[fixture]
pub fn file_a() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();
    for i in 0..1000000000 {
        println!("{}",  s);
    }

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    tx.join().unwrap();

    println!("All threads completed");
}
"#
    .to_string()
}

#[fixture]
pub fn file_b() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    if let Err(e) = tx.join() {
        eprintln!("Thread error: {}", e);
    }

    println!("All threads completed");
}
"#
    .to_string()
}

#[fixture]
pub fn diff_hunks_output() -> String {
    "@@ -1,9 +1,6 @@\n fn main() {\n     let s = String::new();\n     std::io::stdin().read_line(&mut s).unwrap();\n-    for i in 0..1000000000 {\n-        println!(\"{}\",  s);\n-    }\n \n     println!(\"Done\");\n \n@@ -13,7 +10,9 @@\n         }\n     });\n \n-    tx.join().unwrap();\n+    if let Err(e) = tx.join() {\n+        eprintln!(\"Thread error: {}\", e);\n+    }\n \n     println!(\"All threads completed\");\n }\n"
        .to_string()
}

/// Snapshot pair where `1.txt` and `a/2.txt` change from `file_a` to `file_b`
#[fixture]
pub fn snapshot_dir_for_diff_hunks(snapshot_dir: TempDir, file_a: String, file_b: String) -> TempDir {
    for (side, content) in [("old", &file_a), ("new", &file_b)] {
        let root = snapshot_dir.path().join(side);
        write_file(FileSpec::text(root.join("1.txt"), content));
        write_file(FileSpec::text(root.join("a").join("2.txt"), content));
        write_file(FileSpec::text(root.join("same.txt"), "unchanged\n"));
    }

    snapshot_dir
}

pub fn run_bitdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bitdiff").expect("Failed to find bitdiff binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Runs `bitdiff diff old new` inside `dir` and returns its stdout
pub fn bitdiff_diff_output(dir: &Path, extra_args: &[&str]) -> String {
    let mut args = vec!["diff", "old", "new"];
    args.extend_from_slice(extra_args);

    let output = run_bitdiff_command(dir, &args).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is not UTF-8")
}
