use crate::common::command::{run_bitdiff_command, snapshot_dir, snapshot_dir_for_diff_hunks};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn refuse_hunk_index_out_of_range(snapshot_dir_for_diff_hunks: TempDir) {
    run_bitdiff_command(
        snapshot_dir_for_diff_hunks.path(),
        &["hunk", "old", "new", "--path", "1.txt", "--index", "2"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("Hunk 2 does not exist"));
}

#[rstest]
fn refuse_to_guess_the_path_when_several_changed(snapshot_dir_for_diff_hunks: TempDir) {
    run_bitdiff_command(
        snapshot_dir_for_diff_hunks.path(),
        &["hunk", "old", "new", "--index", "0"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("2 paths changed"));
}

#[rstest]
fn refuse_hunks_of_an_added_file(snapshot_dir: TempDir) {
    let dir = snapshot_dir;
    write_file(FileSpec::text(dir.path().join("new").join("fresh.txt"), "new\n"));

    run_bitdiff_command(dir.path(), &["hunk", "old", "new", "--index", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only be staged for modified files"));
}

#[rstest]
fn refuse_hunks_of_a_binary_file(snapshot_dir: TempDir) {
    let dir = snapshot_dir;
    write_file(FileSpec::new(dir.path().join("old").join("b.bin"), vec![0, 1]));
    write_file(FileSpec::new(dir.path().join("new").join("b.bin"), vec![0, 2]));

    run_bitdiff_command(dir.path(), &["hunk", "old", "new", "--index", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no text hunks"));
}
