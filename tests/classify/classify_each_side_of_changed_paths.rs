use crate::common::command::{run_bitdiff_command, snapshot_dir};
use crate::common::file::{FileSpec, write_file, write_generated_lines};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn classify_each_side_of_changed_paths(
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = snapshot_dir;
    let (old, new) = (dir.path().join("old"), dir.path().join("new"));

    write_generated_lines(old.join("notes.txt"), 3);
    write_generated_lines(new.join("notes.txt"), 5);
    write_file(FileSpec::new(new.join("data.bin"), vec![0x7f, 0x00, 0x45]));
    write_file(FileSpec::text(old.join("removed.txt"), "gone\n"));

    let output = run_bitdiff_command(dir.path(), &["classify", "old", "new"])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(
        actual_output,
        "A\tdata.bin\tmissing\tbinary\n\
         M\tnotes.txt\ttext (3 lines)\ttext (5 lines)\n\
         D\tremoved.txt\ttext (1 lines)\tmissing\n"
    );

    Ok(())
}

#[rstest]
fn classify_files_over_the_size_limit_as_too_large(
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = snapshot_dir;
    write_file(FileSpec::text(dir.path().join("old").join("log.txt"), "short\n"));
    write_file(FileSpec::text(
        dir.path().join("new").join("log.txt"),
        "a much longer line than the limit\n",
    ));

    let output = run_bitdiff_command(dir.path(), &["classify", "old", "new", "--max-size", "10"])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(actual_output, "M\tlog.txt\ttext (1 lines)\ttoo large\n");

    Ok(())
}
