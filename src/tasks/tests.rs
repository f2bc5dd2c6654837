use std::fs;
use std::path::Path;

use tempfile::tempdir;

use crate::tasks::ferate::Ferate;
use crate::tasks::magazin::Magazin;
use crate::tasks::supercomputer::Supercomputer;
use crate::tasks::teleportare::Teleportare;
use crate::tasks::{run, Task};
use crate::util::cli::TaskPaths;

// writes `input` to `<name>.in` in `dir`, runs the task and returns the output text
fn run_in<T: Task>(dir: &Path, input: &str) -> anyhow::Result<String> {
    let paths = TaskPaths {
        input: dir.join(format!("{}.in", T::NAME)),
        output: dir.join(format!("{}.out", T::NAME)),
    };
    fs::write(&paths.input, input)?;
    run::<T>(&paths)?;
    Ok(fs::read_to_string(&paths.output)?)
}

#[test]
fn test_ferate_end_to_end() {
    let dir = tempdir().unwrap();
    let output = run_in::<Ferate>(dir.path(), "6 5 1\n1 2\n3 4\n4 3\n5 6\n6 4\n").unwrap();
    assert_eq!(output, "1\n");
}

#[test]
fn test_magazin_end_to_end() {
    let dir = tempdir().unwrap();
    let output = run_in::<Magazin>(dir.path(), "4 3\n1 1 2\n1 2\n2 1\n3 1\n").unwrap();
    // preorder 1 2 4 3
    assert_eq!(output, "4\n4\n-1\n");
}

#[test]
fn test_supercomputer_end_to_end() {
    let dir = tempdir().unwrap();
    let output = run_in::<Supercomputer>(dir.path(), "3 2\n1 2 1\n1 2\n2 3\n").unwrap();
    assert_eq!(output, "2\n");
}

#[test]
fn test_teleportare_end_to_end() {
    let dir = tempdir().unwrap();
    let output =
        run_in::<Teleportare>(dir.path(), "4 3 1\n1 2 2\n2 3 2\n3 4 7\n2 4 2\n").unwrap();
    // arrive at 2 at time 2, portal open, exit at 3
    assert_eq!(output, "3\n");
}

#[test]
fn test_trailing_data_is_ignored() {
    let dir = tempdir().unwrap();
    let output = run_in::<Supercomputer>(dir.path(), "2 1\n1 2\n1 2\n9 9 9\n").unwrap();
    assert_eq!(output, "1\n");
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let paths = TaskPaths {
        input: dir.path().join("absent.in"),
        output: dir.path().join("absent.out"),
    };
    let err = run::<Ferate>(&paths).unwrap_err();
    assert!(err.to_string().contains("absent.in"));
    assert!(!paths.output.exists());
}

#[test]
fn test_truncated_input_names_the_file() {
    let dir = tempdir().unwrap();
    let err = run_in::<Supercomputer>(dir.path(), "3 1\n1 2\n").unwrap_err();
    assert!(format!("{err:#}").contains("input ended early"));
}

#[test]
fn test_empty_input_file() {
    let dir = tempdir().unwrap();
    let err = run_in::<Teleportare>(dir.path(), "").unwrap_err();
    assert!(format!("{err:#}").contains("number of rooms"));
}
