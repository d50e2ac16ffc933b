use std::fs;

use predicates::prelude::*;

mod common;

#[test]
fn creates_store_layout() {
    let dir = tempfile::tempdir().unwrap();

    common::odb(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Initialized empty store in "))
        .stderr("");

    let git_dir = dir.path().join(".git");
    assert!(git_dir.join("objects").is_dir());
    assert!(git_dir.join("refs").is_dir());
    assert_eq!(
        fs::read_to_string(git_dir.join("HEAD")).unwrap(),
        "ref: refs/heads/main\n"
    );
}

#[test]
fn objects_dir_is_empty() {
    let dir = common::init_empty_store();

    let objects_dir = dir.path().join(".git/objects");
    assert_eq!(fs::read_dir(objects_dir).unwrap().count(), 0);
}

#[test]
fn error_if_already_initialized() {
    let dir = common::init_empty_store();

    common::odb(dir.path())
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}
